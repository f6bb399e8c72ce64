//! Single-stop editing session
//!
//! The session is an explicit state machine plus an outbound intent queue.
//! Field setters never touch the controller's working set; each one
//! enqueues exactly one [`EditorIntent::UpdatedStop`] carrying a freshly
//! built stop with the session's id and current field values. The
//! controller drains the queue and applies the intents, so every edit
//! flows through one code path and each intent is consumed exactly once.

use std::collections::VecDeque;

use tracing::{error, warn};

use ramp_core::{Color, ColorPayload, Stop, StopId};

/// Discrete request emitted by the session toward its owning controller
#[derive(Clone, Debug, PartialEq)]
pub enum EditorIntent {
    /// Replace the stop with this id by the carried value
    UpdatedStop(Stop),
    /// Move selection to the previous stop in position order (cyclic)
    Prev,
    /// Move selection to the next stop in position order (cyclic)
    Next,
    /// Remove the stop being edited
    Delete,
    /// End the session with no stop selected
    Close,
}

/// Which stop, if any, a session is editing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Inactive,
    Editing(StopId),
}

/// Transient editing state for exactly one selected stop
///
/// Holds copies of the stop's fields, never references into the working
/// set.
#[derive(Debug)]
pub struct StopEditorSession {
    state: SessionState,
    is_single_color: bool,
    first_color: Color,
    second_color: Color,
    position: f32,
    can_delete: bool,
    intents: VecDeque<EditorIntent>,
}

impl StopEditorSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Inactive,
            is_single_color: true,
            first_color: Color::WHITE,
            second_color: Color::WHITE,
            position: 0.0,
            can_delete: false,
            intents: VecDeque::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Editing(_))
    }

    pub fn stop_id(&self) -> Option<StopId> {
        match self.state {
            SessionState::Inactive => None,
            SessionState::Editing(id) => Some(id),
        }
    }

    pub fn is_single_color(&self) -> bool {
        self.is_single_color
    }

    pub fn first_color(&self) -> Color {
        self.first_color
    }

    pub fn second_color(&self) -> Color {
        self.second_color
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn can_delete(&self) -> bool {
        self.can_delete
    }

    /// Begin editing a stop, seeding all fields from its snapshot
    pub fn activate(&mut self, stop: &Stop, can_delete: bool) {
        self.seed(stop, can_delete);
        self.state = SessionState::Editing(stop.id());
    }

    /// Re-seed from a different stop without emitting an update
    ///
    /// This is a silent re-target, not an edit: selection moves do not
    /// count as stop mutations.
    pub fn change(&mut self, stop: &Stop, can_delete: bool) {
        self.seed(stop, can_delete);
        self.state = SessionState::Editing(stop.id());
    }

    /// Return to `Inactive`, dropping session fields
    pub fn deactivate(&mut self) {
        self.state = SessionState::Inactive;
    }

    fn seed(&mut self, stop: &Stop, can_delete: bool) {
        match stop.payload() {
            ColorPayload::Single(c) => {
                self.is_single_color = true;
                self.first_color = c;
                self.second_color = c;
            }
            ColorPayload::Dual(a, b) => {
                self.is_single_color = false;
                self.first_color = a;
                self.second_color = b;
            }
        }
        self.position = stop.position();
        self.can_delete = can_delete;
    }

    pub fn set_position(&mut self, position: f32) {
        if !(0.0..=1.0).contains(&position) {
            warn!(position, "session rejected out-of-range position");
            return;
        }
        self.position = position;
        self.emit_update();
    }

    pub fn set_first_color(&mut self, color: Color) {
        self.first_color = color;
        self.emit_update();
    }

    pub fn set_second_color(&mut self, color: Color) {
        self.second_color = color;
        self.emit_update();
    }

    /// Switch between single-color and dual-color mode
    ///
    /// Entering dual mode reuses the current first color as the second
    /// until the user picks one.
    pub fn set_single_color(&mut self, single: bool) {
        self.is_single_color = single;
        self.emit_update();
    }

    pub fn request_prev(&mut self) {
        self.push(EditorIntent::Prev);
    }

    pub fn request_next(&mut self) {
        self.push(EditorIntent::Next);
    }

    pub fn request_delete(&mut self) {
        self.push(EditorIntent::Delete);
    }

    pub fn request_close(&mut self) {
        self.push(EditorIntent::Close);
    }

    /// Drain queued intents in trigger order; each is yielded exactly once
    pub fn drain_intents(&mut self) -> impl Iterator<Item = EditorIntent> + '_ {
        self.intents.drain(..)
    }

    pub fn pending_intents(&self) -> usize {
        self.intents.len()
    }

    fn emit_update(&mut self) {
        let SessionState::Editing(id) = self.state else {
            warn!("field edit on an inactive session ignored");
            return;
        };
        let payload = if self.is_single_color {
            ColorPayload::Single(self.first_color)
        } else {
            ColorPayload::Dual(self.first_color, self.second_color)
        };
        match Stop::new(id, self.position, payload) {
            Ok(stop) => self.push(EditorIntent::UpdatedStop(stop)),
            // Setters validate positions, so this cannot be reached
            Err(e) => error!(%e, "session produced an unconstructible stop"),
        }
    }

    fn push(&mut self, intent: EditorIntent) {
        if !self.is_active() {
            warn!(?intent, "intent from an inactive session dropped");
            return;
        }
        self.intents.push_back(intent);
    }
}

impl Default for StopEditorSession {
    fn default() -> Self {
        Self::new()
    }
}
