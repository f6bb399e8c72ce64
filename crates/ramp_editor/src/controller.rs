//! Gradient editor controller
//!
//! Owns the working set of stops and their handle mirrors for one
//! in-progress edit, applies session intents, and implements add, delete,
//! duplicate, selection navigation, and the zoom/pan transform. All state
//! lives on one logical thread; every operation is synchronous and the
//! controller is the only writer.
//!
//! Missing ids and self-decode failures are internal consistency faults:
//! loud in debug builds, logged no-ops in release. Normal interaction can
//! never reach them because the UI affordances (e.g. `can_delete`) are
//! derived from the same state.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use ramp_core::{
    Color, ColorPayload, Gradient, GradientScheme, Stop, StopId, StopIdGenerator,
};

use crate::handle::HandleState;
use crate::session::{EditorIntent, StopEditorSession};
use crate::viewport::Viewport;

/// Internal consistency fault: unrecoverable in debug, logged no-op in
/// release. Never silently corrupts state.
macro_rules! consistency_fault {
    ($($arg:tt)*) => {{
        tracing::error!($($arg)*);
        debug_assert!(false, "internal consistency fault");
    }};
}

/// Fixed palette new stops draw from
const ADD_PALETTE: [Color; 6] = [
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::GREEN,
    Color::CYAN,
    Color::PURPLE,
];

/// Position newly added stops land on
const ADD_POSITION: f32 = 0.5;

/// Editing refuses to reduce a gradient below this many stops
const MIN_STOPS: usize = 2;

/// What part of the editor state a change notification refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorChange {
    /// The stop working set (and handles) changed
    Stops,
    /// The selected stop changed
    Selection,
    /// Editing mode was entered or left
    Editing,
    /// Zoom or pan changed
    Viewport,
}

/// Terminal outcome of one editing session; delivered exactly once
#[derive(Clone, Debug)]
pub enum EditOutcome {
    Saved(GradientScheme),
    Cancelled,
}

/// Handle for unsubscribing from editor change notifications
#[derive(Debug)]
pub struct SubscriptionHandle(u64);

type ChangeCallback = Box<dyn Fn(EditorChange)>;

/// Interactive editor for one gradient scheme
pub struct GradientEditor {
    name: String,
    description: String,
    stops: FxHashMap<StopId, Stop>,
    handles: Vec<HandleState>,
    ids: StopIdGenerator,
    selected: Option<StopId>,
    editing: bool,
    last_edit_position: f32,
    viewport: Viewport,
    session: StopEditorSession,
    subscribers: Vec<(u64, ChangeCallback)>,
    next_subscriber: u64,
}

impl GradientEditor {
    /// Open an editing session over a scheme's stops
    pub fn new(scheme: GradientScheme) -> Self {
        let mut ids = StopIdGenerator::new();
        let mut stops = FxHashMap::default();
        let mut handles = Vec::new();
        for stop in scheme.gradient.sorted() {
            ids.reserve(stop.id());
            handles.push(HandleState::for_stop(&stop));
            stops.insert(stop.id(), stop);
        }
        Self {
            name: scheme.name,
            description: scheme.description,
            stops,
            handles,
            ids,
            selected: None,
            editing: false,
            last_edit_position: 0.0,
            viewport: Viewport::new(),
            session: StopEditorSession::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────

    /// Freshly sorted stop sequence, position ascending with stable ties
    ///
    /// Always recomputed, never cached: neighbor navigation right after a
    /// drag must see the new order.
    pub fn sorted_stops(&self) -> SmallVec<[Stop; 8]> {
        let mut stops: SmallVec<[Stop; 8]> = self.stops.values().copied().collect();
        stops.sort_by(Stop::position_order);
        stops
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(&id)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn handles(&self) -> &[HandleState] {
        &self.handles
    }

    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Position of the most recently committed edit
    pub fn last_edit_position(&self) -> f32 {
        self.last_edit_position
    }

    pub fn session(&self) -> &StopEditorSession {
        &self.session
    }

    /// Session access for the editing UI; route the results back through
    /// [`apply_intents`](Self::apply_intents)
    ///
    /// Queued edits for a stop that is deleted before the next drain are
    /// dropped when applied.
    pub fn session_mut(&mut self) -> &mut StopEditorSession {
        &mut self.session
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current stops as a gradient value, in sorted order
    pub fn gradient(&self) -> Gradient {
        Gradient::new(self.sorted_stops().into_vec())
    }

    fn can_delete(&self) -> bool {
        self.stops.len() > MIN_STOPS
    }

    // ─────────────────────────────────────────────────────────────────────
    // Change subscriptions
    // ─────────────────────────────────────────────────────────────────────

    /// Subscribe to change notifications, delivered synchronously on the
    /// calling thread in registration order
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionHandle
    where
        F: Fn(EditorChange) + 'static,
    {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        SubscriptionHandle(id)
    }

    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.subscribers.retain(|(id, _)| *id != handle.0);
    }

    fn notify(&self, change: EditorChange) {
        for (_, callback) in &self.subscribers {
            callback(change);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection and editing mode
    // ─────────────────────────────────────────────────────────────────────

    /// Select a stop and open (or re-target) the editing session on it
    pub fn select_stop(&mut self, id: StopId) {
        let Some(stop) = self.stops.get(&id).copied() else {
            consistency_fault!(?id, "select_stop on an id absent from the working set");
            return;
        };
        let can_delete = self.can_delete();
        if self.session.is_active() {
            self.session.change(&stop, can_delete);
        } else {
            self.session.activate(&stop, can_delete);
        }
        let was_editing = self.editing;
        self.selected = Some(id);
        self.editing = true;
        self.last_edit_position = stop.position();
        debug!(?id, "stop selected");
        self.notify(EditorChange::Selection);
        if !was_editing {
            self.notify(EditorChange::Editing);
        }
    }

    fn move_selection(&mut self, offset: isize) {
        let Some(selected) = self.selected else {
            warn!("selection move with nothing selected");
            return;
        };
        let order = self.sorted_stops();
        let Some(index) = order.iter().position(|s| s.id() == selected) else {
            consistency_fault!(?selected, "selected stop missing from the sorted sequence");
            return;
        };
        let len = order.len() as isize;
        let target = order[(index as isize + offset).rem_euclid(len) as usize];

        self.selected = Some(target.id());
        self.last_edit_position = target.position();
        let can_delete = self.can_delete();
        self.session.change(&target, can_delete);
        debug!(from = ?selected, to = ?target.id(), "selection moved");
        self.notify(EditorChange::Selection);
    }

    fn close_session(&mut self) {
        self.session.deactivate();
        self.selected = None;
        self.editing = false;
        self.notify(EditorChange::Selection);
        self.notify(EditorChange::Editing);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Stop mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Move a stop to a new position, clamped into [0, 1]
    ///
    /// Selection and editing mode are untouched; only the stop value, its
    /// handle, and the last-edit-position reference change.
    pub fn drag_stop(&mut self, id: StopId, new_position: f32) {
        let Some(stop) = self.stops.get(&id).copied() else {
            consistency_fault!(?id, "drag_stop on an id absent from the working set");
            return;
        };
        let clamped = new_position.clamp(0.0, 1.0);
        match stop.with_position(clamped) {
            Ok(moved) => self.replace_stop(moved),
            Err(e) => consistency_fault!(%e, "clamped drag position failed validation"),
        }
    }

    /// Add a stop at the center with a random palette color
    ///
    /// The new stop is not auto-selected.
    pub fn add_stop(&mut self) -> StopId {
        use rand::Rng;
        let color = ADD_PALETTE[rand::rng().random_range(0..ADD_PALETTE.len())];
        self.insert_stop(ADD_POSITION, ColorPayload::Single(color))
    }

    /// Duplicate the selected stop with a fresh id
    ///
    /// The copy lands at the midpoint between the selected stop and its
    /// next-higher neighbor; the highest stop wraps toward the end of the
    /// extent, landing halfway between its position and 1.0. Selection
    /// stays on the original.
    pub fn duplicate_selected(&mut self) -> Option<StopId> {
        let selected = self.selected?;
        let order = self.sorted_stops();
        let index = order.iter().position(|s| s.id() == selected)?;
        let stop = order[index];

        let next_position = if index + 1 < order.len() {
            order[index + 1].position()
        } else {
            1.0
        };
        let position = (stop.position() + next_position) / 2.0;

        let id = self.insert_stop(position, stop.payload());
        debug!(from = ?selected, ?id, position, "stop duplicated");
        Some(id)
    }

    /// Remove the selected stop, advancing selection to its cyclic
    /// successor first
    ///
    /// This is the single enforcement point of the two-stop minimum: the
    /// session's `can_delete` flag is the same predicate surfaced to the
    /// UI, not a second guard.
    pub fn delete_selected(&mut self) -> bool {
        let Some(selected) = self.selected else {
            warn!("delete with nothing selected");
            return false;
        };
        if self.stops.len() <= MIN_STOPS {
            warn!(stops = self.stops.len(), "delete refused at minimum stop count");
            return false;
        }
        let order = self.sorted_stops();
        let Some(index) = order.iter().position(|s| s.id() == selected) else {
            consistency_fault!(?selected, "selected stop missing from the sorted sequence");
            return false;
        };

        // Advance selection off the doomed stop before removing it, using
        // the pre-deletion order
        let successor = order[(index + 1) % order.len()];
        self.selected = Some(successor.id());
        self.last_edit_position = successor.position();

        self.stops.remove(&selected);
        self.handles.retain(|h| h.id != selected);

        let can_delete = self.can_delete();
        if self.session.is_active() {
            self.session.change(&successor, can_delete);
        }
        debug!(deleted = ?selected, now_selected = ?successor.id(), "stop deleted");
        self.notify(EditorChange::Stops);
        self.notify(EditorChange::Selection);
        true
    }

    fn insert_stop(&mut self, position: f32, payload: ColorPayload) -> StopId {
        let id = self.ids.next();
        match Stop::new(id, position, payload) {
            Ok(stop) => {
                self.handles.push(HandleState::for_stop(&stop));
                self.stops.insert(id, stop);
                debug!(?id, position, "stop added");
                self.notify(EditorChange::Stops);
            }
            Err(e) => consistency_fault!(%e, "insert position out of range"),
        }
        id
    }

    /// Replace-by-id plus handle sync plus last-edit-position update
    fn replace_stop(&mut self, stop: Stop) {
        let id = stop.id();
        if self.stops.insert(id, stop).is_none() {
            consistency_fault!(?id, "replacement for an id absent from the working set");
            self.stops.remove(&id);
            return;
        }
        match self.handles.iter_mut().find(|h| h.id == id) {
            Some(handle) => handle.sync(&stop),
            None => consistency_fault!(?id, "stop has no handle mirror"),
        }
        self.last_edit_position = stop.position();
        self.notify(EditorChange::Stops);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Intent routing
    // ─────────────────────────────────────────────────────────────────────

    /// Drain the session's queued intents and apply them in order
    pub fn apply_intents(&mut self) {
        let intents: Vec<EditorIntent> = self.session.drain_intents().collect();
        for intent in intents {
            self.apply_intent(intent);
        }
    }

    pub fn apply_intent(&mut self, intent: EditorIntent) {
        match intent {
            EditorIntent::UpdatedStop(stop) => {
                // The stop can be removed between the session edit and the
                // drain; the stale update is dropped.
                if !self.stops.contains_key(&stop.id()) {
                    warn!(id = ?stop.id(), "update intent for a removed stop dropped");
                    return;
                }
                self.replace_stop(stop);
            }
            EditorIntent::Prev => self.move_selection(-1),
            EditorIntent::Next => self.move_selection(1),
            EditorIntent::Delete => {
                self.delete_selected();
            }
            EditorIntent::Close => self.close_session(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────────────────

    pub fn zoom_by(&mut self, factor: f32) {
        self.viewport.zoom_by(factor);
        self.notify(EditorChange::Viewport);
    }

    pub fn pan_by(&mut self, delta: f32) {
        self.viewport.pan_by(delta);
        self.notify(EditorChange::Viewport);
    }

    pub fn set_viewport_scale(&mut self, scale: f32) {
        self.viewport.set_scale(scale);
        self.notify(EditorChange::Viewport);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Export and completion
    // ─────────────────────────────────────────────────────────────────────

    /// Encode the current sorted stop sequence
    ///
    /// The bytes are round-tripped through decode as a self-check; a
    /// failure there means the controller let a broken invariant through
    /// and is reported as an internal fault, never as a user error.
    pub fn export_gradient(&self) -> Vec<u8> {
        let bytes = self.gradient().encode();
        if let Err(e) = Gradient::decode(&bytes) {
            consistency_fault!(%e, "self-encoded gradient failed self-decode");
        }
        bytes
    }

    /// Consume the editor, yielding exactly one terminal outcome
    pub fn finish(self, save: bool) -> EditOutcome {
        if save {
            let gradient = Gradient::new(self.sorted_stops().into_vec());
            EditOutcome::Saved(GradientScheme {
                name: self.name,
                description: self.description,
                gradient,
            })
        } else {
            EditOutcome::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stops at [0.0, 0.5, 1.0]; returns (editor, [a, b, c] ids)
    fn three_stop_editor() -> (GradientEditor, [StopId; 3]) {
        let mut ids = StopIdGenerator::new();
        let a = Stop::new(ids.next(), 0.0, ColorPayload::Single(Color::RED)).unwrap();
        let b = Stop::new(ids.next(), 0.5, ColorPayload::Single(Color::GREEN)).unwrap();
        let c = Stop::new(ids.next(), 1.0, ColorPayload::Single(Color::BLUE)).unwrap();
        let scheme = GradientScheme::new("Test", "", Gradient::new(vec![a, b, c]));
        (GradientEditor::new(scheme), [a.id(), b.id(), c.id()])
    }

    fn two_stop_editor() -> (GradientEditor, [StopId; 2]) {
        let mut ids = StopIdGenerator::new();
        let a = Stop::new(ids.next(), 0.0, ColorPayload::Single(Color::BLACK)).unwrap();
        let b = Stop::new(ids.next(), 1.0, ColorPayload::Single(Color::WHITE)).unwrap();
        let scheme = GradientScheme::new("Test", "", Gradient::new(vec![a, b]));
        (GradientEditor::new(scheme), [a.id(), b.id()])
    }

    #[test]
    fn test_select_opens_session() {
        let (mut editor, [_, b, _]) = three_stop_editor();
        editor.select_stop(b);

        assert_eq!(editor.selected(), Some(b));
        assert!(editor.is_editing());
        assert_eq!(editor.last_edit_position(), 0.5);
        assert_eq!(editor.session().stop_id(), Some(b));
        assert!(editor.session().can_delete());
    }

    #[test]
    fn test_next_wraps_cyclically() {
        let (mut editor, [a, b, c]) = three_stop_editor();
        editor.select_stop(b);

        editor.session_mut().request_next();
        editor.apply_intents();
        assert_eq!(editor.selected(), Some(c));

        editor.session_mut().request_next();
        editor.apply_intents();
        assert_eq!(editor.selected(), Some(a));
    }

    #[test]
    fn test_next_then_prev_returns() {
        let (mut editor, [a, b, c]) = three_stop_editor();
        for id in [a, b, c] {
            editor.select_stop(id);
            editor.session_mut().request_next();
            editor.session_mut().request_prev();
            editor.apply_intents();
            assert_eq!(editor.selected(), Some(id));
        }

        let (mut editor, [a, b]) = two_stop_editor();
        for id in [a, b] {
            editor.select_stop(id);
            editor.session_mut().request_next();
            editor.session_mut().request_prev();
            editor.apply_intents();
            assert_eq!(editor.selected(), Some(id));
        }
    }

    #[test]
    fn test_drag_reorders_navigation() {
        let (mut editor, [a, b, c]) = three_stop_editor();

        editor.drag_stop(b, 0.9);
        assert_eq!(editor.stop(b).unwrap().position(), 0.9);

        // B@0.9 still sorts before C@1.0
        editor.select_stop(a);
        editor.session_mut().request_next();
        editor.apply_intents();
        assert_eq!(editor.selected(), Some(b));

        // Dragging B onto C resolves the tie by creation order: B first
        editor.drag_stop(b, 1.0);
        let order = editor.sorted_stops();
        assert_eq!(order[1].id(), b);
        assert_eq!(order[2].id(), c);
    }

    #[test]
    fn test_drag_clamps_and_keeps_selection() {
        let (mut editor, [a, b, _]) = three_stop_editor();
        editor.select_stop(a);

        editor.drag_stop(b, 1.7);
        assert_eq!(editor.stop(b).unwrap().position(), 1.0);
        assert_eq!(editor.selected(), Some(a));
        assert!(editor.is_editing());
        assert_eq!(editor.last_edit_position(), 1.0);

        let handle = editor.handles().iter().find(|h| h.id == b).unwrap();
        assert_eq!(handle.position, 1.0);
    }

    #[test]
    fn test_delete_advances_then_removes() {
        let (mut editor, [_, b, c]) = three_stop_editor();
        editor.select_stop(b);

        assert!(editor.delete_selected());
        assert_eq!(editor.stop_count(), 2);
        assert!(editor.stop(b).is_none());
        assert_eq!(editor.selected(), Some(c));
        assert!(editor.handles().iter().all(|h| h.id != b));
        // Remaining session now reports the floor
        assert!(!editor.session().can_delete());
    }

    #[test]
    fn test_delete_of_highest_wraps_selection() {
        let (mut editor, [a, _, c]) = three_stop_editor();
        editor.select_stop(c);

        assert!(editor.delete_selected());
        assert_eq!(editor.selected(), Some(a));
    }

    #[test]
    fn test_delete_refused_at_two_stops() {
        let (mut editor, [a, b]) = two_stop_editor();
        editor.select_stop(a);

        assert!(!editor.delete_selected());
        assert_eq!(editor.stop_count(), 2);
        assert_eq!(editor.selected(), Some(a));
        assert!(editor.stop(b).is_some());
    }

    #[test]
    fn test_add_stop_centered_unselected() {
        let (mut editor, [a, _, _]) = three_stop_editor();
        editor.select_stop(a);

        let id = editor.add_stop();
        assert_eq!(editor.stop_count(), 4);

        let added = editor.stop(id).unwrap();
        assert_eq!(added.position(), 0.5);
        assert!(ADD_PALETTE.contains(&added.payload().first()));
        assert!(added.payload().is_single());

        // Not auto-selected
        assert_eq!(editor.selected(), Some(a));
        assert!(editor.handles().iter().any(|h| h.id == id));
    }

    #[test]
    fn test_duplicate_lands_at_midpoint() {
        let (mut editor, [_, b, _]) = three_stop_editor();
        editor.select_stop(b);

        let id = editor.duplicate_selected().unwrap();
        let copy = editor.stop(id).unwrap();
        assert_ne!(id, b);
        assert_eq!(copy.position(), 0.75);
        assert_eq!(copy.payload(), ColorPayload::Single(Color::GREEN));
        assert_eq!(editor.selected(), Some(b));
    }

    #[test]
    fn test_duplicate_of_highest_wraps_toward_end() {
        let (mut editor, [_, b]) = two_stop_editor();
        // b sits at 1.0; the copy lands halfway between 1.0 and the end
        editor.select_stop(b);
        let id = editor.duplicate_selected().unwrap();
        assert_eq!(editor.stop(id).unwrap().position(), 1.0);
    }

    #[test]
    fn test_session_edit_flows_into_working_set() {
        let (mut editor, [_, b, _]) = three_stop_editor();
        editor.select_stop(b);

        editor.session_mut().set_position(0.25);
        editor.session_mut().set_first_color(Color::MAGENTA);
        editor.apply_intents();

        let stop = editor.stop(b).unwrap();
        assert_eq!(stop.position(), 0.25);
        assert_eq!(stop.payload(), ColorPayload::Single(Color::MAGENTA));
        assert_eq!(editor.last_edit_position(), 0.25);
    }

    #[test]
    fn test_close_clears_selection_and_mode() {
        let (mut editor, [_, b, _]) = three_stop_editor();
        editor.select_stop(b);

        editor.session_mut().request_close();
        editor.apply_intents();

        assert_eq!(editor.selected(), None);
        assert!(!editor.is_editing());
        assert!(!editor.session().is_active());
    }

    #[test]
    fn test_delete_intent_routes_to_delete() {
        let (mut editor, [_, b, c]) = three_stop_editor();
        editor.select_stop(b);

        editor.session_mut().request_delete();
        editor.apply_intents();

        assert_eq!(editor.stop_count(), 2);
        assert_eq!(editor.selected(), Some(c));
    }

    #[test]
    fn test_subscribers_notified_until_unsubscribed() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (mut editor, [a, _, _]) = three_stop_editor();
        let seen: Rc<RefCell<Vec<EditorChange>>> = Rc::default();
        let sink = seen.clone();
        let handle = editor.subscribe(move |change| sink.borrow_mut().push(change));

        editor.drag_stop(a, 0.1);
        assert_eq!(seen.borrow().as_slice(), &[EditorChange::Stops]);

        editor.unsubscribe(handle);
        editor.drag_stop(a, 0.2);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_export_round_trips() {
        let (editor, _) = three_stop_editor();
        let bytes = editor.export_gradient();
        let decoded = Gradient::decode(&bytes).unwrap();
        assert_eq!(decoded, editor.gradient());
    }

    #[test]
    fn test_finish_saved_and_cancelled() {
        let (mut editor, [a, _, _]) = three_stop_editor();
        editor.drag_stop(a, 0.7);
        match editor.finish(true) {
            EditOutcome::Saved(scheme) => {
                assert_eq!(scheme.name, "Test");
                let sorted = scheme.gradient.sorted();
                assert_eq!(scheme.gradient.stops(), sorted.as_slice());
            }
            EditOutcome::Cancelled => panic!("expected Saved"),
        }

        let (editor, _) = three_stop_editor();
        assert!(matches!(editor.finish(false), EditOutcome::Cancelled));
    }

    #[test]
    fn test_viewport_changes_notify() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (mut editor, _) = three_stop_editor();
        let seen: Rc<RefCell<Vec<EditorChange>>> = Rc::default();
        let sink = seen.clone();
        editor.subscribe(move |change| sink.borrow_mut().push(change));

        editor.zoom_by(6.0);
        assert_eq!(editor.viewport().scale(), 4.0);
        editor.pan_by(2.0);
        assert_eq!(editor.viewport().pan(), 0.75);
        assert_eq!(
            seen.borrow().as_slice(),
            &[EditorChange::Viewport, EditorChange::Viewport]
        );
    }

    #[test]
    fn test_imported_ids_never_reissued() {
        let (mut editor, [a, b, c]) = three_stop_editor();
        let id = editor.add_stop();
        assert!(![a, b, c].contains(&id));
    }

    #[test]
    fn test_import_with_ceiling_id() {
        // The wire format places no upper bound on ids; seeding the
        // generator past u64::MAX must not overflow
        let payload = br##"{"stops":[
            {"id":"1","position":0.0,"type":"single","colors":["#000000"]},
            {"id":"18446744073709551615","position":1.0,"type":"single","colors":["#ffffff"]}
        ]}"##;
        let gradient = Gradient::decode(payload).unwrap();
        let editor = GradientEditor::new(GradientScheme::new("Import", "", gradient));
        assert_eq!(editor.stop_count(), 2);
    }

    #[test]
    fn test_stale_update_after_delete_is_dropped() {
        let (mut editor, [_, b, c]) = three_stop_editor();
        editor.select_stop(b);
        editor.session_mut().set_position(0.4);

        // The queued edit outlives its stop; applying it is a no-op
        assert!(editor.delete_selected());
        editor.apply_intents();

        assert_eq!(editor.stop_count(), 2);
        assert!(editor.stop(b).is_none());
        assert_eq!(editor.selected(), Some(c));
    }
}
