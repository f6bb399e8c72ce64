//! UI-facing stop mirrors used for drag rendering
//!
//! A handle is never the source of truth: it is created with its stop,
//! refreshed on every replacement, and destroyed with it. The full set is
//! always re-derivable from the working set.

use ramp_core::{ColorPayload, Stop, StopId};

/// Transient mirror of one stop's position and colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleState {
    pub id: StopId,
    pub position: f32,
    pub payload: ColorPayload,
}

impl HandleState {
    pub fn for_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id(),
            position: stop.position(),
            payload: stop.payload(),
        }
    }

    /// Refresh from a replacement value of the same stop
    pub fn sync(&mut self, stop: &Stop) {
        debug_assert_eq!(self.id, stop.id(), "handle synced against a foreign stop");
        self.position = stop.position();
        self.payload = stop.payload();
    }
}
