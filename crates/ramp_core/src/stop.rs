//! Color stops and their stable identity
//!
//! A [`Stop`] is an immutable value: "updating" one means building a
//! replacement that shares the same [`StopId`] and swapping it into the
//! owning collection. Identity never changes across edits, which is what
//! lets handle mirrors and selection survive position and color changes.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::color::Color;
use crate::error::{GradientError, Result};

/// Opaque stable identifier for a stop
///
/// Issued once at creation by a [`StopIdGenerator`], never reused or
/// recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(u64);

impl StopId {
    /// Convert to raw u64 for wire storage
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Reconstruct from raw u64
    pub fn from_raw(raw: u64) -> Self {
        StopId(raw)
    }
}

/// Issues unique stop ids
#[derive(Debug)]
pub struct StopIdGenerator {
    next: u64,
}

impl StopIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> StopId {
        let id = StopId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Advance past an id already in use, e.g. one loaded from a payload
    ///
    /// Saturates at the ceiling: a payload is allowed to carry
    /// `u64::MAX` as an id.
    pub fn reserve(&mut self, id: StopId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }
}

impl Default for StopIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The color(s) carried by one stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorPayload {
    /// Smooth blend through a single color
    Single(Color),
    /// Hard transition between two colors at the stop position
    Dual(Color, Color),
}

impl ColorPayload {
    pub fn is_single(&self) -> bool {
        matches!(self, ColorPayload::Single(_))
    }

    /// The first (or only) color
    pub fn first(&self) -> Color {
        match self {
            ColorPayload::Single(c) => *c,
            ColorPayload::Dual(a, _) => *a,
        }
    }

    /// The second color, for dual stops
    pub fn second(&self) -> Option<Color> {
        match self {
            ColorPayload::Single(_) => None,
            ColorPayload::Dual(_, b) => Some(*b),
        }
    }
}

/// A position-tagged color (or color pair) within a gradient
#[derive(Clone, Copy, Debug)]
pub struct Stop {
    id: StopId,
    position: f32,
    payload: ColorPayload,
}

impl Stop {
    /// Create a stop, rejecting positions outside [0, 1]
    pub fn new(id: StopId, position: f32, payload: ColorPayload) -> Result<Self> {
        if !(0.0..=1.0).contains(&position) {
            return Err(GradientError::InvalidPosition { value: position });
        }
        Ok(Self {
            id,
            position,
            payload,
        })
    }

    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn payload(&self) -> ColorPayload {
        self.payload
    }

    /// Replacement stop at a new position, same identity
    pub fn with_position(self, position: f32) -> Result<Self> {
        Stop::new(self.id, position, self.payload)
    }

    /// Replacement stop with new colors, same identity
    pub fn with_payload(self, payload: ColorPayload) -> Self {
        Self { payload, ..self }
    }

    /// Total order by position ascending, ties broken by id
    ///
    /// The id tie-break keeps coincident stops stably ordered within one
    /// collection snapshot.
    pub fn position_order(&self, other: &Stop) -> Ordering {
        self.position
            .total_cmp(&other.position)
            .then_with(|| self.id.cmp(&other.id))
    }
}

// Equality and hashing are by id only: two stops with the same id are the
// same stop even when position or colors differ. This is what find-and-
// replace-by-id relies on.
impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
