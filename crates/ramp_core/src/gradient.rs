//! Gradient collections and named schemes

use crate::error::Result;
use crate::stop::{Stop, StopId};
use crate::wire;

/// An ordered collection of color stops forming one gradient
///
/// The model itself does not enforce a minimum stop count; a payload
/// produced by another tool may legitimately hold a single stop. The
/// interactive editor is what refuses to drop below two.
#[derive(Clone, Debug, Default)]
pub struct Gradient {
    stops: Vec<Stop>,
}

impl Gradient {
    pub fn new(stops: Vec<Stop>) -> Self {
        debug_assert!(
            has_unique_ids(&stops),
            "gradient constructed with duplicate stop ids"
        );
        Self { stops }
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn find(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id() == id)
    }

    /// Freshly sorted copy of the stops, position ascending with stable
    /// id tie-break
    pub fn sorted(&self) -> Vec<Stop> {
        let mut stops = self.stops.clone();
        stops.sort_by(Stop::position_order);
        stops
    }

    /// Serialize to the JSON wire format
    ///
    /// Never fails for a well-formed in-memory value.
    pub fn encode(&self) -> Vec<u8> {
        wire::encode_gradient(self)
    }

    /// Deserialize from the JSON wire format
    pub fn decode(bytes: &[u8]) -> Result<Gradient> {
        wire::decode_gradient(bytes)
    }
}

// Wire round-trip equality: same stops with same id, position, and colors,
// in the same order. Deliberately stricter than `Stop`'s id-only equality.
impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.stops.len() == other.stops.len()
            && self
                .stops
                .iter()
                .zip(&other.stops)
                .all(|(a, b)| {
                    a.id() == b.id()
                        && a.position() == b.position()
                        && a.payload() == b.payload()
                })
    }
}

fn has_unique_ids(stops: &[Stop]) -> bool {
    let mut seen: Vec<StopId> = Vec::with_capacity(stops.len());
    for stop in stops {
        if seen.contains(&stop.id()) {
            return false;
        }
        seen.push(stop.id());
    }
    true
}

/// A gradient plus display metadata
///
/// Immutable once constructed; the editor produces replacement values
/// rather than mutating a scheme in place.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientScheme {
    pub name: String,
    pub description: String,
    pub gradient: Gradient,
}

impl GradientScheme {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        gradient: Gradient,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            gradient,
        }
    }

    /// Serialize to the JSON wire format, including metadata
    pub fn encode(&self) -> Vec<u8> {
        wire::encode_scheme(self)
    }

    /// Deserialize from the JSON wire format
    pub fn decode(bytes: &[u8]) -> Result<GradientScheme> {
        wire::decode_scheme(bytes)
    }
}
