//! JSON wire format for gradients
//!
//! Serial mirror structs are kept separate from the domain types so the
//! in-memory model never carries serde shape decisions. A stop is encoded
//! as
//!
//! ```json
//! { "id": "17", "position": 0.25, "type": "single", "colors": ["#ff8800"] }
//! ```
//!
//! where `"single"` carries exactly one color and `"dual"` exactly two.
//! Decoding is all-or-nothing: any structural problem yields
//! [`GradientError::MalformedPayload`] and no partial gradient.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GradientError, Result};
use crate::gradient::{Gradient, GradientScheme};
use crate::stop::{ColorPayload, Stop, StopId};

#[derive(Serialize, Deserialize)]
struct WireGradient {
    stops: Vec<WireStop>,
}

#[derive(Serialize, Deserialize)]
struct WireScheme {
    name: String,
    description: String,
    stops: Vec<WireStop>,
}

#[derive(Serialize, Deserialize)]
struct WireStop {
    id: String,
    position: f32,
    #[serde(rename = "type")]
    kind: WireStopKind,
    colors: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum WireStopKind {
    Single,
    Dual,
}

impl WireStop {
    fn from_stop(stop: &Stop) -> Self {
        let (kind, colors) = match stop.payload() {
            ColorPayload::Single(c) => (WireStopKind::Single, vec![c.to_hex_string()]),
            ColorPayload::Dual(a, b) => (
                WireStopKind::Dual,
                vec![a.to_hex_string(), b.to_hex_string()],
            ),
        };
        Self {
            id: stop.id().to_raw().to_string(),
            position: stop.position(),
            kind,
            colors,
        }
    }

    fn into_stop(self) -> Result<Stop> {
        let raw = self
            .id
            .parse::<u64>()
            .map_err(|_| GradientError::malformed(format!("unusable stop id {:?}", self.id)))?;

        let colors = self
            .colors
            .iter()
            .map(|s| Color::parse_hex(s))
            .collect::<Result<Vec<_>>>()?;

        let payload = match (self.kind, colors.as_slice()) {
            (WireStopKind::Single, [c]) => ColorPayload::Single(*c),
            (WireStopKind::Dual, [a, b]) => ColorPayload::Dual(*a, *b),
            (kind, _) => {
                return Err(GradientError::malformed(format!(
                    "{kind:?} stop carries {} colors",
                    colors.len()
                )))
            }
        };

        Stop::new(StopId::from_raw(raw), self.position, payload).map_err(|_| {
            GradientError::malformed(format!("position {} is outside [0, 1]", self.position))
        })
    }
}

fn stops_to_wire(stops: &[Stop]) -> Vec<WireStop> {
    stops.iter().map(WireStop::from_stop).collect()
}

fn stops_from_wire(wire: Vec<WireStop>) -> Result<Vec<Stop>> {
    let stops = wire
        .into_iter()
        .map(WireStop::into_stop)
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::with_capacity(stops.len());
    for stop in &stops {
        if !seen.insert(stop.id()) {
            return Err(GradientError::malformed(format!(
                "duplicate stop id {}",
                stop.id().to_raw()
            )));
        }
    }
    Ok(stops)
}

pub(crate) fn encode_gradient(gradient: &Gradient) -> Vec<u8> {
    let wire = WireGradient {
        stops: stops_to_wire(gradient.stops()),
    };
    // Plain data with string keys; serde_json cannot fail on it
    serde_json::to_vec(&wire).expect("gradient wire serialization is infallible")
}

pub(crate) fn decode_gradient(bytes: &[u8]) -> Result<Gradient> {
    let wire: WireGradient = serde_json::from_slice(bytes)
        .map_err(|e| GradientError::malformed(e.to_string()))?;
    Ok(Gradient::new(stops_from_wire(wire.stops)?))
}

pub(crate) fn encode_scheme(scheme: &GradientScheme) -> Vec<u8> {
    let wire = WireScheme {
        name: scheme.name.clone(),
        description: scheme.description.clone(),
        stops: stops_to_wire(scheme.gradient.stops()),
    };
    serde_json::to_vec(&wire).expect("scheme wire serialization is infallible")
}

pub(crate) fn decode_scheme(bytes: &[u8]) -> Result<GradientScheme> {
    let wire: WireScheme = serde_json::from_slice(bytes)
        .map_err(|e| GradientError::malformed(e.to_string()))?;
    Ok(GradientScheme {
        name: wire.name,
        description: wire.description,
        gradient: Gradient::new(stops_from_wire(wire.stops)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stop::StopIdGenerator;

    fn sample_gradient() -> Gradient {
        let mut ids = StopIdGenerator::new();
        Gradient::new(vec![
            Stop::new(ids.next(), 0.0, ColorPayload::Single(Color::RED)).unwrap(),
            Stop::new(
                ids.next(),
                0.5,
                ColorPayload::Dual(Color::GREEN, Color::BLUE),
            )
            .unwrap(),
            Stop::new(ids.next(), 1.0, ColorPayload::Single(Color::WHITE)).unwrap(),
        ])
    }

    #[test]
    fn test_round_trip() {
        let gradient = sample_gradient();
        let decoded = Gradient::decode(&gradient.encode()).unwrap();
        assert_eq!(decoded, gradient);
    }

    #[test]
    fn test_single_stop_round_trip() {
        let mut ids = StopIdGenerator::new();
        let gradient = Gradient::new(vec![
            Stop::new(ids.next(), 0.3, ColorPayload::Single(Color::CYAN)).unwrap()
        ]);
        let decoded = Gradient::decode(&gradient.encode()).unwrap();
        assert_eq!(decoded, gradient);
    }

    #[test]
    fn test_scheme_round_trip() {
        let scheme = GradientScheme::new("Sunset", "Warm evening tones", sample_gradient());
        let decoded = GradientScheme::decode(&scheme.encode()).unwrap();
        assert_eq!(decoded, scheme);
    }

    #[test]
    fn test_wrong_color_arity_rejected() {
        let single_with_two = br##"{"stops":[
            {"id":"1","position":0.5,"type":"single","colors":["#ff0000","#00ff00"]}
        ]}"##;
        assert!(matches!(
            Gradient::decode(single_with_two),
            Err(GradientError::MalformedPayload { .. })
        ));

        let dual_with_one = br##"{"stops":[
            {"id":"1","position":0.5,"type":"dual","colors":["#ff0000"]}
        ]}"##;
        assert!(matches!(
            Gradient::decode(dual_with_one),
            Err(GradientError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_structural_problems_rejected() {
        let cases: [&[u8]; 5] = [
            br##"{"stops":[{"position":0.5,"type":"single","colors":["#ff0000"]}]}"##,
            br##"{"stops":[{"id":"x","position":0.5,"type":"single","colors":["#ff0000"]}]}"##,
            br##"{"stops":[{"id":"1","position":1.5,"type":"single","colors":["#ff0000"]}]}"##,
            br##"{"stops":[{"id":"1","position":0.5,"type":"conic","colors":["#ff0000"]}]}"##,
            br##"not json"##,
        ];
        for bytes in cases {
            assert!(matches!(
                Gradient::decode(bytes),
                Err(GradientError::MalformedPayload { .. })
            ));
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let payload = br##"{"stops":[
            {"id":"1","position":0.0,"type":"single","colors":["#ff0000"]},
            {"id":"1","position":1.0,"type":"single","colors":["#00ff00"]}
        ]}"##;
        assert!(matches!(
            Gradient::decode(payload),
            Err(GradientError::MalformedPayload { .. })
        ));
    }
}
