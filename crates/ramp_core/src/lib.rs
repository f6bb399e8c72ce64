//! Ramp Core
//!
//! Data model for interactive gradient editing:
//!
//! - **Color**: RGBA values with hex wire encoding
//! - **Stops**: position-tagged colors with stable identity
//! - **Gradients**: ordered stop collections and named schemes
//! - **Wire format**: lossless JSON round-trip
//!
//! # Example
//!
//! ```rust
//! use ramp_core::{Color, ColorPayload, Gradient, Stop, StopIdGenerator};
//!
//! let mut ids = StopIdGenerator::new();
//! let gradient = Gradient::new(vec![
//!     Stop::new(ids.next(), 0.0, ColorPayload::Single(Color::BLACK)).unwrap(),
//!     Stop::new(ids.next(), 1.0, ColorPayload::Single(Color::WHITE)).unwrap(),
//! ]);
//!
//! let bytes = gradient.encode();
//! assert_eq!(Gradient::decode(&bytes).unwrap(), gradient);
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod stop;
mod wire;

pub use color::Color;
pub use error::{GradientError, Result};
pub use gradient::{Gradient, GradientScheme};
pub use stop::{ColorPayload, Stop, StopId, StopIdGenerator};
