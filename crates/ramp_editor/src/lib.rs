//! Ramp Editor
//!
//! Interactive editing state machine for gradient schemes:
//!
//! - **Controller**: owns the stop working set, applies session intents,
//!   implements add/delete/duplicate and selection navigation
//! - **Session**: per-stop editing state emitting intents back to the
//!   controller
//! - **Handles**: transient UI mirrors of stop position and colors
//! - **Viewport**: clamped zoom/pan transform from gestures to positions
//!
//! Single-threaded, single-writer: all operations are synchronous and the
//! controller exclusively owns the working set. Rendering and gesture
//! recognition live outside this crate; they consume snapshots and feed
//! normalized input back in.
//!
//! # Example
//!
//! ```rust
//! use ramp_core::{Color, ColorPayload, Gradient, GradientScheme, Stop, StopIdGenerator};
//! use ramp_editor::{EditOutcome, GradientEditor};
//!
//! let mut ids = StopIdGenerator::new();
//! let first = Stop::new(ids.next(), 0.0, ColorPayload::Single(Color::BLACK)).unwrap();
//! let last = Stop::new(ids.next(), 1.0, ColorPayload::Single(Color::WHITE)).unwrap();
//! let scheme = GradientScheme::new("Mono", "", Gradient::new(vec![first, last]));
//!
//! let mut editor = GradientEditor::new(scheme);
//! editor.select_stop(first.id());
//! editor.session_mut().set_position(0.1);
//! editor.apply_intents();
//!
//! match editor.finish(true) {
//!     EditOutcome::Saved(scheme) => assert_eq!(scheme.gradient.stops()[0].position(), 0.1),
//!     EditOutcome::Cancelled => unreachable!(),
//! }
//! ```

pub mod controller;
pub mod handle;
pub mod session;
pub mod viewport;

pub use controller::{
    EditOutcome, EditorChange, GradientEditor, SubscriptionHandle,
};
pub use handle::HandleState;
pub use session::{EditorIntent, SessionState, StopEditorSession};
pub use viewport::{Viewport, MAX_SCALE, MIN_SCALE};
