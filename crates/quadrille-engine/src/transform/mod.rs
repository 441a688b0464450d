//! Affine transform parameters for the quad.
//!
//! [`TransformState`] is the mutable accumulator the scheduler owns;
//! [`Transform2d`] is the per-tick snapshot the renderer consumes;
//! [`TransformDelta`] is the per-tick increment a binding contributes.

mod delta;
mod state;

pub use delta::TransformDelta;
pub use state::{Transform2d, TransformState};
