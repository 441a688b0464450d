//! Rendering: one textured quad per frame.
//!
//! [`RenderCtx`] carries the device/queue/format/viewport a renderer needs;
//! [`RenderTarget`] carries the encoder and color view for the frame;
//! [`QuadRenderer`] owns the pipeline and draws the quad from a
//! [`Transform2d`](crate::transform::Transform2d) snapshot.

mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::QuadRenderer;
