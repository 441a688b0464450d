//! Coordinate types shared by the transform core and the renderer.
//!
//! Canonical space is GL-style clip space:
//! - Origin at the viewport center
//! - +X right, +Y up
//! - Visible range [-1, 1] on both axes before aspect correction
//!
//! The quad shader divides X by the viewport aspect ratio, so one unit of
//! translation covers the same on-screen distance on both axes.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
