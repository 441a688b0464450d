//! Quadrille engine: a keyboard-driven 2D transform playground.
//!
//! The crate is split into a platform-free core and a thin GPU shell:
//!
//! - [`input`] models keys and the set of currently held keys.
//! - [`chord`] resolves held keys against a table of chord bindings.
//! - [`transform`] accumulates the affine parameters those bindings drive.
//! - [`core`] ties the three together into a per-frame scheduler and the
//!   scene description a frontend hands to the runtime.
//!
//! Everything above is pure and test-friendly. The shell below owns the
//! window and the GPU:
//!
//! - [`window`] runs the winit event loop and drives one frame per redraw.
//! - [`device`] holds the wgpu surface/device/queue bundle.
//! - [`render`] draws the textured quad from a transform snapshot.
//! - [`assets`] uploads the quad texture (placeholder first, image later).

pub mod input;

pub mod chord;
pub mod transform;

pub mod core;

pub mod window;

pub mod device;
pub mod render;
pub mod assets;

pub mod time;
pub mod coords;
pub mod logging;
