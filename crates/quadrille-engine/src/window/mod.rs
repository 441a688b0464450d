//! Window runtime: the winit event loop driving one tick per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
