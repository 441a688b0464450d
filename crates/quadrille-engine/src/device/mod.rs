//! GPU device layer: instance/surface/device/queue ownership and per-frame
//! acquire/submit. No drawing happens here; renderers receive the device and
//! queue through `render::RenderCtx`.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
