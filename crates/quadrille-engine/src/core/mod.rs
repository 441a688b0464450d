//! Core engine-facing contracts.
//!
//! [`FrameScheduler`] is the per-frame state machine: it owns the held-key
//! set, the binding table, and the transform accumulator, and is the only
//! code allowed to mutate them. [`Scene`] is the bundle a frontend hands to
//! the runtime to describe what to run. Neither touches the window or the
//! GPU, so the whole frame pipeline tests headless.

mod scene;
mod scheduler;

pub use scene::{Scene, TextureSource};
pub use scheduler::{FrameScheduler, SchedulerPhase};
