//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates window system events into [`KeyEvent`]s via
//! [`platform::winit`] and feeds them to the scheduler, which owns the
//! [`KeyState`] held-key set.

mod keys;
mod types;

pub mod platform;

pub use keys::KeyState;
pub use types::{Key, KeyEvent, KeyPhase};
