//! Platform event translation. Only the winit backend exists today.

pub mod winit;
