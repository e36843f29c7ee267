//! Rasterization: plan execution into RGBA frames.

/// `FrameRGBA` and the backend trait.
pub mod backend;
/// Software backend on `vello_cpu`.
pub mod cpu;
