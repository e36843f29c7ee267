//! Galley is a deterministic 2D kitchen-design visualizer.
//!
//! Galley turns a set of user-facing design options (`DesignState`) into pixels
//! (`FrameRGBA`) via a backend-agnostic draw plan (`ScenePlan`).
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `DesignState + Canvas -> ScenePlan` (layered draw ops, back to front)
//! 2. **Render**: `ScenePlan -> FrameRGBA` (CPU backend on `vello_cpu`)
//! 3. **Export** (optional): encode a frame as a PNG snapshot
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: equal states compose identical plans; texture
//!   noise is driven by the state's seed, never by ambient randomness.
//! - **Soft-fail inputs**: malformed colors and unknown option tags degrade the
//!   picture, they never abort a repaint.
//! - **Premultiplied RGBA8** out of the renderer; export unpremultiplies.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod design;
mod foundation;
mod render;
mod scene;

/// PNG snapshot export.
pub mod export;
/// The interactive session facade.
pub mod session;

pub use design::color::Color;
pub use design::materials::{CountertopSpec, FlooringSpec, countertop_spec, flooring_spec};
pub use design::state::{
    BacksplashPattern, CabinetStyle, CountertopMaterial, DesignPatch, DesignState, Flooring,
    WallTexture,
};
pub use design::suggest::{Suggestion, random_suggestion, suggestions};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{GalleyError, GalleyResult};
pub use foundation::math::SplitMix64;
pub use render::backend::{FrameRGBA, RenderBackend};
pub use render::cpu::CpuRenderer;
pub use scene::compose::plan_scene;
pub use scene::plan::{DrawOp, Layer, Paint, ScenePlan};
pub use session::DesignSession;
