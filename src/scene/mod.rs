//! Scene planning: layered draw-op composition from a design state.

/// The layer composer, state -> plan.
pub mod compose;
/// Plan IR: layers, paints, draw ops.
pub mod plan;
/// Texture and pattern generators.
pub(crate) mod texture;
