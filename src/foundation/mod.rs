//! Core value types, error taxonomy, and deterministic math helpers.

/// Canvas and color value types plus kurbo re-exports.
pub mod core;
/// `GalleyError` / `GalleyResult`.
pub mod error;
/// Seedable RNG and integer color math.
pub mod math;
