//! The design-state data model: colors, options, material tables, presets.

/// Hex/RGB color value with the lighting and shading transforms.
pub mod color;
/// Static material and finish tables with the fail-closed lookup rule.
pub mod materials;
/// Canned design suggestion presets.
pub mod suggest;
/// `DesignState`, `DesignPatch`, and the option enums.
pub mod state;
