use serde::{Deserialize, Serialize};

use crate::design::color::Color;
use crate::foundation::error::{GalleyError, GalleyResult};

/// Cabinet door styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinetStyle {
    /// Flat doors with a center split line.
    #[default]
    Modern,
    /// Raised doors with an inset frame.
    Traditional,
    /// Flat doors, no extra detail.
    Contemporary,
    /// Mixed styling, no extra detail.
    Transitional,
    /// Unrecognized tag; doors render without decorative detail.
    #[serde(other)]
    Unknown,
}

/// Countertop finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountertopMaterial {
    /// Speckled stone.
    #[default]
    Granite,
    /// Uniform engineered stone.
    Quartz,
    /// Veined stone.
    Marble,
    /// Butcher block.
    Wood,
    /// Unrecognized tag; band renders with the fallback color, no texture.
    #[serde(other)]
    Unknown,
}

/// Backsplash tile pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacksplashPattern {
    /// Offset brick grid.
    #[default]
    Subway,
    /// Diagonal strokes alternating per cell.
    Herringbone,
    /// Translucent overlay plus grid.
    Glass,
    /// Grid with a vein per cell.
    Marble,
    /// Unrecognized tag; band renders as a plain fill.
    #[serde(other)]
    Unknown,
}

/// Floor finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flooring {
    /// Warm oak planks.
    #[default]
    Oak,
    /// Dark walnut planks.
    Walnut,
    /// Ceramic tile.
    Tile,
    /// Polished concrete.
    Concrete,
    /// Unrecognized tag; floor renders as a flat neutral fill, no grid.
    #[serde(other)]
    Unknown,
}

/// Optional texture overlay for the wall fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallTexture {
    /// No overlay.
    #[default]
    None,
    /// Horizontal grain lines.
    Wood,
    /// Square tile grid with grout shadows.
    Tile,
    /// Random veining.
    Marble,
    /// Subtle stipple.
    Paint,
    /// Unrecognized tag; wall renders without an overlay.
    #[serde(other)]
    Unknown,
}

/// The complete set of user-selectable options describing the kitchen.
///
/// Owned by the caller (typically inside a [`crate::session::DesignSession`]),
/// mutated in place between renders, and read in full by the scene composer
/// each frame. Every field has a serde default so partial documents load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignState {
    /// Cabinet door styling.
    pub cabinet_style: CabinetStyle,
    /// Cabinet body color.
    pub cabinet_color: Color,
    /// Wall fill color (before lighting adjustment).
    pub wall_color: Color,
    /// Backsplash base color.
    pub backsplash_color: Color,
    /// Countertop finish.
    pub countertop: CountertopMaterial,
    /// Backsplash tile pattern.
    pub backsplash: BacksplashPattern,
    /// Floor finish.
    pub flooring: Flooring,
    /// Optional wall texture overlay.
    pub wall_texture: WallTexture,
    /// Wall texture overlay opacity, percent (0-100).
    pub texture_opacity: u32,
    /// Lighting brightness, percent (nominal 0-200).
    pub brightness: u32,
    /// Lighting contrast, percent (nominal 0-200).
    pub contrast: u32,
    /// Whether the center island is drawn.
    pub island_enabled: bool,
    /// Whether the backsplash band is drawn.
    pub backsplash_enabled: bool,
    /// Texture noise seed; equal seeds yield identical plans.
    pub seed: u64,
}

impl Default for DesignState {
    fn default() -> Self {
        Self {
            cabinet_style: CabinetStyle::Modern,
            cabinet_color: Color::rgb(0x8b, 0x45, 0x13),
            wall_color: Color::rgb(0xf5, 0xf5, 0xf5),
            backsplash_color: Color::rgb(0xe2, 0xe8, 0xf0),
            countertop: CountertopMaterial::Granite,
            backsplash: BacksplashPattern::Subway,
            flooring: Flooring::Oak,
            wall_texture: WallTexture::None,
            texture_opacity: 100,
            brightness: 100,
            contrast: 100,
            island_enabled: false,
            backsplash_enabled: true,
            seed: 0,
        }
    }
}

impl DesignState {
    /// Reject values outside the documented nominal ranges.
    ///
    /// Validation is advisory for UI callers; the renderer itself clamps and
    /// soft-fails rather than erroring mid-pass.
    pub fn validate(&self) -> GalleyResult<()> {
        if self.brightness > 200 {
            return Err(GalleyError::validation("brightness must be <= 200"));
        }
        if self.contrast > 200 {
            return Err(GalleyError::validation("contrast must be <= 200"));
        }
        if self.texture_opacity > 100 {
            return Err(GalleyError::validation("texture_opacity must be <= 100"));
        }
        Ok(())
    }

    /// Shallow-merge a patch into this state. `None` fields are left alone.
    pub fn apply(&mut self, patch: &DesignPatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = patch.$field {
                    self.$field = v;
                })*
            };
        }

        merge!(
            cabinet_style,
            cabinet_color,
            wall_color,
            backsplash_color,
            countertop,
            backsplash,
            flooring,
            wall_texture,
            texture_opacity,
            brightness,
            contrast,
            island_enabled,
            backsplash_enabled,
            seed,
        );
    }
}

/// Partial [`DesignState`] used by UI commands and suggestion presets.
///
/// Applying a patch is a shallow merge; see [`DesignState::apply`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPatch {
    /// Cabinet door styling.
    pub cabinet_style: Option<CabinetStyle>,
    /// Cabinet body color.
    pub cabinet_color: Option<Color>,
    /// Wall fill color.
    pub wall_color: Option<Color>,
    /// Backsplash base color.
    pub backsplash_color: Option<Color>,
    /// Countertop finish.
    pub countertop: Option<CountertopMaterial>,
    /// Backsplash tile pattern.
    pub backsplash: Option<BacksplashPattern>,
    /// Floor finish.
    pub flooring: Option<Flooring>,
    /// Wall texture overlay.
    pub wall_texture: Option<WallTexture>,
    /// Wall texture overlay opacity.
    pub texture_opacity: Option<u32>,
    /// Lighting brightness.
    pub brightness: Option<u32>,
    /// Lighting contrast.
    pub contrast: Option<u32>,
    /// Island toggle.
    pub island_enabled: Option<bool>,
    /// Backsplash toggle.
    pub backsplash_enabled: Option<bool>,
    /// Texture noise seed.
    pub seed: Option<u64>,
}
