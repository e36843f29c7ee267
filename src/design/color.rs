use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// Straight RGB8 design color as picked by the user.
///
/// Parsing is deliberately soft: malformed hex input yields black instead of an
/// error, so a bad color can never abort a render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black, also the fallback for malformed input.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// Malformed input (wrong length, non-hex digits) returns [`Color::BLACK`].
    pub fn from_hex(s: &str) -> Self {
        Self::try_from_hex(s).unwrap_or(Self::BLACK)
    }

    fn try_from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        // Length is checked in bytes; multibyte input must bail out here or
        // the range slices below would split a char boundary.
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }

        let byte = |range| u8::from_str_radix(&s[range], 16).ok();
        Some(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    /// Normalized lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Apply the lighting transform for user brightness/contrast percentages.
    ///
    /// Per channel: `clamp(0, 255, (c - 128) * contrast + 128 * brightness)`
    /// with `contrast = contrast_pct / 100` and `brightness = brightness_pct / 100`.
    /// This is a linear contrast-around-midpoint transform (not gamma-correct);
    /// identity at `(100, 100)`.
    pub fn adjust(self, brightness_pct: u32, contrast_pct: u32) -> Self {
        let brightness = f64::from(brightness_pct) / 100.0;
        let contrast = f64::from(contrast_pct) / 100.0;
        let apply = |c: u8| -> u8 {
            let out = (f64::from(c) - 128.0) * contrast + 128.0 * brightness;
            out.round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
        }
    }

    /// Scale every channel toward black by `fraction` in `[0, 1]`.
    ///
    /// Per channel: `max(0, c - c * fraction)`. Used to derive borders and
    /// shadows from a base fill.
    pub fn darken(self, fraction: f64) -> Self {
        let f = fraction.clamp(0.0, 1.0);
        let apply = |c: u8| -> u8 { (f64::from(c) - f64::from(c) * f).round().max(0.0) as u8 };

        Self {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
        }
    }

    /// Opaque straight RGBA8 form for draw ops.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::opaque(self.r, self.g, self.b)
    }

    /// Straight RGBA8 with alpha in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Rgba8 {
        self.to_rgba8().with_alpha_f64(alpha)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Triple([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            // Soft-fail to black by contract; bad colors degrade, never error.
            Repr::Hex(s) => Ok(Self::from_hex(&s)),
            Repr::Triple([r, g, b]) => Ok(Self::rgb(r, g, b)),
        }
    }
}
