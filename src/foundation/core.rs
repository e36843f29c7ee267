pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Target surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas from pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether this canvas has drawable area.
    ///
    /// Zero-sized canvases are legal inputs everywhere; planning against one
    /// yields an empty plan and rendering one yields an empty frame.
    pub fn is_drawable(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width as `f64` for geometry math.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64` for geometry math.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }
}

/// Straight (non-premultiplied) RGBA8 color as carried by draw ops.
///
/// The CPU backend premultiplies at the paint boundary; plan-level colors stay
/// straight so tests can compare them against design-state colors directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Straight alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a color with explicit straight alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return this color with alpha scaled to `alpha` in `[0, 1]`.
    pub fn with_alpha_f64(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Premultiplied RGBA8 bytes for pixmap construction.
    pub fn to_premul_bytes(self) -> [u8; 4] {
        use crate::foundation::math::mul_div255_u8;

        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}
