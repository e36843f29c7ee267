use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};

/// One ordered drawing pass of the composited scene.
///
/// Layers are emitted back-to-front in exactly this order; the discriminant
/// order is the z-order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Translucent lighting gradient under everything.
    Lighting,
    /// Opaque wall fill plus optional texture overlay.
    Walls,
    /// Floor gradient and tile grid.
    Floor,
    /// Upper and base cabinet runs.
    Cabinets,
    /// Countertop band and material texture.
    Countertop,
    /// Backsplash band and pattern (toggleable).
    Backsplash,
    /// Stove, refrigerator, dishwasher.
    Appliances,
    /// Center island body and cap (toggleable).
    Island,
    /// Closing radial vignette for depth.
    Accent,
}

impl Layer {
    /// All layers in z-order, back to front.
    pub const ORDER: [Self; 9] = [
        Self::Lighting,
        Self::Walls,
        Self::Floor,
        Self::Cabinets,
        Self::Countertop,
        Self::Backsplash,
        Self::Appliances,
        Self::Island,
        Self::Accent,
    ];
}

/// Fill source for rectangle ops.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Vertical linear gradient, `top` at the rect's top edge.
    LinearV {
        /// Color at the top edge.
        top: Rgba8,
        /// Color at the bottom edge.
        bottom: Rgba8,
    },
    /// Radial gradient from the rect center outwards.
    Radial {
        /// Color at the center.
        center: Rgba8,
        /// Color at the corners.
        edge: Rgba8,
    },
}

/// A single draw operation in pixel space.
///
/// Ops carry their [`Layer`] tag so tests (and debug tooling) can slice the
/// plan per pass without re-deriving z-order from positions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Fill paint.
        paint: Paint,
        /// Owning layer.
        layer: Layer,
    },
    /// Stroke an axis-aligned rectangle outline.
    StrokeRect {
        /// Target rectangle.
        rect: Rect,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in pixels.
        width: f64,
        /// Owning layer.
        layer: Layer,
    },
    /// Stroke a line segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in pixels.
        width: f64,
        /// Owning layer.
        layer: Layer,
    },
    /// Fill an arbitrary path (burner circles, control dots).
    FillPath {
        /// Path in pixel space.
        path: BezPath,
        /// Fill color.
        color: Rgba8,
        /// Owning layer.
        layer: Layer,
    },
}

impl DrawOp {
    /// The layer this op belongs to.
    pub fn layer(&self) -> Layer {
        match self {
            Self::FillRect { layer, .. }
            | Self::StrokeRect { layer, .. }
            | Self::Line { layer, .. }
            | Self::FillPath { layer, .. } => *layer,
        }
    }
}

/// Backend-agnostic draw plan for one full repaint.
///
/// A plan is a flat op list in painter's order; executing it must fully
/// overwrite the previous surface contents.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ScenePlan {
    /// Target canvas the ops were laid out against.
    pub canvas: Canvas,
    /// Draw ops, back to front.
    pub ops: Vec<DrawOp>,
}

impl ScenePlan {
    /// Empty plan for a canvas (also the degenerate-size result).
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    /// Ops belonging to one layer, in emit order.
    pub fn layer_ops(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.layer() == layer)
    }

    /// Number of ops in one layer.
    pub fn layer_len(&self, layer: Layer) -> usize {
        self.layer_ops(layer).count()
    }

    /// Whether ops appear in nondecreasing layer order.
    pub fn is_layer_ordered(&self) -> bool {
        self.ops.windows(2).all(|w| w[0].layer() <= w[1].layer())
    }
}
