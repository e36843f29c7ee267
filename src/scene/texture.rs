//! Texture and pattern generators.
//!
//! Each generator appends ops for one decorative overlay on top of a base
//! fill. Primitive counts are fixed against the 800x600 reference grid and all
//! random parameters are drawn in fraction space, so for a given design state
//! a resized canvas produces exactly the scaled op list. The per-primitive
//! parameter ranges follow the statistical contract in the crate docs: tests
//! assert counts and bounds, not pixel output.

use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point, Rect, Rgba8};
use crate::foundation::math::SplitMix64;
use crate::scene::plan::{DrawOp, Layer, Paint};

/// Scale factors from the 800x600 reference grid to the live canvas.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RefScale {
    /// Horizontal pixels per reference pixel.
    pub(crate) sx: f64,
    /// Vertical pixels per reference pixel.
    pub(crate) sy: f64,
}

impl RefScale {
    pub(crate) const REF_W: f64 = 800.0;
    pub(crate) const REF_H: f64 = 600.0;

    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            sx: width / Self::REF_W,
            sy: height / Self::REF_H,
        }
    }

    /// Region width in reference pixels.
    fn ref_w(self, region: Rect) -> f64 {
        region.width() / self.sx
    }

    /// Region height in reference pixels.
    fn ref_h(self, region: Rect) -> f64 {
        region.height() / self.sy
    }
}

/// Horizontal grain lines: one candidate row per 2 reference px, each drawn
/// with probability 0.5 at alpha `0.08 * opacity`.
pub(crate) fn wood_grain(
    ops: &mut Vec<DrawOp>,
    region: Rect,
    scale: RefScale,
    opacity: f64,
    rng: &mut SplitMix64,
    layer: Layer,
) {
    let rows = (scale.ref_h(region) / 2.0).round() as usize;
    let color = Rgba8::opaque(0, 0, 0).with_alpha_f64(0.08 * opacity);

    for i in 0..rows {
        if !rng.next_bool(0.5) {
            continue;
        }
        let y = region.y0 + (i as f64) * 2.0 * scale.sy;
        ops.push(DrawOp::FillRect {
            rect: Rect::new(region.x0, y, region.x1, y + scale.sy),
            paint: Paint::Solid(color),
            layer,
        });
    }
}

/// Deterministic 40-reference-px tile grid with grout shadows.
pub(crate) fn tile_grid(
    ops: &mut Vec<DrawOp>,
    region: Rect,
    scale: RefScale,
    opacity: f64,
    layer: Layer,
) {
    let tile_w = 40.0 * scale.sx;
    let tile_h = 40.0 * scale.sy;
    let cols = (scale.ref_w(region) / 40.0).ceil() as usize;
    let rows = (scale.ref_h(region) / 40.0).ceil() as usize;

    let line = Rgba8::opaque(0, 0, 0).with_alpha_f64(0.15 * opacity);
    let grout = Rgba8::opaque(0, 0, 0).with_alpha_f64(0.05 * opacity);

    for row in 0..rows {
        for col in 0..cols {
            let x = region.x0 + (col as f64) * tile_w;
            let y = region.y0 + (row as f64) * tile_h;
            let cell = Rect::new(x, y, x + tile_w, y + tile_h).intersect(region);

            ops.push(DrawOp::StrokeRect {
                rect: cell,
                color: line,
                width: 2.0 * scale.sx,
                layer,
            });
            // Grout shadow along the bottom and right cell edges.
            ops.push(DrawOp::FillRect {
                rect: Rect::new(cell.x0, cell.y1 - scale.sy, cell.x1, cell.y1),
                paint: Paint::Solid(grout),
                layer,
            });
            ops.push(DrawOp::FillRect {
                rect: Rect::new(cell.x1 - scale.sx, cell.y0, cell.x1, cell.y1),
                paint: Paint::Solid(grout),
                layer,
            });
        }
    }
}

/// Random veining: `count` strokes with length in `[len_lo, len_hi)` reference
/// px, uniform angle, alpha in `[alpha_lo, alpha_hi)`, width in `[1, 3)`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn veins(
    ops: &mut Vec<DrawOp>,
    region: Rect,
    scale: RefScale,
    count: usize,
    len_lo: f64,
    len_hi: f64,
    alpha_lo: f64,
    alpha_hi: f64,
    color: Rgba8,
    rng: &mut SplitMix64,
    layer: Layer,
) {
    for _ in 0..count {
        let x = region.x0 + rng.next_f64() * region.width();
        let y = region.y0 + rng.next_f64() * region.height();
        let len = rng.next_range(len_lo, len_hi);
        let angle = rng.next_range(0.0, 2.0 * PI);
        let alpha = rng.next_range(alpha_lo, alpha_hi);
        let width = rng.next_range(1.0, 3.0) * scale.sx;

        ops.push(DrawOp::Line {
            from: Point::new(x, y),
            to: Point::new(
                x + angle.cos() * len * scale.sx,
                y + angle.sin() * len * scale.sy,
            ),
            color: color.with_alpha_f64(alpha),
            width,
            layer,
        });
    }
}

/// Wall marble texture: 15 veins, length `[50, 150)`, alpha `[0, 0.1)`.
pub(crate) fn marble_veining(
    ops: &mut Vec<DrawOp>,
    region: Rect,
    scale: RefScale,
    opacity: f64,
    rng: &mut SplitMix64,
    layer: Layer,
) {
    veins(
        ops,
        region,
        scale,
        15,
        50.0,
        150.0,
        0.0,
        0.1 * opacity,
        Rgba8::opaque(0, 0, 0),
        rng,
        layer,
    );
}

/// Subtle stipple: `area / 200` reference-px dots, size `[1, 3)`, alpha 0.03.
pub(crate) fn paint_stipple(
    ops: &mut Vec<DrawOp>,
    region: Rect,
    scale: RefScale,
    opacity: f64,
    rng: &mut SplitMix64,
    layer: Layer,
) {
    let count = (scale.ref_w(region) * scale.ref_h(region) / 200.0).round() as usize;
    let color = Rgba8::opaque(0, 0, 0).with_alpha_f64(0.03 * opacity);

    for _ in 0..count {
        let x = region.x0 + rng.next_f64() * region.width();
        let y = region.y0 + rng.next_f64() * region.height();
        let size = rng.next_range(1.0, 3.0);
        ops.push(DrawOp::FillRect {
            rect: Rect::new(x, y, x + size * scale.sx, y + size * scale.sy),
            paint: Paint::Solid(color),
            layer,
        });
    }
}

/// Granite speckle: `area / 150` reference-px dots alternating between a light
/// and a dark fleck color.
#[allow(clippy::too_many_arguments)]
pub(crate) fn granite_speckle(
    ops: &mut Vec<DrawOp>,
    region: Rect,
    scale: RefScale,
    light: Rgba8,
    dark: Rgba8,
    rng: &mut SplitMix64,
    layer: Layer,
) {
    let count = (scale.ref_w(region) * scale.ref_h(region) / 150.0).round() as usize;

    for _ in 0..count {
        let x = region.x0 + rng.next_f64() * region.width();
        let y = region.y0 + rng.next_f64() * region.height();
        let size = rng.next_range(1.0, 2.5);
        let color = if rng.next_bool(0.5) { light } else { dark };
        ops.push(DrawOp::FillRect {
            rect: Rect::new(x, y, x + size * scale.sx, y + size * scale.sy),
            paint: Paint::Solid(color.with_alpha_f64(0.85)),
            layer,
        });
    }
}

/// Offset brick grid: rows of tiles with every other row shifted half a tile.
pub(crate) fn subway_grid(ops: &mut Vec<DrawOp>, band: Rect, scale: RefScale, color: Rgba8, layer: Layer) {
    let tile_w = 60.0 * scale.sx;
    let tile_h = band.height() / 4.0;
    let rows = 4usize;

    for row in 0..rows {
        let offset = if row % 2 == 1 { -tile_w / 2.0 } else { 0.0 };
        let y = band.y0 + (row as f64) * tile_h;
        let cols = (band.width() / tile_w).ceil() as usize + 1;

        for col in 0..cols {
            let x = band.x0 + offset + (col as f64) * tile_w;
            let cell = Rect::new(x, y, x + tile_w, y + tile_h).intersect(band);
            if cell.width() <= 0.0 || cell.height() <= 0.0 {
                continue;
            }
            ops.push(DrawOp::StrokeRect {
                rect: cell,
                color,
                width: scale.sx,
                layer,
            });
        }
    }
}

/// Diagonal strokes alternating direction per cell, reading as herringbone.
pub(crate) fn herringbone(ops: &mut Vec<DrawOp>, band: Rect, scale: RefScale, color: Rgba8, layer: Layer) {
    let cell_w = 40.0 * scale.sx;
    let cell_h = band.height() / 3.0;
    let rows = 3usize;
    let cols = (band.width() / cell_w).ceil() as usize;

    for row in 0..rows {
        for col in 0..cols {
            let x = band.x0 + (col as f64) * cell_w;
            let y = band.y0 + (row as f64) * cell_h;
            let cell = Rect::new(x, y, x + cell_w, y + cell_h).intersect(band);
            if cell.width() <= 0.0 || cell.height() <= 0.0 {
                continue;
            }

            // Alternate the 45-degree direction in a checker pattern.
            let (from, to) = if (row + col) % 2 == 0 {
                (Point::new(cell.x0, cell.y1), Point::new(cell.x1, cell.y0))
            } else {
                (Point::new(cell.x0, cell.y0), Point::new(cell.x1, cell.y1))
            };
            ops.push(DrawOp::Line {
                from,
                to,
                color,
                width: 1.5 * scale.sx,
                layer,
            });
        }
    }
}

/// Glass: a translucent white sheet over the band plus a fine grid of seams.
pub(crate) fn glass_overlay(ops: &mut Vec<DrawOp>, band: Rect, scale: RefScale, seam: Rgba8, layer: Layer) {
    ops.push(DrawOp::FillRect {
        rect: band,
        paint: Paint::Solid(Rgba8::opaque(255, 255, 255).with_alpha_f64(0.15)),
        layer,
    });

    let step_x = 48.0 * scale.sx;
    let cols = (band.width() / step_x).ceil() as usize;
    for col in 1..cols {
        let x = band.x0 + (col as f64) * step_x;
        ops.push(DrawOp::Line {
            from: Point::new(x, band.y0),
            to: Point::new(x, band.y1),
            color: seam,
            width: scale.sx,
            layer,
        });
    }

    let rows = 3usize;
    let step_y = band.height() / (rows as f64);
    for row in 1..rows {
        let y = band.y0 + (row as f64) * step_y;
        ops.push(DrawOp::Line {
            from: Point::new(band.x0, y),
            to: Point::new(band.x1, y),
            color: seam,
            width: scale.sx,
            layer,
        });
    }
}

/// Marble backsplash: coarse grid with one short random vein per cell.
pub(crate) fn marble_grid(
    ops: &mut Vec<DrawOp>,
    band: Rect,
    scale: RefScale,
    seam: Rgba8,
    rng: &mut SplitMix64,
    layer: Layer,
) {
    let cell_w = 80.0 * scale.sx;
    let cell_h = band.height() / 2.0;
    let rows = 2usize;
    let cols = (band.width() / cell_w).ceil() as usize;

    for row in 0..rows {
        for col in 0..cols {
            let x = band.x0 + (col as f64) * cell_w;
            let y = band.y0 + (row as f64) * cell_h;
            let cell = Rect::new(x, y, x + cell_w, y + cell_h).intersect(band);
            if cell.width() <= 0.0 || cell.height() <= 0.0 {
                continue;
            }

            ops.push(DrawOp::StrokeRect {
                rect: cell,
                color: seam,
                width: scale.sx,
                layer,
            });
            veins(
                ops,
                cell,
                scale,
                1,
                5.0,
                20.0,
                0.1,
                0.3,
                Rgba8::opaque(0, 0, 0),
                rng,
                layer,
            );
        }
    }
}

/// Circle as four cubic Beziers.
///
/// Built by hand (rather than `kurbo::Circle::to_path`) so the control points
/// scale exactly linearly with the radius, keeping resized plans exact scaled
/// copies of each other.
pub(crate) fn circle_path(center: Point, radius: f64) -> BezPath {
    // Standard cubic approximation constant for a quarter circle.
    const K: f64 = 0.552_284_749_831;

    let (cx, cy) = (center.x, center.y);
    let (r, k) = (radius, radius * K);

    let mut path = BezPath::new();
    path.move_to((cx + r, cy));
    path.curve_to((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
    path.curve_to((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
    path.curve_to((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
    path.curve_to((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ref_scale() -> RefScale {
        RefScale::new(800.0, 600.0)
    }

    #[test]
    fn wood_grain_count_is_binomial_over_candidate_rows() {
        // Wall region at reference size: 800x450 -> 225 candidate rows.
        let region = Rect::new(0.0, 0.0, 800.0, 450.0);
        let mut rng = SplitMix64::new(3);
        let mut ops = Vec::new();
        wood_grain(&mut ops, region, ref_scale(), 1.0, &mut rng, Layer::Walls);

        assert!(ops.len() <= 225);
        // With p = 0.5 over 225 trials, falling outside [70, 155] is vanishingly
        // unlikely for any seed.
        assert!((70..=155).contains(&ops.len()), "len = {}", ops.len());
    }

    #[test]
    fn marble_veining_emits_exactly_15_bounded_strokes() {
        let region = Rect::new(0.0, 0.0, 800.0, 450.0);
        let mut rng = SplitMix64::new(11);
        let mut ops = Vec::new();
        marble_veining(&mut ops, region, ref_scale(), 1.0, &mut rng, Layer::Walls);

        assert_eq!(ops.len(), 15);
        for op in &ops {
            let DrawOp::Line {
                from,
                to,
                color,
                width,
                ..
            } = op
            else {
                panic!("expected line op");
            };
            let len = from.distance(*to);
            assert!((50.0..150.0).contains(&len), "len = {len}");
            assert!(color.a <= 26, "alpha byte = {}", color.a); // 0.1 * 255
            assert!((1.0..3.0).contains(width));
            // Veins start inside the region.
            assert!(region.contains(*from));
        }
    }

    #[test]
    fn paint_stipple_count_matches_area_rule() {
        let region = Rect::new(0.0, 0.0, 800.0, 450.0);
        let mut rng = SplitMix64::new(4);
        let mut ops = Vec::new();
        paint_stipple(&mut ops, region, ref_scale(), 1.0, &mut rng, Layer::Walls);

        // 800 * 450 / 200 = 1800 dots, always.
        assert_eq!(ops.len(), 1800);
    }

    #[test]
    fn tile_grid_is_deterministic_and_dense() {
        let region = Rect::new(0.0, 0.0, 800.0, 450.0);
        let mut ops = Vec::new();
        tile_grid(&mut ops, region, ref_scale(), 1.0, Layer::Walls);

        // 20 cols x 12 rows x 3 ops per cell.
        assert_eq!(ops.len(), 20 * 12 * 3);

        let mut ops2 = Vec::new();
        tile_grid(&mut ops2, region, ref_scale(), 1.0, Layer::Walls);
        assert_eq!(ops, ops2);
    }

    #[test]
    fn granite_speckle_count_matches_area_rule() {
        // Countertop band at reference size: 592x18 -> round(10656 / 150) = 71.
        let band = Rect::new(32.0, 450.0, 624.0, 468.0);
        let mut rng = SplitMix64::new(8);
        let mut ops = Vec::new();
        granite_speckle(
            &mut ops,
            band,
            ref_scale(),
            Rgba8::opaque(200, 200, 200),
            Rgba8::opaque(40, 40, 40),
            &mut rng,
            Layer::Countertop,
        );
        assert_eq!(ops.len(), 71);
    }

    #[test]
    fn herringbone_alternates_diagonal_direction() {
        let band = Rect::new(0.0, 0.0, 80.0, 60.0);
        let mut ops = Vec::new();
        herringbone(&mut ops, band, ref_scale(), Rgba8::opaque(0, 0, 0), Layer::Backsplash);

        // 2 cols x 3 rows.
        assert_eq!(ops.len(), 6);
        let slope = |op: &DrawOp| -> f64 {
            let DrawOp::Line { from, to, .. } = op else {
                panic!("expected line");
            };
            (to.y - from.y).signum() * (to.x - from.x).signum()
        };
        assert_ne!(slope(&ops[0]), slope(&ops[1]));
    }

    #[test]
    fn circle_path_is_closed_and_scales_linearly() {
        let a = circle_path(Point::new(10.0, 10.0), 4.0);
        let b = circle_path(Point::new(20.0, 20.0), 8.0);

        let pts = |p: &BezPath| -> Vec<Point> {
            p.elements()
                .iter()
                .flat_map(|el| match el {
                    kurbo::PathEl::MoveTo(p) => vec![*p],
                    kurbo::PathEl::CurveTo(a, b, c) => vec![*a, *b, *c],
                    _ => vec![],
                })
                .collect()
        };

        let pa = pts(&a);
        let pb = pts(&b);
        assert_eq!(pa.len(), pb.len());
        for (p, q) in pa.iter().zip(&pb) {
            assert!((q.x - p.x * 2.0).abs() < 1e-9);
            assert!((q.y - p.y * 2.0).abs() < 1e-9);
        }
    }
}
