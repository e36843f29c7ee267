//! Scene composition: turn a [`DesignState`] into a [`ScenePlan`].
//!
//! Layers are emitted back-to-front in the fixed order of [`Layer::ORDER`].
//! All geometry is derived from canvas-size fractions; texture densities are
//! pinned to the 800x600 reference grid (see [`super::texture`]), so two plans
//! for the same state at different sizes are exact scaled copies.

use crate::design::color::Color;
use crate::design::materials::{self, COUNTERTOP_FALLBACK, FLOOR_FALLBACK};
use crate::design::state::{BacksplashPattern, CabinetStyle, CountertopMaterial, DesignState, WallTexture};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::math::SplitMix64;
use crate::scene::plan::{DrawOp, Layer, Paint, ScenePlan};
use crate::scene::texture::{self, RefScale};

// Vertical splits, as fractions of canvas height.
const FLOOR_TOP: f64 = 0.75;
const COUNTER_BOTTOM: f64 = 0.78;
const UPPER_ROW_TOP: f64 = 0.18;
const UPPER_ROW_BOTTOM: f64 = 0.38;
const BASE_ROW_TOP: f64 = COUNTER_BOTTOM;
const BASE_ROW_BOTTOM: f64 = 0.97;

// The counter run (cabinets, countertop, backsplash) as fractions of width.
const RUN_X0: f64 = 0.04;
const RUN_X1: f64 = 0.78;

// Cabinet unit placement within the run.
const CABINET_XS: [f64; 3] = [0.05, 0.18, 0.31];
const CABINET_W: f64 = 0.12;

const HANDLE_SILVER: Color = Color::rgb(0xc0, 0xc0, 0xc0);
const WALL_BORDER: Color = Color::rgb(0x99, 0x99, 0x99);
const STOVE_BODY: Color = Color::rgb(0x44, 0x44, 0x44);
const FRIDGE_BODY: Color = Color::rgb(0x55, 0x55, 0x55);
const DISHWASHER_BODY: Color = Color::rgb(0x66, 0x66, 0x66);

/// Compose the full scene for one repaint.
///
/// Never fails: malformed option tags degrade to base fills and a
/// non-drawable canvas yields an empty plan.
#[tracing::instrument(level = "debug", skip(state), fields(w = canvas.width, h = canvas.height, seed = state.seed))]
pub fn plan_scene(state: &DesignState, canvas: Canvas) -> ScenePlan {
    if !canvas.is_drawable() {
        return ScenePlan::empty(canvas);
    }

    let mut composer = Composer {
        state,
        canvas,
        scale: RefScale::new(canvas.w(), canvas.h()),
        rng: SplitMix64::new(state.seed),
        ops: Vec::new(),
    };

    // Z-order. Layers that draw noise consume the rng in exactly this
    // sequence; everything after the backsplash is deterministic.
    composer.lighting();
    composer.walls();
    composer.floor();
    composer.cabinets();
    composer.countertop();
    composer.backsplash();
    composer.appliances();
    composer.island();
    composer.accent();

    let plan = ScenePlan {
        canvas,
        ops: composer.ops,
    };
    tracing::debug!(ops = plan.ops.len(), "scene planned");
    plan
}

struct Composer<'a> {
    state: &'a DesignState,
    canvas: Canvas,
    scale: RefScale,
    rng: SplitMix64,
    ops: Vec<DrawOp>,
}

impl Composer<'_> {
    fn w(&self) -> f64 {
        self.canvas.w()
    }

    fn h(&self) -> f64 {
        self.canvas.h()
    }

    /// Rect from canvas-fraction coordinates.
    fn fr(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(x0 * self.w(), y0 * self.h(), x1 * self.w(), y1 * self.h())
    }

    /// Brightness/contrast lighting applied to a base fill.
    fn lit(&self, color: Color) -> Color {
        color.adjust(self.state.brightness, self.state.contrast)
    }

    fn texture_opacity(&self) -> f64 {
        f64::from(self.state.texture_opacity.min(100)) / 100.0
    }

    fn fill(&mut self, rect: Rect, paint: Paint, layer: Layer) {
        self.ops.push(DrawOp::FillRect { rect, paint, layer });
    }

    fn fill_solid(&mut self, rect: Rect, color: Rgba8, layer: Layer) {
        self.fill(rect, Paint::Solid(color), layer);
    }

    fn stroke(&mut self, rect: Rect, color: Rgba8, width: f64, layer: Layer) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color,
            width,
            layer,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba8, width: f64, layer: Layer) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
            layer,
        });
    }

    /// Layer 1: translucent vertical gradient keyed off brightness.
    ///
    /// White wash above nominal brightness, black wash below; skipped entirely
    /// at the neutral setting.
    fn lighting(&mut self) {
        let b = self.state.brightness;
        if b == 100 {
            return;
        }

        let tone = if b >= 100 { 255 } else { 0 };
        let delta = f64::from(b.abs_diff(100)).min(100.0) / 100.0;
        let top = Rgba8::opaque(tone, tone, tone).with_alpha_f64(delta * 0.25);
        let bottom = Rgba8::opaque(tone, tone, tone).with_alpha_f64(0.0);

        let rect = self.fr(0.0, 0.0, 1.0, 1.0);
        self.fill(rect, Paint::LinearV { top, bottom }, Layer::Lighting);
    }

    /// Layer 2: opaque wall fill, room border, optional texture overlay.
    fn walls(&mut self) {
        let full = self.fr(0.0, 0.0, 1.0, 1.0);
        let lit = self.lit(self.state.wall_color).to_rgba8();
        self.fill_solid(full, lit, Layer::Walls);
        self.stroke(
            full,
            WALL_BORDER.to_rgba8(),
            2.0 * self.scale.sx,
            Layer::Walls,
        );

        // Texture covers the wall area above the floor line.
        let region = self.fr(0.0, 0.0, 1.0, FLOOR_TOP);
        let opacity = self.texture_opacity();
        let scale = self.scale;
        match self.state.wall_texture {
            WallTexture::Wood => {
                texture::wood_grain(&mut self.ops, region, scale, opacity, &mut self.rng, Layer::Walls);
            }
            WallTexture::Tile => {
                texture::tile_grid(&mut self.ops, region, scale, opacity, Layer::Walls);
            }
            WallTexture::Marble => {
                texture::marble_veining(&mut self.ops, region, scale, opacity, &mut self.rng, Layer::Walls);
            }
            WallTexture::Paint => {
                texture::paint_stipple(&mut self.ops, region, scale, opacity, &mut self.rng, Layer::Walls);
            }
            WallTexture::None | WallTexture::Unknown => {}
        }
    }

    /// Layer 3: floor gradient plus a 16x3 tile grid.
    fn floor(&mut self) {
        let band = self.fr(0.0, FLOOR_TOP, 1.0, 1.0);

        let Some(spec) = materials::flooring_spec(self.state.flooring) else {
            // Fail closed: flat neutral fill, no grid.
            self.fill_solid(band, FLOOR_FALLBACK.to_rgba8(), Layer::Floor);
            return;
        };

        self.fill(
            band,
            Paint::LinearV {
                top: spec.top.to_rgba8(),
                bottom: spec.bottom.to_rgba8(),
            },
            Layer::Floor,
        );

        let line = Rgba8::opaque(0, 0, 0).with_alpha_f64(0.1);
        let cols = 16usize;
        let rows = 3usize;
        let tile_w = band.width() / cols as f64;
        let tile_h = band.height() / rows as f64;
        for row in 0..rows {
            for col in 0..cols {
                let x = band.x0 + col as f64 * tile_w;
                let y = band.y0 + row as f64 * tile_h;
                self.stroke(
                    Rect::new(x, y, x + tile_w, y + tile_h),
                    line,
                    self.scale.sx,
                    Layer::Floor,
                );
            }
        }
    }

    /// Layer 4: two rows of three cabinet units.
    fn cabinets(&mut self) {
        for x0 in CABINET_XS {
            self.cabinet_unit(self.fr(x0, UPPER_ROW_TOP, x0 + CABINET_W, UPPER_ROW_BOTTOM));
        }
        for x0 in CABINET_XS {
            self.cabinet_unit(self.fr(x0, BASE_ROW_TOP, x0 + CABINET_W, BASE_ROW_BOTTOM));
        }
    }

    /// One cabinet unit: body, border, two doors, style detail, handles.
    fn cabinet_unit(&mut self, unit: Rect) {
        let body = self.lit(self.state.cabinet_color);
        let border = body.darken(0.35);
        let door = body.darken(0.08);
        let detail = body.darken(0.30);

        self.fill_solid(unit, body.to_rgba8(), Layer::Cabinets);
        self.stroke(unit, border.to_rgba8(), 2.0 * self.scale.sx, Layer::Cabinets);

        let pad = 0.01 * self.w();
        let door_w = (unit.width() - 3.0 * pad) / 2.0;
        let door_y0 = unit.y0 + pad;
        let door_y1 = unit.y1 - pad;
        let left = Rect::new(unit.x0 + pad, door_y0, unit.x0 + pad + door_w, door_y1);
        let right = Rect::new(unit.x1 - pad - door_w, door_y0, unit.x1 - pad, door_y1);

        self.fill_solid(left, door.to_rgba8(), Layer::Cabinets);
        self.fill_solid(right, door.to_rgba8(), Layer::Cabinets);

        match self.state.cabinet_style {
            CabinetStyle::Modern => {
                // Center split line across each door.
                for d in [left, right] {
                    let y = d.y0 + d.height() / 2.0;
                    self.line(
                        Point::new(d.x0, y),
                        Point::new(d.x1, y),
                        detail.to_rgba8(),
                        self.scale.sx,
                        Layer::Cabinets,
                    );
                }
            }
            CabinetStyle::Traditional => {
                // Raised-panel inset frame.
                for d in [left, right] {
                    self.stroke(
                        d.inset(-pad * 0.6),
                        detail.to_rgba8(),
                        self.scale.sx,
                        Layer::Cabinets,
                    );
                }
            }
            CabinetStyle::Contemporary | CabinetStyle::Transitional | CabinetStyle::Unknown => {}
        }

        // Handles on the inner-facing door edges, at mid-height.
        let handle_w = 0.004 * self.w();
        let handle_h = 0.025 * self.h();
        let hy = unit.y0 + unit.height() / 2.0 - handle_h / 2.0;
        for x in [left.x1 - 2.0 * handle_w, right.x0 + handle_w] {
            self.fill_solid(
                Rect::new(x, hy, x + handle_w, hy + handle_h),
                HANDLE_SILVER.to_rgba8(),
                Layer::Cabinets,
            );
        }
    }

    /// Layer 5: countertop band with material texture and edge shadow.
    fn countertop(&mut self) {
        let band = self.fr(RUN_X0, FLOOR_TOP, RUN_X1, COUNTER_BOTTOM);
        let spec = materials::countertop_spec(self.state.countertop);
        let base = spec.map_or(COUNTERTOP_FALLBACK, |s| s.midtone());

        self.fill_solid(band, base.to_rgba8(), Layer::Countertop);
        // Drop shadow along the counter lip.
        self.fill_solid(
            Rect::new(band.x0, band.y1 - 3.0 * self.scale.sy, band.x1, band.y1),
            Rgba8::opaque(0, 0, 0).with_alpha_f64(0.1),
            Layer::Countertop,
        );

        let Some(spec) = spec else {
            return;
        };
        let scale = self.scale;
        match self.state.countertop {
            CountertopMaterial::Granite => {
                texture::granite_speckle(
                    &mut self.ops,
                    band,
                    scale,
                    spec.colors[0].to_rgba8(),
                    spec.colors[2].to_rgba8(),
                    &mut self.rng,
                    Layer::Countertop,
                );
            }
            CountertopMaterial::Marble => {
                texture::veins(
                    &mut self.ops,
                    band,
                    scale,
                    8,
                    10.0,
                    40.0,
                    0.1,
                    0.3,
                    spec.colors[2].to_rgba8(),
                    &mut self.rng,
                    Layer::Countertop,
                );
            }
            CountertopMaterial::Quartz | CountertopMaterial::Wood | CountertopMaterial::Unknown => {}
        }
    }

    /// Layer 6: backsplash band between the upper cabinets and the counter.
    fn backsplash(&mut self) {
        if !self.state.backsplash_enabled {
            return;
        }

        let band = self.fr(RUN_X0, UPPER_ROW_BOTTOM, RUN_X1, FLOOR_TOP);
        self.fill_solid(band, self.state.backsplash_color.to_rgba8(), Layer::Backsplash);

        let seam = self.state.backsplash_color.darken(0.25).to_rgba8();
        let scale = self.scale;
        match self.state.backsplash {
            BacksplashPattern::Subway => {
                texture::subway_grid(&mut self.ops, band, scale, seam, Layer::Backsplash);
            }
            BacksplashPattern::Herringbone => {
                texture::herringbone(&mut self.ops, band, scale, seam, Layer::Backsplash);
            }
            BacksplashPattern::Glass => {
                texture::glass_overlay(&mut self.ops, band, scale, seam, Layer::Backsplash);
            }
            BacksplashPattern::Marble => {
                texture::marble_grid(&mut self.ops, band, scale, seam, &mut self.rng, Layer::Backsplash);
            }
            BacksplashPattern::Unknown => {}
        }
    }

    /// Layer 7: dishwasher, stove, refrigerator, left to right.
    fn appliances(&mut self) {
        self.dishwasher();
        self.stove();
        self.fridge();
    }

    fn dishwasher(&mut self) {
        let body = self.fr(0.44, BASE_ROW_TOP, 0.55, BASE_ROW_BOTTOM);
        self.fill_solid(body, self.lit(DISHWASHER_BODY).to_rgba8(), Layer::Appliances);

        // Control dots along the top edge.
        let r = 0.003 * self.w();
        let y = body.y0 + 0.015 * self.h();
        for i in 0..4 {
            let x = body.x0 + 0.015 * self.w() + i as f64 * 0.02 * self.w();
            self.ops.push(DrawOp::FillPath {
                path: texture::circle_path(Point::new(x, y), r),
                color: Rgba8::opaque(0x1a, 0x1a, 0x1a),
                layer: Layer::Appliances,
            });
        }
    }

    fn stove(&mut self) {
        let body = self.fr(0.56, 0.72, 0.70, BASE_ROW_BOTTOM);
        self.fill_solid(body, self.lit(STOVE_BODY).to_rgba8(), Layer::Appliances);

        // 2x2 burners on the cooktop.
        let r = 0.008 * self.w();
        for (ix, iy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let x = self.w() * (0.60 + f64::from(ix) * 0.06);
            let y = self.h() * (0.74 + f64::from(iy) * 0.04);
            self.ops.push(DrawOp::FillPath {
                path: texture::circle_path(Point::new(x, y), r),
                color: Rgba8::opaque(0x1a, 0x1a, 0x1a),
                layer: Layer::Appliances,
            });
        }
    }

    fn fridge(&mut self) {
        let body = self.fr(0.80, 0.58, 0.94, BASE_ROW_BOTTOM);
        self.fill_solid(body, self.lit(FRIDGE_BODY).to_rgba8(), Layer::Appliances);
        self.stroke(
            body,
            Rgba8::opaque(0x22, 0x22, 0x22),
            2.0 * self.scale.sx,
            Layer::Appliances,
        );
        // Door handle.
        self.fill_solid(
            self.fr(0.808, 0.62, 0.813, 0.72),
            HANDLE_SILVER.to_rgba8(),
            Layer::Appliances,
        );
    }

    /// Layer 8: center island, exactly two ops (body, countertop cap).
    fn island(&mut self) {
        if !self.state.island_enabled {
            return;
        }

        let body = self.lit(self.state.cabinet_color).darken(0.10);
        let cap = materials::countertop_spec(self.state.countertop)
            .map_or(COUNTERTOP_FALLBACK, |s| s.midtone());

        self.fill_solid(self.fr(0.35, 0.80, 0.65, 0.93), body.to_rgba8(), Layer::Island);
        self.fill_solid(self.fr(0.34, 0.775, 0.66, 0.80), cap.to_rgba8(), Layer::Island);
    }

    /// Layer 9: radial vignette closing the scene.
    fn accent(&mut self) {
        let full = self.fr(0.0, 0.0, 1.0, 1.0);
        self.fill(
            full,
            Paint::Radial {
                center: Rgba8::TRANSPARENT,
                edge: Rgba8::opaque(0, 0, 0).with_alpha_f64(0.10),
            },
            Layer::Accent,
        );
    }
}
