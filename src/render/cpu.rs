//! CPU rasterizer on `vello_cpu`.
//!
//! Solid fills map straight onto the sparse-strip pipeline. The two gradient
//! paints are rendered as cached pixmap images: the gradient is baked once per
//! (colors, size) key and reused across repaints, so interactive sessions pay
//! the per-pixel cost only when a color or the canvas size changes. Stroked
//! rects become four thin fills and lines become quad fills; the pipeline's
//! fill path is the only primitive this backend needs.

use std::collections::HashMap;

use crate::foundation::core::{BezPath, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{GalleyError, GalleyResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::plan::{DrawOp, Paint, ScenePlan};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct GradientKey {
    top: [u8; 4],
    bottom: [u8; 4],
    w: u32,
    h: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct RadialKey {
    center: [u8; 4],
    edge: [u8; 4],
    w: u32,
    h: u32,
}

/// The default (and only) backend: full software rasterization.
#[derive(Default)]
pub struct CpuRenderer {
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    radial_cache: HashMap<RadialKey, vello_cpu::Image>,
}

impl CpuRenderer {
    /// New renderer with empty paint caches.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for CpuRenderer {
    #[tracing::instrument(level = "debug", skip_all, fields(w = plan.canvas.width, h = plan.canvas.height, ops = plan.ops.len()))]
    fn render_plan(&mut self, plan: &ScenePlan) -> GalleyResult<FrameRGBA> {
        if !plan.canvas.is_drawable() {
            return Ok(FrameRGBA::empty(plan.canvas));
        }

        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| GalleyError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| GalleyError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        for op in &plan.ops {
            self.draw_op(&mut ctx, op)?;
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl CpuRenderer {
    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> GalleyResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect { rect, paint, .. } => match paint {
                Paint::Solid(c) => {
                    set_solid(ctx, *c);
                    ctx.fill_rect(&rect_to_cpu(*rect));
                }
                Paint::LinearV { top, bottom } => {
                    let (iw, ih) = paint_size(*rect);
                    let img = self.gradient_paint(*top, *bottom, iw, ih)?;
                    fill_rect_with_image(ctx, *rect, img);
                }
                Paint::Radial { center, edge } => {
                    let (iw, ih) = paint_size(*rect);
                    let img = self.radial_paint(*center, *edge, iw, ih)?;
                    fill_rect_with_image(ctx, *rect, img);
                }
            },
            DrawOp::StrokeRect {
                rect,
                color,
                width,
                ..
            } => {
                set_solid(ctx, *color);
                for edge in stroke_rect_edges(*rect, *width) {
                    ctx.fill_rect(&rect_to_cpu(edge));
                }
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
                ..
            } => {
                if let Some(quad) = line_quad(*from, *to, *width) {
                    set_solid(ctx, *color);
                    ctx.fill_path(&bezpath_to_cpu(&quad));
                }
            }
            DrawOp::FillPath { path, color, .. } => {
                set_solid(ctx, *color);
                ctx.fill_path(&bezpath_to_cpu(path));
            }
        }
        Ok(())
    }

    /// Vertical gradient baked into a cached pixmap image.
    fn gradient_paint(
        &mut self,
        top: Rgba8,
        bottom: Rgba8,
        w: u32,
        h: u32,
    ) -> GalleyResult<vello_cpu::Image> {
        let key = GradientKey {
            top: top.to_premul_bytes(),
            bottom: bottom.to_premul_bytes(),
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
        let h1 = (h.max(1) - 1) as f32;
        for y in 0..h {
            let t = if h1 <= 0.0 { 0.0 } else { (y as f32) / h1 };
            let c = lerp_premul(key.top, key.bottom, t);
            for x in 0..w {
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&c);
            }
        }

        let img = premul_bytes_to_image(&bytes, w, h)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    /// Radial gradient from the rect center to its corners, cached like
    /// [`Self::gradient_paint`].
    fn radial_paint(
        &mut self,
        center: Rgba8,
        edge: Rgba8,
        w: u32,
        h: u32,
    ) -> GalleyResult<vello_cpu::Image> {
        let key = RadialKey {
            center: center.to_premul_bytes(),
            edge: edge.to_premul_bytes(),
            w,
            h,
        };
        if let Some(img) = self.radial_cache.get(&key).cloned() {
            return Ok(img);
        }

        let cx = (w.max(1) - 1) as f32 / 2.0;
        let cy = (h.max(1) - 1) as f32 / 2.0;
        let max_d = (cx * cx + cy * cy).sqrt().max(1.0);

        let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
        for y in 0..h {
            for x in 0..w {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let t = ((dx * dx + dy * dy).sqrt() / max_d).min(1.0);
                let c = lerp_premul(key.center, key.edge, t);
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&c);
            }
        }

        let img = premul_bytes_to_image(&bytes, w, h)?;
        self.radial_cache.insert(key, img.clone());
        Ok(img)
    }
}

fn set_solid(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

/// Image paints are anchored at the origin, so gradient rects are drawn in a
/// translated frame.
fn fill_rect_with_image(ctx: &mut vello_cpu::RenderContext, rect: Rect, img: vello_cpu::Image) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((rect.x0, rect.y0)));
    ctx.set_paint(img);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, rect.width(), rect.height()));
}

fn paint_size(rect: Rect) -> (u32, u32) {
    let clamp = |v: f64| -> u32 { v.ceil().max(1.0) as u32 };
    (clamp(rect.width()), clamp(rect.height()))
}

fn lerp_premul(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let lerp = |x: u8, y: u8| -> u8 {
        (x as f32 + (y as f32 - x as f32) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    [
        lerp(a[0], b[0]),
        lerp(a[1], b[1]),
        lerp(a[2], b[2]),
        lerp(a[3], b[3]),
    ]
}

fn premul_bytes_to_image(bytes: &[u8], w: u32, h: u32) -> GalleyResult<vello_cpu::Image> {
    let wu: u16 = w
        .try_into()
        .map_err(|_| GalleyError::render("paint width exceeds u16"))?;
    let hu: u16 = h
        .try_into()
        .map_err(|_| GalleyError::render("paint height exceeds u16"))?;

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(w as usize * h as usize);
    for px in bytes.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, wu, hu, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// Outline as four thin fills, mitered at the corners.
fn stroke_rect_edges(rect: Rect, width: f64) -> [Rect; 4] {
    let w = width.max(0.0);
    [
        Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + w),
        Rect::new(rect.x0, rect.y1 - w, rect.x1, rect.y1),
        Rect::new(rect.x0, rect.y0 + w, rect.x0 + w, rect.y1 - w),
        Rect::new(rect.x1 - w, rect.y0 + w, rect.x1, rect.y1 - w),
    ]
}

/// Line segment as a filled quad; `None` for degenerate segments.
fn line_quad(from: Point, to: Point, width: f64) -> Option<BezPath> {
    let d = to - from;
    let len = d.hypot();
    if len <= 0.0 || width <= 0.0 {
        return None;
    }
    let n = Vec2::new(-d.y / len, d.x / len) * (width / 2.0);

    let mut path = BezPath::new();
    path.move_to(from + n);
    path.line_to(to + n);
    path.line_to(to - n);
    path.line_to(from - n);
    path.close_path();
    Some(path)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements().iter().copied() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
