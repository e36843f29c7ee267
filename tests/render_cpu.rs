//! CPU backend pixel-level checks.

use galley::{
    Canvas, CpuRenderer, DesignState, DrawOp, Layer, Paint, RenderBackend, Rgba8, ScenePlan,
    plan_scene,
};

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn full_canvas_plan(canvas: Canvas, ops: Vec<DrawOp>) -> ScenePlan {
    ScenePlan { canvas, ops }
}

#[test]
fn solid_fill_covers_every_pixel() {
    let canvas = Canvas::new(16, 16);
    let plan = full_canvas_plan(
        canvas,
        vec![DrawOp::FillRect {
            rect: kurbo::Rect::new(0.0, 0.0, 16.0, 16.0),
            paint: Paint::Solid(Rgba8::opaque(200, 40, 10)),
            layer: Layer::Walls,
        }],
    );

    let frame = CpuRenderer::new().render_plan(&plan).unwrap();
    assert_eq!(frame.data.len(), 16 * 16 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [200, 40, 10, 255]);
    }
}

#[test]
fn vertical_gradient_runs_top_to_bottom() {
    let canvas = Canvas::new(8, 64);
    let plan = full_canvas_plan(
        canvas,
        vec![DrawOp::FillRect {
            rect: kurbo::Rect::new(0.0, 0.0, 8.0, 64.0),
            paint: Paint::LinearV {
                top: Rgba8::opaque(0, 0, 0),
                bottom: Rgba8::opaque(255, 255, 255),
            },
            layer: Layer::Floor,
        }],
    );

    let frame = CpuRenderer::new().render_plan(&plan).unwrap();
    let px = |x: usize, y: usize| -> &[u8] {
        let idx = (y * 8 + x) * 4;
        &frame.data[idx..idx + 4]
    };

    assert!(px(4, 1)[0] < 24, "top row should be near black");
    assert!(px(4, 62)[0] > 231, "bottom row should be near white");
    assert!(px(4, 12)[0] < px(4, 50)[0], "value must increase downward");
}

#[test]
fn stroke_rect_leaves_the_interior_untouched() {
    let canvas = Canvas::new(32, 32);
    let plan = full_canvas_plan(
        canvas,
        vec![
            DrawOp::FillRect {
                rect: kurbo::Rect::new(0.0, 0.0, 32.0, 32.0),
                paint: Paint::Solid(Rgba8::opaque(255, 255, 255)),
                layer: Layer::Walls,
            },
            DrawOp::StrokeRect {
                rect: kurbo::Rect::new(4.0, 4.0, 28.0, 28.0),
                color: Rgba8::opaque(0, 0, 0),
                width: 2.0,
                layer: Layer::Walls,
            },
        ],
    );

    let frame = CpuRenderer::new().render_plan(&plan).unwrap();
    let px = |x: usize, y: usize| -> u8 { frame.data[(y * 32 + x) * 4] };

    assert_eq!(px(16, 16), 255, "interior stays white");
    assert_eq!(px(16, 5), 0, "top edge is stroked");
    assert_eq!(px(5, 16), 0, "left edge is stroked");
    assert_eq!(px(16, 1), 255, "outside the rect stays white");
}

#[test]
fn default_scene_digest_is_stable_across_backends() {
    let plan = plan_scene(&DesignState::default(), Canvas::new(96, 72));

    let a = CpuRenderer::new().render_plan(&plan).unwrap();
    let mut reused = CpuRenderer::new();
    let b = reused.render_plan(&plan).unwrap();
    let c = reused.render_plan(&plan).unwrap();

    let d = digest_u64(&a.data);
    assert_eq!(d, digest_u64(&b.data));
    assert_eq!(d, digest_u64(&c.data));
}

#[test]
fn different_seeds_render_different_textured_frames() {
    let mut backend = CpuRenderer::new();
    let mut textured = |seed: u64| -> Vec<u8> {
        let state = DesignState {
            wall_texture: galley::WallTexture::Marble,
            seed,
            ..DesignState::default()
        };
        backend
            .render_plan(&plan_scene(&state, Canvas::new(96, 72)))
            .unwrap()
            .data
    };

    let a = textured(1);
    let b = textured(1);
    let c = textured(2);
    assert_eq!(digest_u64(&a), digest_u64(&b));
    assert_ne!(digest_u64(&a), digest_u64(&c));
}

#[test]
fn empty_plan_renders_an_empty_frame() {
    let plan = plan_scene(&DesignState::default(), Canvas::new(0, 32));
    let frame = CpuRenderer::new().render_plan(&plan).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.width, 0);
}
