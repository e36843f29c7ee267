use crate::foundation::core::Canvas;
use crate::foundation::error::GalleyResult;
use crate::scene::plan::ScenePlan;

/// One rendered frame, tightly packed RGBA8 rows.
///
/// `premultiplied` records the alpha convention of `data`; the CPU backend
/// always produces premultiplied output and [`crate::export`] unpremultiplies
/// before encoding.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` (empty for degenerate frames).
    pub data: Vec<u8>,
    /// Whether `data` carries premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Zero-byte frame for a non-drawable canvas.
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: Vec::new(),
            premultiplied: true,
        }
    }

    /// Whether the frame holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A rasterizer for [`ScenePlan`]s.
///
/// Backends may keep internal caches between calls but every call must fully
/// repaint: the returned frame depends only on the plan.
pub trait RenderBackend {
    /// Execute a plan into a frame.
    fn render_plan(&mut self, plan: &ScenePlan) -> GalleyResult<FrameRGBA>;
}
