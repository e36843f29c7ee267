//! Interactive design session: one state, one canvas, one renderer.

use std::path::Path;

use crate::design::state::{DesignPatch, DesignState};
use crate::design::suggest::Suggestion;
use crate::export;
use crate::foundation::core::Canvas;
use crate::foundation::error::{GalleyError, GalleyResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::CpuRenderer;
use crate::scene::compose::plan_scene;
use crate::scene::plan::ScenePlan;

/// Owns the mutable state of one visualizer instance.
///
/// The session is the intended entry point for UI callers: mutate through
/// [`DesignSession::apply_patch`] (which validates before committing) and
/// repaint with [`DesignSession::render`]. The renderer's paint caches live
/// for the session, so repeated repaints of similar scenes stay cheap.
pub struct DesignSession {
    state: DesignState,
    canvas: Canvas,
    backend: CpuRenderer,
}

impl DesignSession {
    /// Session with default state on the given canvas.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            state: DesignState::default(),
            canvas,
            backend: CpuRenderer::new(),
        }
    }

    /// Session with an explicit starting state, validated up front.
    pub fn with_state(state: DesignState, canvas: Canvas) -> GalleyResult<Self> {
        state.validate()?;
        Ok(Self {
            state,
            canvas,
            backend: CpuRenderer::new(),
        })
    }

    /// Current design state.
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    /// Current canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Merge a patch, validating the result before committing.
    ///
    /// On error the session state is unchanged.
    pub fn apply_patch(&mut self, patch: &DesignPatch) -> GalleyResult<()> {
        let mut next = self.state.clone();
        next.apply(patch);
        next.validate()?;
        self.state = next;
        Ok(())
    }

    /// Apply a suggestion preset.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) -> GalleyResult<()> {
        self.apply_patch(&suggestion.patch)
    }

    /// Restore the default state, keeping the canvas and renderer.
    pub fn reset(&mut self) {
        self.state = DesignState::default();
    }

    /// Change the target canvas; the next plan lays out against it.
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// Compose the scene for the current state.
    pub fn plan(&self) -> ScenePlan {
        plan_scene(&self.state, self.canvas)
    }

    /// Compose and rasterize one frame.
    #[tracing::instrument(level = "info", skip_all)]
    pub fn render(&mut self) -> GalleyResult<FrameRGBA> {
        let plan = self.plan();
        self.backend.render_plan(&plan)
    }

    /// Render the current state and write it as a PNG snapshot.
    pub fn export_png(&mut self, path: &Path) -> GalleyResult<()> {
        let frame = self.render()?;
        export::write_png(&frame, path)
    }

    /// Replace the state from a JSON document.
    pub fn load_state_json(&mut self, text: &str) -> GalleyResult<()> {
        let state: DesignState = serde_json::from_str(text)
            .map_err(|e| GalleyError::serde(format!("parse design state: {e}")))?;
        state.validate()?;
        self.state = state;
        Ok(())
    }

    /// Serialize the state as a JSON document.
    pub fn state_json(&self) -> GalleyResult<String> {
        serde_json::to_string_pretty(&self.state)
            .map_err(|e| GalleyError::serde(format!("serialize design state: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::color::Color;
    use crate::design::suggest::suggestions;
    use crate::scene::plan::Layer;

    fn session() -> DesignSession {
        DesignSession::new(Canvas::new(160, 120))
    }

    #[test]
    fn starts_with_defaults() {
        let s = session();
        assert_eq!(*s.state(), DesignState::default());
        assert_eq!(s.canvas(), Canvas::new(160, 120));
    }

    #[test]
    fn invalid_patch_is_rejected_without_side_effects() {
        let mut s = session();
        let patch = DesignPatch {
            brightness: Some(999),
            wall_color: Some(Color::rgb(1, 2, 3)),
            ..DesignPatch::default()
        };
        assert!(s.apply_patch(&patch).is_err());
        // Neither field landed.
        assert_eq!(*s.state(), DesignState::default());
    }

    #[test]
    fn island_patch_adds_two_ops_to_the_plan() {
        let mut s = session();
        let before = s.plan();

        s.apply_patch(&DesignPatch {
            island_enabled: Some(true),
            ..DesignPatch::default()
        })
        .unwrap();
        let after = s.plan();

        assert_eq!(after.ops.len(), before.ops.len() + 2);
        assert_eq!(after.layer_len(Layer::Island), 2);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = session();
        s.apply_patch(&DesignPatch {
            wall_color: Some(Color::rgb(9, 9, 9)),
            island_enabled: Some(true),
            ..DesignPatch::default()
        })
        .unwrap();
        s.reset();
        assert_eq!(*s.state(), DesignState::default());
    }

    #[test]
    fn resize_relays_out_the_next_plan() {
        let mut s = session();
        let small = s.plan();
        s.resize(Canvas::new(320, 240));
        let large = s.plan();

        assert_eq!(small.ops.len(), large.ops.len());
        assert_eq!(large.canvas, Canvas::new(320, 240));
    }

    #[test]
    fn every_suggestion_applies() {
        for preset in suggestions() {
            let mut s = session();
            s.apply_suggestion(preset).unwrap();
        }
    }

    #[test]
    fn render_produces_a_frame() {
        let mut s = session();
        let frame = s.render().unwrap();
        assert_eq!(frame.width, 160);
        assert_eq!(frame.height, 120);
        assert_eq!(frame.data.len(), 160 * 120 * 4);
    }

    #[test]
    fn state_json_roundtrips() {
        let mut s = session();
        s.apply_patch(&DesignPatch {
            island_enabled: Some(true),
            seed: Some(7),
            ..DesignPatch::default()
        })
        .unwrap();

        let text = s.state_json().unwrap();
        let mut other = session();
        other.load_state_json(&text).unwrap();
        assert_eq!(other.state(), s.state());
    }

    #[test]
    fn malformed_state_json_is_an_error() {
        let mut s = session();
        assert!(s.load_state_json("{ not json").is_err());
        // Valid JSON with out-of-range values is rejected by validation.
        assert!(s.load_state_json(r#"{ "brightness": 5000 }"#).is_err());
    }
}
