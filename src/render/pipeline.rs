use crate::compile::plan::compile_scene;
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::Fps;
use crate::foundation::error::CurlicueResult;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::model::Scene;
use crate::scene::state::ToggleState;

/// Evaluate, compile, and render one frame.
///
/// The scene and state are read-only; the same inputs always produce the same
/// pixels.
#[tracing::instrument(skip(scene, state, backend))]
pub fn render_scene(
    scene: &Scene,
    state: &ToggleState,
    now_s: f64,
    backend: &mut dyn RenderBackend,
) -> CurlicueResult<FrameRGBA> {
    let eval = Evaluator::eval_scene(scene, state, now_s)?;
    let plan = compile_scene(&eval)?;
    backend.render_plan(&plan)
}

/// Render `frame_count` frames at `fps`, feeding each finished frame to the
/// sink in order.
#[tracing::instrument(skip(scene, state, backend, sink))]
pub fn render_frames(
    scene: &Scene,
    state: &ToggleState,
    fps: Fps,
    frame_count: u64,
    backend: &mut dyn RenderBackend,
    mut sink: impl FnMut(u64, FrameRGBA) -> CurlicueResult<()>,
) -> CurlicueResult<()> {
    for frame in 0..frame_count {
        let now_s = fps.frame_to_secs(frame);
        let rgba = render_scene(scene, state, now_s, backend)?;
        sink(frame, rgba)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
