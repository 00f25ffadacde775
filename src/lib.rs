//! Curlicue is a declarative decorative-shape composition and animation engine.
//!
//! It renders decorative vector shapes (hearts, squishy toggles, inner-shadowed
//! cards, juxtaposed ornaments) by composing a layout-guide coordinate system,
//! cubic-Bezier outline construction, and progress-driven shape morphing, then
//! rasterizing the result on a CPU backend.
//!
//! # Pipeline overview
//!
//! 1. **Model**: a [`Scene`] describes shape nodes, placement, paints, and
//!    effects; [`ToggleState`] owns the only mutable data (the on/off boolean
//!    and its in-flight transition).
//! 2. **Evaluate**: `Scene + ToggleState + time -> EvaluatedScene`. Rects are
//!    resolved (including juxtaposed placements), progress is eased per node,
//!    outlines are rebuilt from scratch.
//! 3. **Compile**: `EvaluatedScene -> RenderPlan`, backend-agnostic passes
//!    over explicit surfaces; blur and inner shadow expand into offscreen and
//!    composite passes.
//! 4. **Render**: `RenderPlan -> FrameRGBA` on the CPU backend.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure by default**: shapes are pure functions of `(rect, progress)`;
//!   evaluation and compilation are deterministic for a given input.
//! - **Exact resting states**: progress 0 and 1 reproduce the two resting
//!   outlines bit for bit.
//! - **Premultiplied RGBA8** end to end: renderers output premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod effects;
mod eval;
mod foundation;
mod layout;
mod path;
mod render;
mod scene;
mod shapes;

/// Named demo scenes mirroring the original harness views.
pub mod demos {
    pub use crate::scene::demos::{heart, inner_shadow_gallery, juxtaposed, squishy_toggle};
}

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::tween::Tween;
pub use compile::plan::{
    CompositeOp, CompositePass, DrawOp, OffscreenFx, OffscreenPass, Pass, PixelFormat, RenderPlan,
    ScenePass, SurfaceDesc, SurfaceId, compile_scene,
};
pub use effects::fx::{
    Effect, FxPipeline, InlineFx, PassFx, blur, inner_shadow, normalize_effects, parse_effect,
};
pub use eval::evaluator::{EvaluatedNode, EvaluatedScene, Evaluator, ResolvedPaint};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, Point, Rect, RectAnchors, Rgba8Premul, Size, UnitPoint, Vec2,
};
pub use foundation::error::{CurlicueError, CurlicueResult};
pub use layout::guide::{GuideAxis, GuideConfig, LayoutGuide};
pub use layout::juxtapose::{
    Alignment, Edge, juxtaposed_rect, juxtaposed_rect_edge, signed_spacing,
};
pub use path::outline::{CompassPoint, CurveTo, Marker, MarkerKind, Outline, OutlineBuilder};
pub use render::backend::{
    BackendKind, FrameRGBA, PassBackend, RenderBackend, create_backend, execute_plan,
};
pub use render::cpu::CpuBackend;
pub use render::pipeline::{render_frames, render_scene};
pub use scene::dsl::{NodeBuilder, SceneBuilder};
pub use scene::model::{
    EffectInstance, GradientStop, Node, OffsetSpec, Paint, Placement, ProgressBinding,
    ProgressSource, Scene, Stroke,
};
pub use scene::state::{Event, ToggleState};
pub use shapes::{
    Circle, Heart, PathShape, RoundedRect, Sash, ShapeKind, ToggleFrame, ToggleStateIcon,
};
