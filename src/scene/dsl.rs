use std::collections::BTreeSet;

use crate::foundation::core::{Canvas, Rgba8Premul, Vec2};
use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::scene::model::{
    EffectInstance, Node, OffsetSpec, Paint, Placement, ProgressBinding, Scene, Stroke,
};
use crate::shapes::ShapeKind;

/// Validating builder for [`Scene`].
pub struct SceneBuilder {
    canvas: Canvas,
    background: Option<Rgba8Premul>,
    nodes: Vec<Node>,
    ids: BTreeSet<String>,
}

impl SceneBuilder {
    /// Start a scene for the given canvas.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: None,
            nodes: Vec::new(),
            ids: BTreeSet::new(),
        }
    }

    /// Set the background color.
    pub fn background(mut self, color: Rgba8Premul) -> Self {
        self.background = Some(color);
        self
    }

    /// Append a node; duplicate ids are rejected.
    pub fn node(mut self, node: Node) -> CurlicueResult<Self> {
        if !self.ids.insert(node.id.clone()) {
            return Err(CurlicueError::validation(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
        self.nodes.push(node);
        Ok(self)
    }

    /// Finish and validate the scene.
    pub fn build(self) -> CurlicueResult<Scene> {
        let scene = Scene {
            canvas: self.canvas,
            background: self.background,
            nodes: self.nodes,
        };
        scene.validate()?;
        Ok(scene)
    }
}

/// Validating builder for [`Node`].
pub struct NodeBuilder {
    id: String,
    shape: ShapeKind,
    placement: Placement,
    fill: Option<Paint>,
    stroke: Option<Stroke>,
    progress: ProgressBinding,
    offset: Option<OffsetSpec>,
    opacity: f64,
    effects: Vec<EffectInstance>,
    z: i32,
}

impl NodeBuilder {
    /// Start a node with an id and shape; placement defaults to `Fill`.
    pub fn new(id: impl Into<String>, shape: ShapeKind) -> Self {
        Self {
            id: id.into(),
            shape,
            placement: Placement::Fill,
            fill: None,
            stroke: None,
            progress: ProgressBinding::default(),
            offset: None,
            opacity: 1.0,
            effects: Vec::new(),
            z: 0,
        }
    }

    /// Set the placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the fill paint.
    pub fn fill(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    /// Set the stroke.
    pub fn stroke(mut self, width: f64, color: Rgba8Premul) -> Self {
        self.stroke = Some(Stroke { width, color });
        self
    }

    /// Set the progress binding.
    pub fn progress(mut self, binding: ProgressBinding) -> Self {
        self.progress = binding;
        self
    }

    /// Set the animated offset endpoints.
    pub fn offset(mut self, off: Vec2, on: Vec2) -> Self {
        self.offset = Some(OffsetSpec { off, on });
        self
    }

    /// Set the intrinsic opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Append an effect instance.
    pub fn effect(mut self, fx: EffectInstance) -> Self {
        self.effects.push(fx);
        self
    }

    /// Set the z-order.
    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Finish the node.
    pub fn build(self) -> CurlicueResult<Node> {
        if self.id.trim().is_empty() {
            return Err(CurlicueError::validation("node id must be non-empty"));
        }
        Ok(Node {
            id: self.id,
            shape: self.shape,
            placement: self.placement,
            fill: self.fill,
            stroke: self.stroke,
            progress: self.progress,
            offset: self.offset,
            opacity: self.opacity,
            effects: self.effects,
            z: self.z,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
