use crate::compile::plan::{
    CompositePass, OffscreenPass, Pass, RenderPlan, ScenePass, SurfaceDesc, SurfaceId,
};
use crate::foundation::error::{CurlicueError, CurlicueResult};

#[derive(Clone, Debug)]
/// A finished frame: RGBA8 pixels, premultiplied alpha.
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel data, `width * height * 4` bytes, row-major.
    pub data: Vec<u8>,
    /// Always true for frames produced by this crate.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight (non-premultiplied) RGBA bytes, e.g. for PNG
    /// encoding.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a == 0 || a == 255 {
                continue;
            }
            for c in px.iter_mut().take(3) {
                let v = (u32::from(*c) * 255 + u32::from(a) / 2) / u32::from(a);
                *c = v.min(255) as u8;
            }
        }
        out
    }
}

/// A backend that knows how to execute individual plan passes.
pub trait PassBackend {
    /// Allocate or reuse the surface for `id`.
    fn ensure_surface(&mut self, id: SurfaceId, desc: &SurfaceDesc) -> CurlicueResult<()>;

    /// Execute a scene pass.
    fn exec_scene(&mut self, pass: &ScenePass) -> CurlicueResult<()>;

    /// Execute an offscreen post-processing pass.
    fn exec_offscreen(&mut self, pass: &OffscreenPass) -> CurlicueResult<()>;

    /// Execute a composite pass.
    fn exec_composite(&mut self, pass: &CompositePass) -> CurlicueResult<()>;

    /// Read a surface back as premultiplied RGBA8.
    fn readback_rgba8(&mut self, surface: SurfaceId) -> CurlicueResult<FrameRGBA>;
}

/// Execute a full plan on a pass backend.
pub fn execute_plan<B: PassBackend + ?Sized>(
    backend: &mut B,
    plan: &RenderPlan,
) -> CurlicueResult<FrameRGBA> {
    for (idx, desc) in plan.surfaces.iter().enumerate() {
        let id = SurfaceId(
            idx.try_into()
                .map_err(|_| CurlicueError::evaluation("surface id overflow"))?,
        );
        backend.ensure_surface(id, desc)?;
    }

    for pass in &plan.passes {
        match pass {
            Pass::Scene(p) => backend.exec_scene(p)?,
            Pass::Offscreen(p) => backend.exec_offscreen(p)?,
            Pass::Composite(p) => backend.exec_composite(p)?,
        }
    }

    backend.readback_rgba8(plan.final_surface)
}

/// A renderer: a pass backend plus whole-plan execution.
pub trait RenderBackend: PassBackend {
    /// Render a full plan into a frame.
    fn render_plan(&mut self, plan: &RenderPlan) -> CurlicueResult<FrameRGBA> {
        execute_plan(self, plan)
    }
}

#[derive(Clone, Copy, Debug)]
/// Available backend kinds.
pub enum BackendKind {
    /// Software rasterizer.
    Cpu,
}

/// Construct a render backend.
pub fn create_backend(kind: BackendKind) -> CurlicueResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
