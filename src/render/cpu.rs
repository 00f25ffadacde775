use crate::compile::plan::{
    CompositeOp, CompositePass, DrawOp, OffscreenFx, OffscreenPass, ScenePass, SurfaceDesc,
    SurfaceId,
};
use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::render::backend::{FrameRGBA, PassBackend, RenderBackend};
use crate::render::{blur, composite, raster};

#[derive(Clone, Debug)]
struct Surface {
    desc: SurfaceDesc,
    data: Vec<u8>,
}

/// Software rasterizing backend.
///
/// Surfaces are plain premultiplied RGBA8 buffers; all work happens
/// synchronously on the calling thread.
#[derive(Debug, Default)]
pub struct CpuBackend {
    surfaces: Vec<Option<Surface>>,
}

impl CpuBackend {
    /// New backend with no allocated surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    fn surface(&self, id: SurfaceId) -> CurlicueResult<&Surface> {
        self.surfaces
            .get(id.0 as usize)
            .and_then(|s| s.as_ref())
            .ok_or_else(|| CurlicueError::evaluation(format!("unknown surface {}", id.0)))
    }

    fn surface_mut(&mut self, id: SurfaceId) -> CurlicueResult<&mut Surface> {
        self.surfaces
            .get_mut(id.0 as usize)
            .and_then(|s| s.as_mut())
            .ok_or_else(|| CurlicueError::evaluation(format!("unknown surface {}", id.0)))
    }
}

impl PassBackend for CpuBackend {
    fn ensure_surface(&mut self, id: SurfaceId, desc: &SurfaceDesc) -> CurlicueResult<()> {
        let len = (desc.width as usize)
            .checked_mul(desc.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| CurlicueError::evaluation("surface size overflow"))?;

        let idx = id.0 as usize;
        if self.surfaces.len() <= idx {
            self.surfaces.resize(idx + 1, None);
        }
        match &mut self.surfaces[idx] {
            Some(surface) if surface.desc == *desc => {
                surface.data.fill(0);
            }
            slot => {
                *slot = Some(Surface {
                    desc: desc.clone(),
                    data: vec![0u8; len],
                });
            }
        }
        Ok(())
    }

    fn exec_scene(&mut self, pass: &ScenePass) -> CurlicueResult<()> {
        let (width, height) = {
            let surface = self.surface(pass.target)?;
            (surface.desc.width, surface.desc.height)
        };

        let mut ordered: Vec<&DrawOp> = pass.ops.iter().collect();
        ordered.sort_by_key(|op| match op {
            DrawOp::FillPath { z, .. } | DrawOp::StrokePath { z, .. } => *z,
        });

        let surface = self.surface_mut(pass.target)?;
        if pass.clear_to_transparent {
            surface.data.fill(0);
        }

        for op in ordered {
            match op {
                DrawOp::FillPath {
                    path,
                    transform,
                    paint,
                    opacity,
                    ..
                } => raster::fill_path(
                    &mut surface.data,
                    width,
                    height,
                    path,
                    *transform,
                    paint,
                    *opacity,
                )?,
                DrawOp::StrokePath {
                    path,
                    transform,
                    width: stroke_width,
                    color,
                    opacity,
                    ..
                } => raster::stroke_path(
                    &mut surface.data,
                    width,
                    height,
                    path,
                    *transform,
                    *stroke_width,
                    *color,
                    *opacity,
                )?,
            }
        }
        Ok(())
    }

    fn exec_offscreen(&mut self, pass: &OffscreenPass) -> CurlicueResult<()> {
        let (src, width, height) = {
            let input = self.surface(pass.input)?;
            (input.data.clone(), input.desc.width, input.desc.height)
        };

        let result = match pass.fx {
            OffscreenFx::Blur { radius_px, sigma } => {
                blur::gaussian_blur(&src, width, height, radius_px, sigma)?
            }
        };

        let output = self.surface_mut(pass.output)?;
        if output.desc.width != width || output.desc.height != height {
            return Err(CurlicueError::evaluation(
                "offscreen pass surfaces must have matching dimensions",
            ));
        }
        output.data = result;
        Ok(())
    }

    fn exec_composite(&mut self, pass: &CompositePass) -> CurlicueResult<()> {
        for op in &pass.ops {
            match op {
                CompositeOp::Over { src, opacity } => {
                    let data = self.surface(*src)?.data.clone();
                    let target = self.surface_mut(pass.target)?;
                    composite::over_in_place(&mut target.data, &data, *opacity)?;
                }
                CompositeOp::InnerShadow {
                    content,
                    silhouette,
                    blurred,
                    opacity,
                    dx,
                    dy,
                } => {
                    let content = self.surface(*content)?.data.clone();
                    let silhouette = self.surface(*silhouette)?.data.clone();
                    let blurred = self.surface(*blurred)?.data.clone();
                    let target = self.surface_mut(pass.target)?;
                    let (width, height) = (target.desc.width, target.desc.height);
                    composite::inner_shadow_over(
                        &mut target.data,
                        &content,
                        &silhouette,
                        &blurred,
                        width,
                        height,
                        *opacity,
                        *dx,
                        *dy,
                    )?;
                }
            }
        }
        Ok(())
    }

    fn readback_rgba8(&mut self, surface: SurfaceId) -> CurlicueResult<FrameRGBA> {
        let surface = self.surface(surface)?;
        Ok(FrameRGBA {
            width: surface.desc.width,
            height: surface.desc.height,
            data: surface.data.clone(),
            premultiplied: true,
        })
    }
}

impl RenderBackend for CpuBackend {}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
