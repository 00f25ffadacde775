use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::scene::model::EffectInstance;

#[derive(Clone, Copy, Debug, PartialEq)]
/// A parsed, typed effect.
pub enum Effect {
    /// Multiply the node's intrinsic opacity.
    OpacityMul {
        /// Multiplier, finite and >= 0.
        value: f32,
    },
    /// Gaussian blur of the node's rendered layer.
    Blur {
        /// Kernel radius in pixels.
        radius_px: u32,
        /// Gaussian sigma.
        sigma: f32,
    },
    /// Inner shadow: the node darkens toward its own edges, offset by a
    /// light direction.
    InnerShadow {
        /// Shadow blur radius in pixels.
        radius_px: u32,
        /// Gaussian sigma for the shadow blur.
        sigma: f32,
        /// Shadow strength in `[0, 1]`.
        opacity: f32,
        /// Horizontal shadow offset in pixels.
        dx: i32,
        /// Vertical shadow offset in pixels.
        dy: i32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Effects folded into the node's draw ops at compile time.
pub struct InlineFx {
    /// Accumulated opacity multiplier.
    pub opacity_mul: f32,
}

impl Default for InlineFx {
    fn default() -> Self {
        Self { opacity_mul: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Effects requiring their own render pass.
pub enum PassFx {
    /// Gaussian blur offscreen pass.
    Blur {
        /// Kernel radius in pixels.
        radius_px: u32,
        /// Gaussian sigma.
        sigma: f32,
    },
    /// Inner shadow, expanded by the compiler into silhouette, blur, and
    /// composite passes.
    InnerShadow {
        /// Shadow blur radius in pixels.
        radius_px: u32,
        /// Gaussian sigma.
        sigma: f32,
        /// Shadow strength in `[0, 1]`.
        opacity: f32,
        /// Horizontal shadow offset in pixels.
        dx: i32,
        /// Vertical shadow offset in pixels.
        dy: i32,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Normalized effect pipeline for one node.
pub struct FxPipeline {
    /// Inline effects.
    pub inline: InlineFx,
    /// Pass effects in application order.
    pub passes: Vec<PassFx>,
}

/// Parse one effect instance into a typed effect.
pub fn parse_effect(inst: &EffectInstance) -> CurlicueResult<Effect> {
    let kind = inst.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(CurlicueError::validation("effect kind must be non-empty"));
    }

    match kind.as_str() {
        "opacitymul" | "opacity_mul" | "opacity-mul" => {
            let value = get_f32(&inst.params, "value")?;
            if !value.is_finite() || value < 0.0 {
                return Err(CurlicueError::validation(
                    "OpacityMul.value must be finite and >= 0",
                ));
            }
            Ok(Effect::OpacityMul { value })
        }
        "blur" => {
            let radius_px = get_u32(&inst.params, "radius_px")?;
            if radius_px > 256 {
                return Err(CurlicueError::validation("Blur.radius_px must be <= 256"));
            }
            let sigma = sigma_for(&inst.params, radius_px)?;
            Ok(Effect::Blur { radius_px, sigma })
        }
        "innershadow" | "inner_shadow" | "inner-shadow" => {
            let radius_px = get_u32(&inst.params, "radius_px")?;
            if radius_px > 256 {
                return Err(CurlicueError::validation(
                    "InnerShadow.radius_px must be <= 256",
                ));
            }
            let sigma = sigma_for(&inst.params, radius_px)?;
            let opacity = match inst.params.get("opacity") {
                Some(v) => {
                    let o = v.as_f64().ok_or_else(|| {
                        CurlicueError::validation("InnerShadow.opacity must be a number")
                    })?;
                    if !o.is_finite() {
                        return Err(CurlicueError::validation(
                            "InnerShadow.opacity must be finite",
                        ));
                    }
                    o.clamp(0.0, 1.0) as f32
                }
                None => 0.5,
            };
            let dx = get_i32_or(&inst.params, "dx", 0)?;
            let dy = get_i32_or(&inst.params, "dy", 0)?;
            Ok(Effect::InnerShadow {
                radius_px,
                sigma,
                opacity,
                dx,
                dy,
            })
        }
        _ => Err(CurlicueError::validation(format!(
            "unknown effect kind '{kind}'"
        ))),
    }
}

/// Normalize an effect list into inline and pass components.
///
/// Zero-radius blurs and zero-opacity inner shadows are no-ops and dropped.
pub fn normalize_effects(effects: &[Effect]) -> FxPipeline {
    let mut inline = InlineFx::default();
    let mut passes = Vec::<PassFx>::new();

    for e in effects {
        match *e {
            Effect::OpacityMul { value } => inline.opacity_mul *= value,
            Effect::Blur { radius_px, sigma } => {
                if radius_px == 0 {
                    continue;
                }
                passes.push(PassFx::Blur { radius_px, sigma });
            }
            Effect::InnerShadow {
                radius_px,
                sigma,
                opacity,
                dx,
                dy,
            } => {
                if opacity <= 0.0 {
                    continue;
                }
                passes.push(PassFx::InnerShadow {
                    radius_px,
                    sigma,
                    opacity,
                    dx,
                    dy,
                });
            }
        }
    }

    if !inline.opacity_mul.is_finite() || inline.opacity_mul < 0.0 {
        inline.opacity_mul = 0.0;
    }

    FxPipeline { inline, passes }
}

/// Shorthand constructor for a blur instance.
pub fn blur(radius_px: u32) -> EffectInstance {
    EffectInstance {
        kind: "blur".to_string(),
        params: serde_json::json!({ "radius_px": radius_px }),
    }
}

/// Shorthand constructor for an inner shadow instance.
pub fn inner_shadow(radius_px: u32, opacity: f64, dx: i32, dy: i32) -> EffectInstance {
    EffectInstance {
        kind: "inner_shadow".to_string(),
        params: serde_json::json!({
            "radius_px": radius_px,
            "opacity": opacity,
            "dx": dx,
            "dy": dy,
        }),
    }
}

fn sigma_for(params: &serde_json::Value, radius_px: u32) -> CurlicueResult<f32> {
    match params.get("sigma") {
        Some(v) => {
            let s = v
                .as_f64()
                .ok_or_else(|| CurlicueError::validation("effect sigma must be a number"))?
                as f32;
            if !s.is_finite() || s <= 0.0 {
                return Err(CurlicueError::validation(
                    "effect sigma must be finite and > 0",
                ));
            }
            Ok(s)
        }
        None => Ok(((radius_px as f32) / 2.0).max(0.5)),
    }
}

fn get_u32(obj: &serde_json::Value, key: &str) -> CurlicueResult<u32> {
    let Some(v) = obj.get(key) else {
        return Err(CurlicueError::validation(format!(
            "missing effect param '{key}'"
        )));
    };
    let Some(n) = v.as_u64() else {
        return Err(CurlicueError::validation(format!(
            "effect param '{key}' must be an integer"
        )));
    };
    u32::try_from(n)
        .map_err(|_| CurlicueError::validation(format!("effect param '{key}' is out of range")))
}

fn get_f32(obj: &serde_json::Value, key: &str) -> CurlicueResult<f32> {
    let Some(v) = obj.get(key) else {
        return Err(CurlicueError::validation(format!(
            "missing effect param '{key}'"
        )));
    };
    let Some(n) = v.as_f64() else {
        return Err(CurlicueError::validation(format!(
            "effect param '{key}' must be a number"
        )));
    };
    let n = n as f32;
    if !n.is_finite() {
        return Err(CurlicueError::validation(format!(
            "effect param '{key}' must be finite"
        )));
    }
    Ok(n)
}

fn get_i32_or(obj: &serde_json::Value, key: &str, default: i32) -> CurlicueResult<i32> {
    let Some(v) = obj.get(key) else {
        return Ok(default);
    };
    let Some(n) = v.as_i64() else {
        return Err(CurlicueError::validation(format!(
            "effect param '{key}' must be an integer"
        )));
    };
    i32::try_from(n)
        .map_err(|_| CurlicueError::validation(format!("effect param '{key}' is out of range")))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fx.rs"]
mod tests;
