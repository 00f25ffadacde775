use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::foundation::math::mul_div255_u8;

pub(crate) type PremulRgba8 = [u8; 4];

/// Premultiplied source-over with an extra opacity factor.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite `src` over `dst` pixelwise.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> CurlicueResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CurlicueError::evaluation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Draw `content` over `dst`, darkened toward the silhouette's edges.
///
/// For each covered pixel the shade is
/// `1 - mask * opacity * (1 - blurred_alpha(p - offset))`, which is 1 deep
/// inside the silhouette (where the blurred coverage saturates) and falls off
/// toward the edges, strongest on the side the offset points away from.
#[allow(clippy::too_many_arguments)]
pub(crate) fn inner_shadow_over(
    dst: &mut [u8],
    content: &[u8],
    silhouette: &[u8],
    blurred: &[u8],
    width: u32,
    height: u32,
    opacity: f32,
    dx: i32,
    dy: i32,
) -> CurlicueResult<()> {
    let expected = (width as usize) * (height as usize) * 4;
    if dst.len() != expected
        || content.len() != expected
        || silhouette.len() != expected
        || blurred.len() != expected
    {
        return Err(CurlicueError::evaluation(
            "inner_shadow_over expects equal-size rgba8 surfaces",
        ));
    }

    let opacity = opacity.clamp(0.0, 1.0);
    let w = width as i32;
    let h = height as i32;

    for y in 0..h {
        for x in 0..w {
            let idx = ((y * w + x) as usize) * 4;
            let mut px = [
                content[idx],
                content[idx + 1],
                content[idx + 2],
                content[idx + 3],
            ];

            let mask = silhouette[idx + 3];
            if mask > 0 && opacity > 0.0 {
                let sx = x - dx;
                let sy = y - dy;
                let b = if sx >= 0 && sx < w && sy >= 0 && sy < h {
                    blurred[((sy * w + sx) as usize) * 4 + 3]
                } else {
                    0
                };
                let shade = 1.0
                    - (f32::from(mask) / 255.0) * opacity * (1.0 - f32::from(b) / 255.0);
                for c in px.iter_mut().take(3) {
                    *c = ((f32::from(*c) * shade).round()).clamp(0.0, 255.0) as u8;
                }
            }

            let out = over([dst[idx], dst[idx + 1], dst[idx + 2], dst[idx + 3]], px, 1.0);
            dst[idx..idx + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
