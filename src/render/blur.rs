use crate::foundation::error::{CurlicueError, CurlicueResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Separable gaussian blur over a premultiplied RGBA8 buffer.
///
/// The kernel is Q16 fixed-point and normalized to sum exactly to one, so a
/// constant image is a fixed point of the blur. Edges clamp.
pub(crate) fn gaussian_blur(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> CurlicueResult<Vec<u8>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CurlicueError::evaluation("blur buffer size overflow"))?;
    if src.len() != expected {
        return Err(CurlicueError::evaluation(
            "gaussian_blur expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected];
    let mut out = vec![0u8; expected];

    separable_pass(src, &mut tmp, width, height, &kernel, Axis::Horizontal);
    separable_pass(&tmp, &mut out, width, height, &kernel, Axis::Vertical);
    Ok(out)
}

fn kernel_q16(radius: u32, sigma: f32) -> CurlicueResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CurlicueError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;

    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(CurlicueError::evaluation("gaussian kernel sum is zero"));
    }

    // Quantize, then push any rounding residue into the center tap so the
    // kernel sums to exactly 1.0 in Q16.
    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536i64 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let center = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = center as u32;
    }

    Ok(weights)
}

fn separable_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, kernel: &[u32], axis: Axis) {
    let radius = (kernel.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;

    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in kernel.iter().enumerate() {
                let offset = ki as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + offset).clamp(0, w - 1), y),
                    Axis::Vertical => (x, (y + offset).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for (c, slot) in acc.iter_mut().enumerate() {
                    *slot += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let idx = ((y * w + x) as usize) * 4;
            for (c, &total) in acc.iter().enumerate() {
                dst[idx + c] = q16_to_u8(total);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
