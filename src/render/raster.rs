use kurbo::{CubicBez, ParamCurve, PathEl, QuadBez};

use crate::eval::evaluator::ResolvedPaint;
use crate::foundation::core::{Affine, BezPath, Point, Rgba8Premul};
use crate::foundation::error::{CurlicueError, CurlicueResult};
use crate::render::composite;

/// Vertical subsample rows per pixel row.
const SUBSAMPLES: u32 = 4;
/// Fixed subdivision steps per curve segment.
const CURVE_STEPS: usize = 24;

#[derive(Clone, Copy, Debug)]
struct EdgeSeg {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

/// Fill a closed path into a premultiplied RGBA8 buffer.
///
/// Nonzero winding rule; coverage is estimated from subsample scanlines with
/// exact horizontal span overlap. Open subpaths are closed implicitly, as fill
/// semantics require.
pub(crate) fn fill_path(
    dst: &mut [u8],
    width: u32,
    height: u32,
    path: &BezPath,
    transform: Affine,
    paint: &ResolvedPaint,
    opacity: f32,
) -> CurlicueResult<()> {
    check_buffer(dst.len(), width, height)?;
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return Ok(());
    }

    let edges = flatten_edges(path, transform);
    if edges.is_empty() {
        return Ok(());
    }

    let (min_y, max_y) = edges.iter().fold((f64::MAX, f64::MIN), |(lo, hi), e| {
        (lo.min(e.y0).min(e.y1), hi.max(e.y0).max(e.y1))
    });
    let y_start = (min_y.floor().max(0.0)) as u32;
    let y_end = (max_y.ceil().min(f64::from(height))).max(0.0) as u32;

    let w = width as usize;
    let mut coverage = vec![0f32; w];
    let mut crossings = Vec::<(f64, i32)>::new();

    for y in y_start..y_end {
        coverage.fill(0.0);

        for sub in 0..SUBSAMPLES {
            let sy = f64::from(y) + (f64::from(sub) + 0.5) / f64::from(SUBSAMPLES);
            crossings.clear();

            for e in &edges {
                if e.y0 == e.y1 {
                    continue;
                }
                let (y_min, y_max, dir) = if e.y0 < e.y1 {
                    (e.y0, e.y1, 1)
                } else {
                    (e.y1, e.y0, -1)
                };
                if sy < y_min || sy >= y_max {
                    continue;
                }
                let t = (sy - e.y0) / (e.y1 - e.y0);
                crossings.push((e.x0 + t * (e.x1 - e.x0), dir));
            }

            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0i32;
            let mut span_start = 0.0f64;
            for &(x, dir) in &crossings {
                let was = winding;
                winding += dir;
                if was == 0 && winding != 0 {
                    span_start = x;
                } else if was != 0 && winding == 0 {
                    accumulate_span(&mut coverage, span_start, x, width);
                }
            }
        }

        let row = (y as usize) * w * 4;
        for (x, cov) in coverage.iter().enumerate() {
            let cov = cov / SUBSAMPLES as f32;
            if cov <= 0.0 {
                continue;
            }
            let color = paint.sample(x as f64 + 0.5, f64::from(y) + 0.5);
            let src = scale_premul(color, cov * opacity);
            if src[3] == 0 {
                continue;
            }
            let idx = row + x * 4;
            let out = composite::over(
                [dst[idx], dst[idx + 1], dst[idx + 2], dst[idx + 3]],
                src,
                1.0,
            );
            dst[idx..idx + 4].copy_from_slice(&out);
        }
    }

    Ok(())
}

/// Stroke a path centerline by expanding it to a fill with `kurbo::stroke`.
pub(crate) fn stroke_path(
    dst: &mut [u8],
    width: u32,
    height: u32,
    path: &BezPath,
    transform: Affine,
    stroke_width: f64,
    color: Rgba8Premul,
    opacity: f32,
) -> CurlicueResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(CurlicueError::evaluation("stroke width must be > 0"));
    }

    // Transform first so the stroke width is in canvas pixels.
    let transformed = transform * path.clone();
    let style = kurbo::Stroke::new(stroke_width);
    let expanded = kurbo::stroke(
        transformed.elements().iter().copied(),
        &style,
        &kurbo::StrokeOpts::default(),
        0.25,
    );
    fill_path(
        dst,
        width,
        height,
        &expanded,
        Affine::IDENTITY,
        &ResolvedPaint::Solid(color),
        opacity,
    )
}

fn check_buffer(len: usize, width: u32, height: u32) -> CurlicueResult<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CurlicueError::evaluation("raster buffer size overflow"))?;
    if len != expected {
        return Err(CurlicueError::evaluation(
            "raster buffer must match width*height*4",
        ));
    }
    Ok(())
}

fn flatten_edges(path: &BezPath, transform: Affine) -> Vec<EdgeSeg> {
    let transformed = transform * path.clone();
    let mut edges = Vec::new();
    let mut start = Point::new(0.0, 0.0);
    let mut cur = Point::new(0.0, 0.0);
    let mut open = false;

    let push = |a: Point, b: Point, edges: &mut Vec<EdgeSeg>| {
        if a != b {
            edges.push(EdgeSeg {
                x0: a.x,
                y0: a.y,
                x1: b.x,
                y1: b.y,
            });
        }
    };

    for el in transformed.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                if open {
                    push(cur, start, &mut edges);
                }
                start = p;
                cur = p;
                open = true;
            }
            PathEl::LineTo(p) => {
                push(cur, p, &mut edges);
                cur = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let quad = QuadBez::new(cur, p1, p2);
                let mut prev = cur;
                for i in 1..=CURVE_STEPS {
                    let p = quad.eval(i as f64 / CURVE_STEPS as f64);
                    push(prev, p, &mut edges);
                    prev = p;
                }
                cur = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let cubic = CubicBez::new(cur, p1, p2, p3);
                let mut prev = cur;
                for i in 1..=CURVE_STEPS {
                    let p = cubic.eval(i as f64 / CURVE_STEPS as f64);
                    push(prev, p, &mut edges);
                    prev = p;
                }
                cur = p3;
            }
            PathEl::ClosePath => {
                push(cur, start, &mut edges);
                cur = start;
                open = false;
            }
        }
    }
    if open {
        push(cur, start, &mut edges);
    }

    edges
}

fn accumulate_span(coverage: &mut [f32], x0: f64, x1: f64, width: u32) {
    let x0 = x0.max(0.0);
    let x1 = x1.min(f64::from(width));
    if x1 <= x0 {
        return;
    }

    let first = x0.floor() as usize;
    let last = ((x1.ceil() as usize).min(width as usize)).saturating_sub(1);
    for (px, slot) in coverage
        .iter_mut()
        .enumerate()
        .take(last + 1)
        .skip(first)
    {
        let l = (px as f64).max(x0);
        let r = ((px + 1) as f64).min(x1);
        if r > l {
            *slot += (r - l) as f32;
        }
    }
}

fn scale_premul(color: Rgba8Premul, factor: f32) -> [u8; 4] {
    let factor = factor.clamp(0.0, 1.0);
    let scale = |c: u8| -> u8 { ((f32::from(c) * factor).round()).clamp(0.0, 255.0) as u8 };
    [scale(color.r), scale(color.g), scale(color.b), scale(color.a)]
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
