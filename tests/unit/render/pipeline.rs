use super::*;

use crate::foundation::core::Canvas;
use crate::render::cpu::CpuBackend;
use crate::scene::demos;
use crate::scene::state::Event;

fn canvas() -> Canvas {
    Canvas {
        width: 64,
        height: 64,
    }
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[idx],
        frame.data[idx + 1],
        frame.data[idx + 2],
        frame.data[idx + 3],
    ]
}

#[test]
fn heart_demo_renders_red_over_white() {
    let scene = demos::heart(canvas(), false).unwrap();
    let state = ToggleState::new(false);
    let mut backend = CpuBackend::new();

    let frame = render_scene(&scene, &state, 0.0, &mut backend).unwrap();
    assert_eq!(frame.width, 64);
    assert_eq!(frame.height, 64);
    assert!(frame.premultiplied);

    // Background corner is white; the heart body covers the center.
    assert_eq!(pixel(&frame, 1, 1), [255, 255, 255, 255]);
    let center = pixel(&frame, 32, 32);
    assert!(center[0] > 150, "center = {center:?}");
    assert!(center[1] < 120);
    assert_eq!(center[3], 255);
}

#[test]
fn toggle_demo_animates_between_frames() {
    let scene = demos::squishy_toggle(canvas()).unwrap();
    let mut state = ToggleState::new(false);
    state.apply(Event::Tap { now_s: 0.0 }).unwrap();
    let mut backend = CpuBackend::new();

    let start = render_scene(&scene, &state, 0.0, &mut backend).unwrap();
    let mid = render_scene(&scene, &state, 0.5, &mut backend).unwrap();
    assert_ne!(start.data, mid.data);
}

#[test]
fn rendering_is_deterministic() {
    let scene = demos::inner_shadow_gallery(canvas()).unwrap();
    let state = ToggleState::new(false);
    let mut backend = CpuBackend::new();

    let a = render_scene(&scene, &state, 0.0, &mut backend).unwrap();
    let b = render_scene(&scene, &state, 0.0, &mut backend).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn render_frames_feeds_the_sink_in_order() {
    let scene = demos::heart(canvas(), false).unwrap();
    let state = ToggleState::new(false);
    let fps = Fps::new(10, 1).unwrap();
    let mut backend = CpuBackend::new();

    let mut seen = Vec::new();
    render_frames(&scene, &state, fps, 5, &mut backend, |index, frame| {
        assert_eq!(frame.width, 64);
        seen.push(index);
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn sink_errors_abort_the_run() {
    let scene = demos::heart(canvas(), false).unwrap();
    let state = ToggleState::new(false);
    let fps = Fps::new(10, 1).unwrap();
    let mut backend = CpuBackend::new();

    let result = render_frames(&scene, &state, fps, 5, &mut backend, |index, _| {
        if index == 2 {
            Err(crate::foundation::error::CurlicueError::evaluation("stop"))
        } else {
            Ok(())
        }
    });
    assert!(result.is_err());
}
