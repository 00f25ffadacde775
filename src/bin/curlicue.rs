//! Demo entry point: select one demo scene as root content and render it to
//! PNG frames.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use curlicue::{
    BackendKind, Canvas, Event, Fps, FrameRGBA, Scene, ToggleState, create_backend, demos,
    render_frames, render_scene,
};

#[derive(Parser, Debug)]
#[command(name = "curlicue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an animated PNG frame sequence.
    Render(RenderArgs),
    /// Print a demo scene as JSON.
    Dump(DumpArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Demo {
    /// Filled and stroked heart.
    Heart,
    /// Squishy toggle with morphing frame, knob, and state icon.
    Toggle,
    /// Inner-shadow gallery.
    InnerShadow,
    /// Juxtaposed edge/corner ornaments.
    Juxtapose,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Demo scene to render.
    #[arg(long, value_enum)]
    demo: Demo,

    /// Timestamp in seconds (animated demos are tapped at t = 0).
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Canvas size in pixels (square).
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Show layout-guide debug markers where the demo supports them.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Demo scene to render.
    #[arg(long, value_enum)]
    demo: Demo,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 45)]
    frames: u64,

    /// Canvas size in pixels (square).
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Show layout-guide debug markers where the demo supports them.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Demo scene to dump.
    #[arg(long, value_enum)]
    demo: Demo,

    /// Canvas size in pixels (square).
    #[arg(long, default_value_t = 512)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn build_demo(demo: Demo, size: u32, debug: bool) -> anyhow::Result<Scene> {
    let canvas = Canvas {
        width: size,
        height: size,
    };
    let scene = match demo {
        Demo::Heart => demos::heart(canvas, debug)?,
        Demo::Toggle => demos::squishy_toggle(canvas)?,
        Demo::InnerShadow => demos::inner_shadow_gallery(canvas)?,
        Demo::Juxtapose => demos::juxtaposed(canvas)?,
    };
    Ok(scene)
}

fn tapped_state() -> anyhow::Result<ToggleState> {
    let mut state = ToggleState::new(false);
    state.apply(Event::Tap { now_s: 0.0 })?;
    Ok(state)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = build_demo(args.demo, args.size, args.debug)?;
    let state = tapped_state()?;
    let mut backend = create_backend(BackendKind::Cpu)?;

    let frame = render_scene(&scene, &state, args.at, backend.as_mut())?;
    save_png(&frame, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = build_demo(args.demo, args.size, args.debug)?;
    let state = tapped_state()?;
    let fps = Fps::new(args.fps, 1)?;
    let mut backend = create_backend(BackendKind::Cpu)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    render_frames(
        &scene,
        &state,
        fps,
        args.frames,
        backend.as_mut(),
        |index, frame| {
            let path = args.out_dir.join(format!("frame_{index:04}.png"));
            save_png(&frame, &path).map_err(curlicue::CurlicueError::from)
        },
    )?;
    println!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let scene = build_demo(args.demo, args.size, false)?;
    let json = serde_json::to_string_pretty(&scene)?;
    println!("{json}");
    Ok(())
}

fn save_png(frame: &FrameRGBA, path: &std::path::Path) -> anyhow::Result<()> {
    let image = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba())
        .context("frame buffer does not match dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
