use std::{io::Write as _, path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gridfall::{
    FrameAnimator, GridConfig, GridController, Rng64, TilePlan, UniformLayoutHost, Viewport,
    css_perspective, css_transform,
};

#[derive(Parser, Debug)]
#[command(name = "gridfall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tile plan (cells, images, entrance poses, delays) as JSON.
    Plan(PlanArgs),
    /// Print the measured transform table as JSON.
    Table(GridArgs),
    /// Simulate the entrance at a fixed frame rate and print one JSON line per frame.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Viewport size, e.g. `1920x1080`.
    #[arg(long, value_parser = parse_viewport, default_value = "1920x1080")]
    viewport: Viewport,

    /// Grid config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Seed for tile selection.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Plan before measurement completes, using quadrant fallback poses.
    #[arg(long)]
    unmeasured: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    grid: GridArgs,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Simulated duration after the animations start.
    #[arg(long, default_value_t = 3.0)]
    seconds: f64,
}

#[derive(serde::Serialize)]
struct TileOut<'a> {
    #[serde(flatten)]
    plan: &'a TilePlan,
    css_initial: String,
}

#[derive(serde::Serialize)]
struct FrameOut {
    frame: u64,
    t: f64,
    tiles: Vec<FrameTileOut>,
}

#[derive(serde::Serialize)]
struct FrameTileOut {
    handle: u64,
    css: String,
    opacity: f64,
    finished: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Table(args) => cmd_table(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Viewport::new(w, h).map_err(|e| e.to_string())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GridConfig> {
    match path {
        Some(p) => {
            GridConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(GridConfig::default()),
    }
}

/// Mount a controller on a uniform layout and, unless `measure` is off, run its deferred
/// measurement.
fn mounted_controller(
    args: &GridArgs,
    measure: bool,
) -> anyhow::Result<(GridController, Duration)> {
    let config = load_config(args.config.as_ref())?;
    let delay = Duration::from_millis(config.measure_delay_ms);
    let mut grid = GridController::new(config)?;
    let mut host = UniformLayoutHost::new(args.viewport);

    let mut now = Duration::ZERO;
    grid.mount(now, args.viewport);
    if measure {
        now += delay;
        if !grid.poll(now, &mut host) {
            anyhow::bail!("measurement did not produce a transform table");
        }
    }
    Ok((grid, now))
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(stdout, value).with_context(|| "write JSON to stdout")?;
    println!();
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (grid, _) = mounted_controller(&args.grid, !args.unmeasured)?;
    let plans = grid.plan(&mut Rng64::new(args.seed));
    let tiles: Vec<TileOut<'_>> = plans
        .iter()
        .map(|plan| TileOut {
            plan,
            css_initial: css_transform(&plan.initial),
        })
        .collect();

    write_json(&serde_json::json!({
        "viewport": args.grid.viewport,
        "dims": grid.dims(),
        "perspective": css_perspective(),
        "tiles": tiles,
    }))
}

fn cmd_table(args: GridArgs) -> anyhow::Result<()> {
    let (grid, _) = mounted_controller(&args, true)?;
    let table = grid
        .transform_table()
        .context("controller has no transform table after measurement")?;
    write_json(&serde_json::json!({
        "viewport": args.viewport,
        "dims": table.dims(),
        "poses": table.poses(),
    }))
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("--seconds must be finite and >= 0");
    }

    let (mut grid, start) = mounted_controller(&args.grid, true)?;
    let mut animator = FrameAnimator::new();
    grid.start(start, &mut Rng64::new(args.seed), &mut animator)?;

    let frame_count = (args.seconds * f64::from(args.fps)).round() as u64;
    let mut out = std::io::stdout().lock();
    let mut written = 0u64;
    for frame in 0..=frame_count {
        let t = frame as f64 / f64::from(args.fps);
        let samples = animator.tick(start + Duration::from_secs_f64(t));
        let line = FrameOut {
            frame,
            t,
            tiles: samples
                .iter()
                .map(|s| FrameTileOut {
                    handle: s.handle.id(),
                    css: css_transform(&s.pose),
                    opacity: s.pose.opacity,
                    finished: s.finished,
                })
                .collect(),
        };
        serde_json::to_writer(&mut out, &line).with_context(|| format!("write frame {frame}"))?;
        writeln!(out).with_context(|| format!("write frame {frame}"))?;
        written += 1;
        if animator.is_empty() {
            break;
        }
    }

    tracing::info!(frames = written, "entrance simulated");
    Ok(())
}
