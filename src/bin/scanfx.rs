use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scanfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake a scan timeline and print it.
    Bake(BakeArgs),
    /// Step the live simulation at a fixed dt and print each step.
    Simulate(SimulateArgs),
    /// Report the largest deviation between live stepping and baked playback.
    Compare(CompareArgs),
    /// Evaluate the activation range and cone tests for one position.
    Query(QueryArgs),
}

#[derive(Parser, Debug)]
struct ConfigArg {
    /// Scan config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BakeArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Bake rate in samples per second.
    #[arg(long, default_value_t = scanfx::SampleRate::DEFAULT_HZ)]
    rate: u32,

    /// Print every sample as a JSON line instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Step length in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
}

#[derive(Parser, Debug)]
struct CompareArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Bake rate in samples per second.
    #[arg(long, default_value_t = scanfx::SampleRate::DEFAULT_HZ)]
    rate: u32,

    /// Live step length in seconds.
    #[arg(long, default_value_t = 1.0 / 240.0)]
    dt: f64,
}

#[derive(Parser, Debug)]
struct QueryArgs {
    /// Scan origin as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    origin: scanfx::Vec3,

    /// Forward vector as `x,y,z`; flattened onto XZ.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    forward: scanfx::Vec3,

    /// Position to test as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    position: scanfx::Vec3,

    /// Full cone angle in degrees.
    #[arg(long)]
    max_angle: Option<f64>,

    /// Activation range.
    #[arg(long)]
    range: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Bake(args) => cmd_bake(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Compare(args) => cmd_compare(args),
        Command::Query(args) => cmd_query(args),
    }
}

fn parse_vec3(s: &str) -> Result<scanfx::Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid component in '{s}': {e}"))?;
    match parts[..] {
        [x, y, z] => Ok(scanfx::Vec3::new(x, y, z)),
        _ => Err(format!("expected x,y,z but got '{s}'")),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<scanfx::ScanConfig> {
    let Some(path) = path else {
        return Ok(scanfx::ScanConfig::default());
    };
    scanfx::ScanConfig::from_path(path)
        .with_context(|| format!("load scan config '{}'", path.display()))
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.config.as_deref())?;
    let rate = scanfx::SampleRate::new(args.rate)?;
    let buffer = scanfx::TimelineRecorder::bake(&config, rate)?;

    if args.json {
        for s in buffer.samples() {
            println!("{}", serde_json::to_string(s)?);
        }
    } else {
        let peak = buffer
            .samples()
            .iter()
            .map(|s| s.opacity)
            .fold(0.0, f64::max);
        println!(
            "samples={} duration={:.4}s final_radius={:.4} peak_opacity={:.4}",
            buffer.len(),
            buffer.duration(),
            buffer.last().radius,
            peak
        );
    }

    eprintln!("baked {} samples at {} Hz", buffer.len(), rate.hz());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.dt.is_finite() && args.dt > 0.0,
        "--dt must be finite and > 0 (got {})",
        args.dt
    );
    let config = load_config(args.config.config.as_deref())?;
    let mut sim = scanfx::PhaseSimulator::new(config)?;
    sim.start();

    let mut time = 0.0;
    let mut steps = 0u64;
    while sim.is_active() {
        let line = serde_json::json!({ "time": time, "state": sim.state() });
        println!("{line}");
        sim.advance(args.dt);
        time += args.dt;
        steps += 1;
    }

    eprintln!("simulated {steps} steps of {}s", args.dt);
    Ok(())
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.dt.is_finite() && args.dt > 0.0,
        "--dt must be finite and > 0 (got {})",
        args.dt
    );
    let config = load_config(args.config.config.as_deref())?;
    let rate = scanfx::SampleRate::new(args.rate)?;
    let buffer = scanfx::TimelineRecorder::bake(&config, rate)?;
    let mut player = scanfx::TimelinePlayer::new();
    let mut sim = scanfx::PhaseSimulator::new(config)?;
    sim.start();

    let mut max_radius = 0.0f64;
    let mut max_opacity = 0.0f64;
    let mut max_overlay = 0.0f64;
    let mut step = 0u64;
    while sim.is_active() {
        let t = step as f64 * args.dt;
        let baked = player.seek(&buffer, t);
        let live = sim.state();
        max_radius = max_radius.max((baked.radius - live.radius).abs());
        max_opacity = max_opacity.max((baked.opacity - live.opacity).abs());
        max_overlay = max_overlay.max((baked.overlay_opacity - live.overlay_opacity).abs());
        sim.advance(args.dt);
        step += 1;
    }

    println!(
        "steps={step} max_radius_dev={max_radius:.3e} max_opacity_dev={max_opacity:.3e} \
         max_overlay_dev={max_overlay:.3e}"
    );
    Ok(())
}

fn cmd_query(args: QueryArgs) -> anyhow::Result<()> {
    let defaults = scanfx::ScanSettings::default();
    let settings = scanfx::ScanSettings {
        max_angle: args.max_angle.unwrap_or(defaults.max_angle),
        activation_range: args.range.unwrap_or(defaults.activation_range),
        ..defaults
    };
    let mut authority = scanfx::ScanAuthority::new(settings)?;
    authority.start_scan(args.origin, args.forward, 0.0)?;

    let query = authority.query();
    println!(
        "inside_range={} inside_angle={} contains={}",
        query.inside_range(args.position),
        query.inside_angle(args.position),
        query.contains(args.position)
    );
    Ok(())
}
