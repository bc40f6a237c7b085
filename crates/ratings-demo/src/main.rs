// File: crates/ratings-demo/src/main.rs
// Summary: Demo CLI; loads a season CSV and renders the bar chart to SVG/PNG, or prints its layout.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use ratings_core::{theme, AveragePlacement, BarChart, ChartConfig, Dataset, Scene, ScaleTransform};
use ratings_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Season viewership bar chart renderer", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chart to SVG and/or PNG
    Render(RenderArgs),
    /// Print bounds, scales, bar layout and the average line
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Season CSV with a header row
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output SVG path
    #[arg(long, default_value = "target/out/chart.svg", value_hint = ValueHint::FilePath)]
    svg: PathBuf,

    /// Output PNG path (skipped when absent)
    #[arg(long, value_hint = ValueHint::FilePath)]
    png: Option<PathBuf>,

    #[command(flatten)]
    chart: ChartArgs,

    /// Draw the tooltip of this bar (0-based row) fully faded in
    #[arg(long)]
    hover: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    #[command(flatten)]
    chart: ChartArgs,
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// TOML chart config; unspecified keys keep their defaults
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Theme preset (classic, dark)
    #[arg(long)]
    theme: Option<String>,

    /// How the average line finds its pixel-y
    #[arg(long, value_enum)]
    average: Option<AverageMode>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AverageMode {
    /// mean * 19, matching the stock layout
    Empirical,
    /// through the y scale
    Scale,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    match cli.command {
        Command::Render(args) => handle_render(args),
        Command::Inspect(args) => handle_inspect(args),
    }
}

fn load_config(args: &ChartArgs) -> Result<ChartConfig> {
    let mut cfg = match &args.config {
        Some(p) => ChartConfig::from_path(p).with_context(|| format!("loading config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(t) = &args.theme {
        cfg.theme = t.clone();
    }
    match args.average {
        Some(AverageMode::Scale) => cfg.average.placement = AveragePlacement::Scale,
        Some(AverageMode::Empirical) => cfg.average.placement = AveragePlacement::default(),
        None => {}
    }
    Ok(cfg)
}

fn build_chart(input: &Path, cfg: ChartConfig) -> Result<BarChart> {
    let dataset = Dataset::from_path(input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    info!(rows = dataset.len(), "loaded {}", input.display());
    BarChart::new(dataset, cfg).context("failed to lay out chart")
}

fn handle_render(args: RenderArgs) -> Result<()> {
    let cfg = load_config(&args.chart)?;
    let (scene, status) = scene_or_error_panel(&args.input, cfg, args.hover);
    match status {
        Ok(()) => write_outputs(&scene, &args.svg, args.png.as_deref()),
        Err(err) => {
            if let Err(e) = write_outputs(&scene, &args.svg, args.png.as_deref()) {
                warn!("could not write error panel: {e:#}");
            }
            Err(err)
        }
    }
}

/// The scene to write for `input`. When the chart cannot be built, the scene is
/// an error panel carrying the message and the status holds the error.
fn scene_or_error_panel(input: &Path, cfg: ChartConfig, hover: Option<usize>) -> (Scene, Result<()>) {
    let (width, height, theme) = (cfg.width, cfg.height, theme::find(&cfg.theme));
    match chart_scene(input, cfg, hover) {
        Ok(scene) => (scene, Ok(())),
        Err(err) => (Scene::error_panel(width, height, &theme, &format!("{err:#}")), Err(err)),
    }
}

fn chart_scene(input: &Path, cfg: ChartConfig, hover: Option<usize>) -> Result<Scene> {
    let chart = build_chart(input, cfg)?;
    Ok(match hover {
        Some(bar) => {
            let b = chart.bars().get(bar).with_context(|| format!("no bar {bar}; chart has {}", chart.bars().len()))?;
            let mut tip = chart.tooltip();
            tip.handle(&ratings_core::PointerEvent::Enter { bar, x: b.x + b.width, y: b.y }, &chart);
            tip.advance(chart.config().tooltip.fade_in_ms);
            chart.render_with_tooltip(&tip)
        }
        None => chart.render(),
    })
}

fn write_outputs(scene: &Scene, svg: &Path, png: Option<&Path>) -> Result<()> {
    ratings_core::svg::write_svg(scene, svg).with_context(|| format!("writing '{}'", svg.display()))?;
    info!("Wrote {}", svg.display());
    if let Some(png) = png {
        SkiaRenderer::new().render_to_png(scene, png).with_context(|| format!("writing '{}'", png.display()))?;
        info!("Wrote {}", png.display());
    }
    Ok(())
}

fn handle_inspect(args: InspectArgs) -> Result<()> {
    let cfg = load_config(&args.chart)?;
    let chart = build_chart(&args.input, cfg)?;

    let b = chart.bounds();
    println!("bounds: x [{}, {}]  y [{}, {}]", b.x_min, b.x_max, b.y_min, b.y_max);
    let s = chart.scales();
    println!("x scale: {:?} -> {:?}", s.x.domain(), s.x.range());
    println!("y scale: {:?} -> {:?}", s.y.domain(), s.y.range());
    println!("{:>4}  {:>9}  {:>9}  {:>9}  label", "row", "x", "y", "height");
    for bar in chart.bars() {
        println!("{:>4}  {:>9.2}  {:>9.2}  {:>9.2}  {}", bar.row, bar.x, bar.y, bar.height, bar.label);
    }
    let avg = chart.average();
    println!("average: {:.4} (label {}) at y = {:.2}", avg.mean, avg.label, avg.y);
    Ok(())
}
