use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chartpath", version)]
struct Cli {
    /// Maximum level of diagnostics written to stderr.
    #[arg(long, global = true, default_value_t = tracing::Level::WARN)]
    log: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the SVG path data of the smooth line through a series.
    Path(PathArgs),
    /// Print the JSON scrub readout at a progress fraction.
    Scrub(ScrubArgs),
}

#[derive(Args, Debug)]
struct SeriesArgs {
    /// Input series JSON (`{"samples": [{"value": 1.0, "label": "a"}, ...]}`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width.
    #[arg(long)]
    width: f64,

    /// Viewport height.
    #[arg(long)]
    height: f64,

    /// Arc-length accuracy in viewport units.
    #[arg(long, default_value_t = chartpath::DEFAULT_ACCURACY)]
    accuracy: f64,
}

#[derive(Args, Debug)]
struct PathArgs {
    #[command(flatten)]
    series: SeriesArgs,

    /// Start of the emitted range as a fraction of arc length.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// End of the emitted range as a fraction of arc length.
    #[arg(long, default_value_t = 1.0)]
    to: f64,

    /// Emit the closed area under the line instead of the line itself.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    fill: bool,
}

#[derive(Args, Debug)]
struct ScrubArgs {
    #[command(flatten)]
    series: SeriesArgs,

    /// Scrub position in `[0, 1]`.
    #[arg(long)]
    progress: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Scrub(args) => cmd_scrub(args),
    }
}

fn read_series(path: &Path) -> anyhow::Result<chartpath::SampleSeries> {
    let series = chartpath::SampleSeries::from_path(path)
        .with_context(|| format!("load series '{}'", path.display()))?;
    tracing::info!(samples = series.len(), "loaded series");
    Ok(series)
}

fn viewport(args: &SeriesArgs) -> anyhow::Result<chartpath::Size> {
    if !(args.width.is_finite() && args.height.is_finite()) || args.width < 0.0 || args.height < 0.0
    {
        anyhow::bail!(
            "viewport must be finite and non-negative, got {}x{}",
            args.width,
            args.height
        );
    }
    Ok(chartpath::Size::new(args.width, args.height))
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let series = read_series(&args.series.in_path)?;
    let size = viewport(&args.series)?;
    let settings = chartpath::CurveSettings::with_accuracy(args.series.accuracy)?;
    let points = chartpath::map_to_viewport(&series.samples, size);

    let path = if args.fill {
        chartpath::build_fill_path(&points, size.height)
    } else {
        let line = chartpath::build_smooth_path(&points);
        chartpath::PathMeasure::with_settings(&line, settings).segment_between(args.from, args.to)
    };

    println!("{}", path.to_svg());
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    let series = read_series(&args.series.in_path)?;
    let size = viewport(&args.series)?;
    let settings = chartpath::CurveSettings::with_accuracy(args.series.accuracy)?;

    let readout = chartpath::scrub_with_settings(&series.samples, size, args.progress, settings);
    let json = serde_json::to_string_pretty(&readout).context("serialize readout")?;
    println!("{json}");
    Ok(())
}
