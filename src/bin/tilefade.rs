use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Tile two image directories into composite canvases and write a looping crossfade GIF.
#[derive(Parser, Debug)]
#[command(name = "tilefade", version)]
struct Cli {
    /// Directory holding the first image collection.
    first_dir: PathBuf,

    /// Directory holding the second image collection (same image count).
    second_dir: PathBuf,

    /// Output GIF path.
    out: PathBuf,

    /// Settings JSON; explicit flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tiling strategy applied to both collections.
    #[arg(long, value_enum)]
    layout: Option<LayoutChoice>,

    /// Fade steps per direction (animation has 4 * steps + 2 frames).
    #[arg(long)]
    steps: Option<u32>,

    /// Per-frame display time in milliseconds.
    #[arg(long)]
    frame_delay_ms: Option<u32>,

    /// What to do when the two composites differ in size.
    #[arg(long, value_enum)]
    dimensions: Option<DimensionChoice>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    Grid,
    Strip,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DimensionChoice {
    Reject,
    Pad,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .init();

    let settings = build_settings(&cli)?;
    let req = tilefade::RunRequest {
        first_dir: cli.first_dir,
        second_dir: cli.second_dir,
        out_path: cli.out,
        settings,
    };

    let report = tilefade::run(&req)?;
    eprintln!(
        "wrote {} ({} frames, {}x{})",
        report.out_path.display(),
        report.frames,
        report.canvas.0,
        report.canvas.1
    );
    Ok(())
}

fn build_settings(cli: &Cli) -> anyhow::Result<tilefade::TransitionSettings> {
    let mut settings = match &cli.config {
        Some(path) => tilefade::TransitionSettings::load(path)?,
        None => tilefade::TransitionSettings::default(),
    };

    if let Some(layout) = cli.layout {
        settings.layout = match layout {
            LayoutChoice::Grid => tilefade::LayoutStrategy::Grid,
            LayoutChoice::Strip => tilefade::LayoutStrategy::Strip,
        };
    }
    if let Some(steps) = cli.steps {
        settings.steps = steps;
    }
    if let Some(ms) = cli.frame_delay_ms {
        settings.frame_delay_ms = ms;
    }
    if let Some(dims) = cli.dimensions {
        settings.dimensions = match dims {
            DimensionChoice::Reject => tilefade::DimensionPolicy::Reject,
            DimensionChoice::Pad => tilefade::DimensionPolicy::Pad,
        };
    }

    settings.validate()?;
    Ok(settings)
}
