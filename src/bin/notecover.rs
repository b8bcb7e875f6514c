use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "notecover", version, about = "Build note-card pack covers")]
struct Cli {
    /// Log per-image decode and scaling details.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the 2x2 cover PNG only.
    Raster(RasterArgs),
    /// Compose the cover PNG and lay out the printable back-cover SVG.
    Sheet(SheetArgs),
}

#[derive(Args, Debug)]
struct Shared {
    /// Exactly four input images (PNG, JPEG, TIFF, ...), in grid order.
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// JSON file overriding canvas and page geometry.
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RasterArgs {
    #[command(flatten)]
    shared: Shared,

    /// Output PNG path.
    #[arg(long, short, default_value = "cover.png")]
    out: PathBuf,

    /// Overlay the studio logo.
    #[arg(long)]
    logo: bool,
}

#[derive(Args, Debug)]
struct SheetArgs {
    #[command(flatten)]
    shared: Shared,

    /// Card set title; also names the output files.
    #[arg(long, short, default_value = "Untitled")]
    title: String,

    /// Directory the PNG and SVG are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Leave the studio logo off the cover.
    #[arg(long)]
    no_logo: bool,

    /// Also render the SVG page to `<name>-preview.png`.
    #[arg(long)]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Command::Raster(args) => cmd_raster(args),
        Command::Sheet(args) => cmd_sheet(args),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<notecover::CoverConfig> {
    Ok(match path {
        Some(p) => notecover::CoverConfig::load(p)?,
        None => notecover::CoverConfig::default(),
    })
}

fn cmd_raster(args: RasterArgs) -> anyhow::Result<()> {
    let inputs = notecover::CoverInputs::from_paths(args.shared.images)?;
    let config = load_config(args.shared.layout.as_deref())?;

    let job = notecover::RasterJob {
        inputs,
        out: args.out,
        logo: args.logo,
        layout: config.layout,
    };
    notecover::run_raster(&job, &notecover::EmbeddedResources)?;
    Ok(())
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let inputs = notecover::CoverInputs::from_paths(args.shared.images)?;
    let config = load_config(args.shared.layout.as_deref())?;

    if !args.out_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    }

    let job = notecover::SheetJob {
        inputs,
        title: args.title,
        out_dir: args.out_dir,
        logo: !args.no_logo,
        preview: args.preview,
        config,
    };
    notecover::run_sheet(&job, &notecover::EmbeddedResources)?;
    Ok(())
}
