use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Render a single frame as PNG, SVG or JSON (chosen by the output extension).
    Frame(FrameArgs),
    /// Render a range of frames as a PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct CompArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// JSON file with prop overrides.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Directory asset references resolve against.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Matte color under PNG output (`#rgb`, `#rrggbb` or `#rrggbbaa`).
    #[arg(long, value_parser = parse_color)]
    background: Option<promoreel::Rgba8>,
}

fn parse_color(s: &str) -> Result<promoreel::Rgba8, String> {
    promoreel::Rgba8::from_hex(s).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path (`.png`, `.svg` or `.json`).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    comp: CompArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames built per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Rasterize identical frames once.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let registry = promoreel::Registry::builtin()?;
    match cli.cmd {
        Command::List => cmd_list(&registry),
        Command::Frame(args) => cmd_frame(&registry, args),
        Command::Frames(args) => cmd_frames(&registry, args),
    }
}

fn cmd_list(registry: &promoreel::Registry) -> anyhow::Result<()> {
    for entry in registry.entries() {
        let c = entry.config;
        println!(
            "{}  {}  {}  {}x{}",
            entry.id,
            c.duration_in_frames,
            c.fps.as_f64(),
            c.width,
            c.height
        );
    }
    Ok(())
}

fn instantiate(
    registry: &promoreel::Registry,
    args: &CompArgs,
) -> anyhow::Result<Box<dyn promoreel::Composition>> {
    let overrides = match &args.props {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read props '{}'", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parse props '{}'", path.display()))?;
            Some(value)
        }
        None => None,
    };
    Ok(registry.instantiate(&args.comp, overrides.as_ref())?)
}

fn raster_opts(args: &CompArgs) -> promoreel::RasterOpts {
    promoreel::RasterOpts {
        assets_root: args.assets.clone(),
        background: args.background,
    }
}

fn cmd_frame(registry: &promoreel::Registry, args: FrameArgs) -> anyhow::Result<()> {
    let comp = instantiate(registry, &args.comp)?;
    let frame = comp.render(promoreel::FrameIndex(args.frame));

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => {
            promoreel::rasterize(&frame, &raster_opts(&args.comp))?.write_png(&args.out)?;
        }
        Some("svg") => write_text(&args.out, &frame.to_svg())?,
        Some("json") => write_text(&args.out, &serde_json::to_string_pretty(&frame)?)?,
        _ => anyhow::bail!(
            "unsupported output extension for '{}' (expected .png, .svg or .json)",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(registry: &promoreel::Registry, args: FramesArgs) -> anyhow::Result<()> {
    let comp = instantiate(registry, &args.comp)?;
    let end = args.end.unwrap_or(comp.config().duration_in_frames);
    let range = promoreel::FrameRange::new(
        promoreel::FrameIndex(args.start),
        promoreel::FrameIndex(end),
    )?;
    let threading = promoreel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };

    let mut written = 0usize;
    let stats = promoreel::render_range_with(
        comp.as_ref(),
        range,
        &threading,
        &raster_opts(&args.comp),
        |start, frames| {
            written += promoreel::write_png_sequence(&args.out_dir, start, &frames)?.len();
            Ok(())
        },
    )?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        written,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
