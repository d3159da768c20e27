use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "curvecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene document or SVG file as a PNG.
    Render(RenderArgs),
    /// Print the composited color of one pixel as JSON.
    Pixel(PixelArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON, or an `.svg` file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render bands on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to the number of cores).
    #[arg(long)]
    threads: Option<usize>,

    /// Rows per band.
    #[arg(long, default_value_t = 16)]
    band_rows: usize,
}

#[derive(Parser, Debug)]
struct PixelArgs {
    /// Input scene JSON, or an `.svg` file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene-space x coordinate (pixel centers sit at `col + 0.5`).
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Scene-space y coordinate.
    #[arg(long, allow_negative_numbers = true)]
    y: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Pixel(args) => cmd_pixel(args),
    }
}

/// Load a scene as `(width, height, buffer)`; `.svg` files go through usvg, anything else is
/// read as a JSON scene document.
fn load_scene(path: &Path) -> anyhow::Result<(u32, u32, curvecast::SceneBuffer)> {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let doc = curvecast::SvgDocument::from_path(path)
            .with_context(|| format!("load svg '{}'", path.display()))?;
        let scene = doc.encode().with_context(|| "encode svg")?;
        return Ok((doc.width(), doc.height(), scene));
    }

    let doc = curvecast::SceneDocument::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    let scene = doc.encode().with_context(|| "encode scene")?;
    Ok((doc.width, doc.height, scene))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (width, height, scene) = load_scene(&args.in_path)?;

    let opts = curvecast::RenderOpts {
        parallel: args.parallel,
        threads: args.threads,
        band_rows: args.band_rows,
        ..curvecast::RenderOpts::default()
    };
    let frame = curvecast::render_frame(&scene, width, height, &opts)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_pixel(args: PixelArgs) -> anyhow::Result<()> {
    let (_, _, scene) = load_scene(&args.in_path)?;
    let rgba = curvecast::evaluate_pixel(args.x, args.y, &scene);
    println!("{}", serde_json::to_string(&rgba)?);
    Ok(())
}
