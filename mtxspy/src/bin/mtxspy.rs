use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::info;

use mtxspy::{render_spy, RenderConfig};

#[derive(Parser)]
#[command(name = "mtxspy")]
#[command(about = "Render the sparsity pattern of a Matrix Market file.", long_about = None)]
#[command(version)]
struct Args {
    /// Input Matrix Market file (.mtx).
    input: PathBuf,

    /// Output image; the extension picks the format (svg, png, jpg, bmp, tga).
    #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "out.svg")]
    out: PathBuf,

    /// Maximum width of the image; the actual width can be smaller.
    #[arg(short = 'x', long = "width", value_name = "N", default_value_t = 600)]
    width: u32,

    /// Maximum height of the image; the actual height can be smaller.
    #[arg(short = 'y', long = "height", value_name = "N", default_value_t = 600)]
    height: u32,

    /// Pixel side length of one grid block.
    #[arg(long = "block-pixels", value_name = "N", default_value_t = 1)]
    block_pixels: u32,

    /// Border thickness in pixels.
    #[arg(long = "border", value_name = "N", default_value_t = 2)]
    border: u32,

    /// Compute colors from the maximum block occupancy instead of the block
    /// capacity.
    #[arg(short = 'a', long = "adjust-colors")]
    adjust_colors: bool,

    /// Read the input through a memory map instead of buffered reads.
    #[cfg(feature = "mmap")]
    #[arg(long = "mmap")]
    mmap: bool,

    /// Write a JSON run summary to this file.
    #[cfg(feature = "serde")]
    #[arg(long = "stats", value_name = "FILE")]
    stats: Option<PathBuf>,

    /// Verbosity level (0 = warnings, 1 = info, 2 = debug).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let config = RenderConfig::default()
        .with_max_size(args.width, args.height)
        .with_block_pixels(args.block_pixels)
        .with_border(args.border)
        .with_adjusted_colors(args.adjust_colors);

    info!("reading {}", args.input.display());

    #[cfg(feature = "mmap")]
    let result = if args.mmap {
        mtxspy::render_spy_mmap(&args.input, &args.out, &config)
    } else {
        render_spy(&args.input, &args.out, &config)
    };
    #[cfg(not(feature = "mmap"))]
    let result = render_spy(&args.input, &args.out, &config);

    let stats = match result {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };

    info!("wrote {}", args.out.display());

    #[cfg(feature = "serde")]
    if let Some(path) = &args.stats {
        if let Err(err) = stats.write_json(path) {
            eprintln!("error: cannot write stats to '{}': {err}", path.display());
            exit(1);
        }
    }

    #[cfg(not(feature = "serde"))]
    let _ = stats;
}
