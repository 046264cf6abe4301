//! mtxspy - Matrix Market Sparsity Pattern Renderer
//!
//! Streams a Matrix Market file once, aggregates its entries into an
//! adaptive occupancy grid, and draws the grid as an SVG or raster image.
//!
//! ## Architecture
//!
//! mtxspy follows a clean core/implementation separation:
//!
//! - **mtxspy-core**: Pure parsing and aggregation (no file I/O)
//! - **mtxspy**: File and mmap line sources, rendering backends, CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mtxspy::{render_spy, RenderConfig};
//!
//! fn example() -> Result<(), mtxspy::SpyError> {
//!     let config = RenderConfig::default()
//!         .with_max_size(800, 800)
//!         .with_adjusted_colors(true);
//!     let stats = render_spy(Path::new("matrix.mtx"), Path::new("out.svg"), &config)?;
//!     println!("max occupancy {}", stats.max_occupancy);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Streaming**: fixed-size buffers, files larger than memory are fine
//! - **Adaptive binning**: any matrix fits the target image size
//! - **Symmetry expansion**: symmetric files show both triangles
//! - **Two backends**: SVG markup or raster formats via the `image` crate

// Re-export the parsing core
pub use mtxspy_core::{
    // Parsing entry points
    parse_entries, parse_header,
    // Header model
    ElementType, Header, MatrixFormat, Symmetry,
    // Aggregation
    Grid,
    // Line sources
    LineSource, SliceSource, SourceError, MAX_LINE_LEN,
    // Diagnostics
    Axis, ParseError, ParseErrorKind, ParseResult,
};

pub mod pipeline;
pub mod reader;
pub mod render;
pub mod stats;

#[cfg(feature = "mmap")]
pub mod mmap;

pub use pipeline::{aggregate, render_spy, render_spy_from, SpyError};
pub use reader::ReadSource;
pub use render::{Palette, RenderConfig, RenderError, Renderer, Rgb};
pub use stats::GridStats;

#[cfg(feature = "mmap")]
pub use mmap::MmapSource;
#[cfg(feature = "mmap")]
pub use pipeline::render_spy_mmap;
