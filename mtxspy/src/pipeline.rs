//! End-to-end run: open, parse, aggregate, render
//!
//! This is the seam between the pure parsing core and everything with side
//! effects. Parse diagnostics pass through untouched so their line/column
//! positions survive to the caller.

use std::io;
use std::path::{Path, PathBuf};

use mtxspy_core::{parse_entries, parse_header, Grid, Header, LineSource, MatrixFormat, ParseError};
use thiserror::Error;

use crate::reader::ReadSource;
use crate::render::{self, RenderConfig, RenderError};
use crate::stats::GridStats;

/// Failure anywhere in a full run
#[derive(Debug, Error)]
pub enum SpyError {
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Valid header, but a format this pipeline does not draw
    #[error("'array' format files hold dense matrices and have no sparsity pattern to draw")]
    UnsupportedFormat,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Parse a whole document and aggregate it into a grid
///
/// Rejects `array` headers here rather than in the parser: the header itself
/// is well-formed, this pipeline just has nothing to draw for a dense file.
pub fn aggregate<S: LineSource + ?Sized>(
    source: &mut S,
    config: &RenderConfig,
) -> Result<(Header, Grid), SpyError> {
    let header = parse_header(source)?;
    if header.format == MatrixFormat::Array {
        return Err(SpyError::UnsupportedFormat);
    }
    log::debug!(
        "header: {} {}x{}, {} declared entries",
        header.banner(),
        header.rows,
        header.cols,
        header.declared_entries
    );

    let (max_grid_rows, max_grid_cols) = config.grid_budget();
    let mut grid = Grid::new(&header, max_grid_rows, max_grid_cols);
    log::debug!(
        "grid {}x{}, block size {}",
        grid.rows(),
        grid.cols(),
        grid.block_size()
    );

    parse_entries(source, &header, &mut grid)?;
    Ok((header, grid))
}

/// Run the full pipeline from an already-open line source
pub fn render_spy_from<S: LineSource + ?Sized>(
    source: &mut S,
    output: &Path,
    config: &RenderConfig,
) -> Result<GridStats, SpyError> {
    // Resolve the backend before parsing, so a bad output path fails fast.
    let renderer = render::for_path(output)?;

    let (header, grid) = aggregate(source, config)?;
    renderer.render(&grid, config, output)?;

    let stats = GridStats::collect(&header, &grid);
    stats.log();
    Ok(stats)
}

/// Run the full pipeline over a file using the buffered reader
pub fn render_spy(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<GridStats, SpyError> {
    let mut source = ReadSource::open(input).map_err(|source| SpyError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    render_spy_from(&mut source, output, config)
}

/// Run the full pipeline over a memory-mapped file
#[cfg(feature = "mmap")]
pub fn render_spy_mmap(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<GridStats, SpyError> {
    let mut source = crate::mmap::MmapSource::open(input).map_err(|source| SpyError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    render_spy_from(&mut source, output, config)
}
