//! Rendering backends
//!
//! Two backends share one geometry: an SVG writer emitting one `<rect>` per
//! non-empty block, and a raster writer painting the same rectangles into an
//! RGB pixel buffer. The output path's extension picks the backend.

pub mod color;
pub mod config;
pub mod raster;
pub mod svg;

pub use color::{Palette, Rgb};
pub use config::RenderConfig;
pub use raster::RasterRenderer;
pub use svg::SvgRenderer;

use std::path::Path;

use mtxspy_core::Grid;
use thiserror::Error;

/// Failure while producing the output image
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported output extension '{extension}', expected one of: svg, png, jpg, bmp, tga")]
    UnsupportedExtension { extension: String },
}

/// One backend drawing a finished grid to a file
pub trait Renderer {
    fn render(&self, grid: &Grid, config: &RenderConfig, path: &Path) -> Result<(), RenderError>;
}

/// Pick a backend from the output path's extension
pub fn for_path(path: &Path) -> Result<Box<dyn Renderer>, RenderError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => Ok(Box::new(SvgRenderer)),
        "png" | "jpg" | "jpeg" | "bmp" | "tga" => Ok(Box::new(RasterRenderer)),
        _ => Err(RenderError::UnsupportedExtension { extension }),
    }
}

/// Emitted image size in pixels, `(width, height)`
///
/// Snapped to a whole number of blocks plus the border, so it can come out
/// smaller than the configured maximum.
pub(crate) fn image_size(grid: &Grid, config: &RenderConfig) -> (u32, u32) {
    let width = grid.cols() as u32 * config.block_pixels + 2 * config.border;
    let height = grid.rows() as u32 * config.block_pixels + 2 * config.border;
    (width, height)
}

/// Denominator for block density, never zero
pub(crate) fn density_scale(grid: &Grid, config: &RenderConfig) -> f32 {
    let scale = if config.adjust_colors {
        grid.max_occupancy()
    } else {
        grid.block_capacity()
    };
    scale.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtxspy_core::{ElementType, Header, MatrixFormat, Symmetry};

    fn grid(rows: u64, cols: u64) -> Grid {
        let header = Header {
            format: MatrixFormat::Coordinate,
            element_type: ElementType::Real,
            symmetry: Symmetry::General,
            rows,
            cols,
            declared_entries: 0,
            preamble_lines: 2,
        };
        Grid::new(&header, 100, 100)
    }

    #[test]
    fn test_backend_selection() {
        assert!(for_path(Path::new("out.svg")).is_ok());
        assert!(for_path(Path::new("out.PNG")).is_ok());
        assert!(for_path(Path::new("out.jpeg")).is_ok());
        assert!(matches!(
            for_path(Path::new("out.gif")),
            Err(RenderError::UnsupportedExtension { .. })
        ));
        assert!(matches!(
            for_path(Path::new("out")),
            Err(RenderError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_image_size_snaps_to_blocks() {
        let config = RenderConfig::default().with_block_pixels(4).with_border(2);
        assert_eq!(image_size(&grid(50, 30), &config), (124, 204));
    }

    #[test]
    fn test_density_scale_choice() {
        let mut g = grid(1000, 1000);
        g.record_entry(0, 0);
        g.record_entry(0, 1);

        let capacity = RenderConfig::default();
        let adjusted = RenderConfig::default().with_adjusted_colors(true);
        assert_eq!(density_scale(&g, &capacity), g.block_capacity() as f32);
        assert_eq!(density_scale(&g, &adjusted), 2.0);
    }

    #[test]
    fn test_density_scale_never_zero() {
        let g = grid(10, 10);
        let adjusted = RenderConfig::default().with_adjusted_colors(true);
        assert_eq!(density_scale(&g, &adjusted), 1.0);
    }
}
