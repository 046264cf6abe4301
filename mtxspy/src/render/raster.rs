//! Raster backend over the `image` crate
//!
//! Paints the same rectangles as the SVG backend into an RGB buffer and lets
//! `image` pick the encoder from the output extension (png, jpg, bmp, tga).

use std::path::Path;

use image::{Rgb as Pixel, RgbImage};
use mtxspy_core::Grid;

use crate::render::{density_scale, image_size, Rgb, RenderConfig, RenderError, Renderer};

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render(&self, grid: &Grid, config: &RenderConfig, path: &Path) -> Result<(), RenderError> {
        let image = rasterize(grid, config);
        image.save(path)?;
        Ok(())
    }
}

/// Paint the grid into an RGB pixel buffer
pub fn rasterize(grid: &Grid, config: &RenderConfig) -> RgbImage {
    let (width, height) = image_size(grid, config);
    let mut image = RgbImage::from_pixel(width, height, pixel(Rgb::WHITE));

    draw_borders(&mut image, config.border);
    draw_blocks(&mut image, grid, config);
    image
}

fn draw_borders(image: &mut RgbImage, border: u32) {
    let (width, height) = image.dimensions();
    fill_rect(image, 0, 0, width, border, Rgb::BLACK);
    fill_rect(image, 0, 0, border, height, Rgb::BLACK);
    fill_rect(image, 0, height - border, width, border, Rgb::BLACK);
    fill_rect(image, width - border, 0, border, height, Rgb::BLACK);
}

fn draw_blocks(image: &mut RgbImage, grid: &Grid, config: &RenderConfig) {
    let scale = density_scale(grid, config);
    let side = config.block_pixels;

    for row in 0..grid.rows() {
        let y = config.border + row as u32 * side;
        for col in 0..grid.cols() {
            let count = grid.count_at(row, col);
            if count == 0 {
                continue;
            }
            let x = config.border + col as u32 * side;
            let color = config.palette.sample(count as f32 / scale);
            fill_rect(image, x, y, side, side, color);
        }
    }
}

fn fill_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
    let px = pixel(color);
    for yy in y..(y + height).min(image.height()) {
        for xx in x..(x + width).min(image.width()) {
            image.put_pixel(xx, yy, px);
        }
    }
}

fn pixel(color: Rgb) -> Pixel<u8> {
    Pixel([color.red, color.green, color.blue])
}
