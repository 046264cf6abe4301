//! SVG backend
//!
//! Emits one `<rect>` per non-empty block on top of a white background and a
//! black frame. The document is assembled as a plain string; no XML library
//! is involved for markup this regular.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use mtxspy_core::Grid;

use crate::render::{density_scale, image_size, RenderConfig, RenderError, Renderer};

pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(&self, grid: &Grid, config: &RenderConfig, path: &Path) -> Result<(), RenderError> {
        fs::write(path, document(grid, config))?;
        Ok(())
    }
}

/// Assemble the full SVG document
pub fn document(grid: &Grid, config: &RenderConfig) -> String {
    let (width, height) = image_size(grid, config);

    let mut out = String::new();
    let _ = writeln!(out, "<svg xmlns='http://www.w3.org/2000/svg'");
    let _ = writeln!(out, "\twidth='{width}px' height='{height}px'");
    let _ = writeln!(out, "\tviewBox='0 0 {width} {height}'>");

    rect(&mut out, 0, 0, width, height, "white");
    draw_borders(&mut out, width, height, config.border);
    draw_blocks(&mut out, grid, config);

    out.push_str("</svg>\n");
    out
}

fn draw_borders(out: &mut String, width: u32, height: u32, border: u32) {
    if border == 0 {
        return;
    }
    rect(out, 0, 0, width, border, "black");
    rect(out, 0, 0, border, height, "black");
    rect(out, 0, height - border, width, border, "black");
    rect(out, width - border, 0, border, height, "black");
}

fn draw_blocks(out: &mut String, grid: &Grid, config: &RenderConfig) {
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
            let fill = config.palette.sample(count as f32 / scale).css();
            rect(out, x, y, side, side, &fill);
        }
    }
}

fn rect(out: &mut String, x: u32, y: u32, width: u32, height: u32, fill: &str) {
    let _ = writeln!(
        out,
        "<rect x='{x}' y='{y}' width='{width}' height='{height}' fill='{fill}' />"
    );
}
