//! Rendering configuration

use crate::render::color::Palette;

/// Style and geometry settings shared by all rendering backends
///
/// `max_width` / `max_height` bound the emitted image; the actual image can
/// come out smaller because it is snapped to a whole number of blocks plus
/// the border.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Upper bound on image width in pixels
    pub max_width: u32,
    /// Upper bound on image height in pixels
    pub max_height: u32,
    /// Side length of one grid block in pixels
    pub block_pixels: u32,
    /// Black frame thickness in pixels
    pub border: u32,
    /// Scale density by the observed `max_occupancy` instead of the
    /// theoretical `block_capacity`
    pub adjust_colors: bool,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: 600,
            max_height: 600,
            block_pixels: 1,
            border: 2,
            adjust_colors: false,
            palette: Palette::blues(),
        }
    }
}

impl RenderConfig {
    /// Set the maximum image dimensions in pixels
    pub fn with_max_size(mut self, width: u32, height: u32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Set the pixel side length of one block
    pub fn with_block_pixels(mut self, block_pixels: u32) -> Self {
        self.block_pixels = block_pixels.max(1);
        self
    }

    /// Set the border thickness in pixels
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Scale colors by observed maximum occupancy
    pub fn with_adjusted_colors(mut self, adjust: bool) -> Self {
        self.adjust_colors = adjust;
        self
    }

    /// Replace the color ramp
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Viewport budget in blocks for one axis
    ///
    /// The border eats into the pixel budget on both sides; whatever is left
    /// divides into blocks. Clamped to one block so a degenerate budget still
    /// renders something.
    pub fn axis_budget(&self, max_pixels: u32) -> u64 {
        let usable = max_pixels.saturating_sub(2 * self.border);
        u64::from((usable / self.block_pixels.max(1)).max(1))
    }

    /// Viewport budget as `(max_grid_rows, max_grid_cols)`
    pub fn grid_budget(&self) -> (u64, u64) {
        (self.axis_budget(self.max_height), self.axis_budget(self.max_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!((config.max_width, config.max_height), (600, 600));
        assert_eq!(config.block_pixels, 1);
        assert_eq!(config.border, 2);
        assert!(!config.adjust_colors);
    }

    #[test]
    fn test_budget_subtracts_borders() {
        let config = RenderConfig::default().with_max_size(600, 400);
        assert_eq!(config.grid_budget(), (396, 596));
    }

    #[test]
    fn test_budget_divides_by_block_pixels() {
        let config = RenderConfig::default()
            .with_max_size(604, 604)
            .with_block_pixels(6);
        assert_eq!(config.grid_budget(), (100, 100));
    }

    #[test]
    fn test_budget_never_zero() {
        let config = RenderConfig::default().with_max_size(1, 1);
        assert_eq!(config.grid_budget(), (1, 1));
    }

    #[test]
    fn test_builders_chain() {
        let config = RenderConfig::default()
            .with_block_pixels(0)
            .with_border(5)
            .with_adjusted_colors(true);
        assert_eq!(config.block_pixels, 1);
        assert_eq!(config.border, 5);
        assert!(config.adjust_colors);
    }
}
