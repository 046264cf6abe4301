//! Density-to-color mapping

/// One 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { red: 255, green: 255, blue: 255 };
    pub const BLACK: Rgb = Rgb { red: 0, green: 0, blue: 0 };

    /// CSS `rgb(r, g, b)` form used in SVG fill attributes
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Multi-stop color ramp sampled by density
///
/// Density 0 renders white regardless of the ramp, so empty blocks disappear
/// into the background; positive densities interpolate linearly between
/// adjacent stops.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from at least two color stops
    pub fn new(stops: Vec<Rgb>) -> Self {
        assert!(stops.len() >= 2, "a palette needs at least two stops");
        Self { stops }
    }

    /// The default sequential blue ramp, light to dark
    pub fn blues() -> Self {
        Self::new(vec![
            Rgb { red: 107, green: 174, blue: 214 },
            Rgb { red: 66, green: 146, blue: 198 },
            Rgb { red: 33, green: 113, blue: 181 },
            Rgb { red: 8, green: 81, blue: 156 },
            Rgb { red: 8, green: 48, blue: 107 },
        ])
    }

    /// Color for a density in `[0, 1]`; values outside are clamped
    pub fn sample(&self, density: f32) -> Rgb {
        if density <= 0.0 {
            return Rgb::WHITE;
        }
        let density = density.min(1.0);

        let segments = (self.stops.len() - 1) as f32;
        let scaled = density * segments;
        let i = (scaled as usize).min(self.stops.len() - 2);
        let t = scaled - i as f32;

        let a = self.stops[i];
        let b = self.stops[i + 1];
        Rgb {
            red: interpolate(a.red, b.red, t),
            green: interpolate(a.green, b.green, t),
            blue: interpolate(a.blue, b.blue, t),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::blues()
    }
}

fn interpolate(a: u8, b: u8, t: f32) -> u8 {
    ((1.0 - t) * f32::from(a) + t * f32::from(b)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_density_is_white() {
        assert_eq!(Palette::blues().sample(0.0), Rgb::WHITE);
        assert_eq!(Palette::blues().sample(-1.0), Rgb::WHITE);
    }

    #[test]
    fn test_full_density_is_darkest_stop() {
        assert_eq!(
            Palette::blues().sample(1.0),
            Rgb { red: 8, green: 48, blue: 107 }
        );
    }

    #[test]
    fn test_over_one_clamps() {
        assert_eq!(Palette::blues().sample(7.5), Palette::blues().sample(1.0));
    }

    #[test]
    fn test_stop_boundaries_hit_stops() {
        // Four segments, so density 0.25 lands exactly on the second stop.
        assert_eq!(
            Palette::blues().sample(0.25),
            Rgb { red: 66, green: 146, blue: 198 }
        );
    }

    #[test]
    fn test_midpoint_interpolates() {
        let palette = Palette::new(vec![
            Rgb { red: 0, green: 0, blue: 0 },
            Rgb { red: 200, green: 100, blue: 50 },
        ]);
        assert_eq!(
            palette.sample(0.5),
            Rgb { red: 100, green: 50, blue: 25 }
        );
    }

    #[test]
    fn test_css_formatting() {
        let color = Rgb { red: 8, green: 48, blue: 107 };
        assert_eq!(color.css(), "rgb(8, 48, 107)");
    }
}
