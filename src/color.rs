use std::hash::{DefaultHasher, Hash, Hasher};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series style provider
// ---------------------------------------------------------------------------

/// Picks the colour for a chart series. Styling lives here so the series
/// builder stays pure: the colour depends only on the series name, the data
/// shaping never sees it.
#[derive(Debug, Clone)]
pub struct SeriesStyle {
    palette: Vec<Color32>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        SeriesStyle {
            palette: generate_palette(12),
        }
    }
}

impl SeriesStyle {
    /// Colour for a named series, stable across frames.
    pub fn color_for(&self, series_name: &str) -> Color32 {
        if self.palette.is_empty() {
            return Color32::LIGHT_BLUE;
        }
        let mut hasher = DefaultHasher::new();
        series_name.hash(&mut hasher);
        let idx = (hasher.finish() % self.palette.len() as u64) as usize;
        self.palette[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(12).len(), 12);
    }

    #[test]
    fn series_color_is_stable_per_name() {
        let style = SeriesStyle::default();
        assert_eq!(style.color_for("gdp"), style.color_for("gdp"));
    }
}
