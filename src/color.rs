use std::collections::BTreeMap;

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
            let hsl = Hsl::new(hue, 0.70, 0.45);
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
// Color mapping: numeric column → Color32
// ---------------------------------------------------------------------------

/// Assigns each numeric candidate column a stable colour, used both in the
/// selection list and for the chart drawn from that column.
#[derive(Debug, Clone, Default)]
pub struct ColumnColors {
    mapping: BTreeMap<String, Color32>,
}

impl ColumnColors {
    /// Build the mapping for a candidate list, in list order.
    pub fn new(columns: &[String]) -> Self {
        let palette = generate_palette(columns.len());
        ColumnColors {
            mapping: columns
                .iter()
                .cloned()
                .zip(palette.into_iter())
                .collect(),
        }
    }

    /// Look up a column's colour; unknown columns fall back to gray.
    pub fn color_for(&self, column: &str) -> Color32 {
        self.mapping.get(column).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_sizes_match() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn columns_keep_distinct_stable_colors() {
        let cols = vec!["goals".to_string(), "rating".to_string()];
        let colors = ColumnColors::new(&cols);

        assert_ne!(colors.color_for("goals"), colors.color_for("rating"));
        assert_eq!(colors.color_for("goals"), colors.color_for("goals"));
        assert_eq!(colors.color_for("unknown"), Color32::GRAY);
    }
}
