use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Color palette generators
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_to_color32((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

/// Sequential blue ramp (light → dark) for per-site pie slices.
pub fn sequential_blues(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![hsl_to_color32(210.0, 0.7, 0.5)],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                hsl_to_color32(210.0, 0.7, 0.8 - 0.5 * t)
            })
            .collect(),
    }
}

/// Diverging red/blue pair for the single-site outcome pie.
pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => hsl_to_color32(5.0, 0.65, 0.5),
        Outcome::Success => hsl_to_color32(210.0, 0.65, 0.45),
    }
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Color32
// ---------------------------------------------------------------------------

/// Maps the booster categories of a dataset to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the sorted set of category labels.
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category; unknown ones are grey.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sizes() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
        assert_eq!(sequential_blues(4).len(), 4);
        assert_eq!(sequential_blues(1).len(), 1);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        let colors = generate_palette(5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(outcome_color(Outcome::Failure), outcome_color(Outcome::Success));
    }

    #[test]
    fn test_color_map_lookup() {
        let categories: BTreeSet<String> =
            ["B4", "FT", "v1.0"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new(&categories);
        assert_ne!(map.color_for("FT"), map.color_for("B4"));
        assert_eq!(map.color_for("unknown"), Color32::GRAY);
    }
}
