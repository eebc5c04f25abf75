use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Species, ALL_SPECIES};

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
// Species colours – shared by the sidebar and the chart
// ---------------------------------------------------------------------------

/// Fixed colour per species so checkboxes, scatter points, and histogram
/// bars stay consistent.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<Species, Color32>,
}

impl SpeciesColors {
    pub fn new() -> Self {
        let palette = generate_palette(ALL_SPECIES.len());
        let mapping = ALL_SPECIES.into_iter().zip(palette).collect();
        SpeciesColors { mapping }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping.get(&species).copied().unwrap_or(Color32::GRAY)
    }
}

impl Default for SpeciesColors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn each_species_gets_a_distinct_colour() {
        let colors = SpeciesColors::new();
        let a = colors.color_for(Species::Adelie);
        let g = colors.color_for(Species::Gentoo);
        let c = colors.color_for(Species::Chinstrap);
        assert_ne!(a, g);
        assert_ne!(g, c);
        assert_ne!(a, c);
    }
}
