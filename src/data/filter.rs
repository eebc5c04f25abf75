use std::collections::BTreeSet;

use super::model::{PenguinDataset, Species, ALL_SPECIES};

// ---------------------------------------------------------------------------
// Filter state – the user's current selections
// ---------------------------------------------------------------------------

/// Slider domain for the body-mass threshold, in grams.
pub const MASS_MIN: f64 = 2000.0;
pub const MASS_MAX: f64 = 6000.0;

/// Which chart the central card draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Scatterplot,
    Histogram,
}

/// Current filter selections. An empty species set is legal and simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub selected_species: BTreeSet<Species>,
    pub mass_threshold: f64,
    pub chart_type: ChartType,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            selected_species: ALL_SPECIES.into_iter().collect(),
            mass_threshold: MASS_MAX,
            chart_type: ChartType::Scatterplot,
        }
    }
}

impl FilterState {
    /// Set the mass threshold, clamped to the slider domain. Values outside
    /// [`MASS_MIN`, `MASS_MAX`] can only arrive programmatically; the widget
    /// already enforces the range.
    pub fn set_mass_threshold(&mut self, grams: f64) {
        self.mass_threshold = grams.clamp(MASS_MIN, MASS_MAX);
    }
}

// ---------------------------------------------------------------------------
// Filtering engine – pure functions from (dataset, filters) to row indices
// ---------------------------------------------------------------------------

/// Return indices of records that pass the species and body-mass filters.
///
/// A record passes when:
/// * its species is in `selected_species`, and
/// * its body mass is strictly below `mass_threshold`.
///
/// A null body mass never satisfies the comparison, so such records are
/// excluded. Row order of the dataset is preserved.
pub fn filtered_indices(dataset: &PenguinDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            filters.selected_species.contains(&p.species)
                && p.body_mass_g.is_some_and(|m| m < filters.mass_threshold)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Like [`filtered_indices`], but additionally drops records missing any of
/// the fields the plots draw from (bill length, bill depth, body mass).
/// This is the view every dashboard consumer reads, matching the single
/// filtered frame the value boxes, chart, and table all share.
pub fn complete_indices(dataset: &PenguinDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            filters.selected_species.contains(&p.species)
                && p.body_mass_g.is_some_and(|m| m < filters.mass_threshold)
                && p.has_plot_fields()
        })
        .map(|(i, _)| i)
        .collect()
}
