use crate::color::SpeciesColors;
use crate::data::filter::{ChartType, FilterState, complete_indices};
use crate::data::model::{PenguinDataset, Species, ALL_SPECIES};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, immutable for the lifetime of the app.
    pub dataset: PenguinDataset,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached). All
    /// consumers (value boxes, chart, table) read this one view.
    pub visible_indices: Vec<usize>,

    /// Species → colour, shared by sidebar and chart.
    pub species_colors: SpeciesColors,

    /// The filter snapshot `visible_indices` was computed from.
    last_applied: Option<FilterState>,
}

impl AppState {
    pub fn new(dataset: PenguinDataset) -> Self {
        let mut state = AppState {
            dataset,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            species_colors: SpeciesColors::new(),
            last_applied: None,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` if the filters changed since the last
    /// computation. Cheap to call every frame.
    pub fn refilter(&mut self) {
        if self.last_applied.as_ref() == Some(&self.filters) {
            return;
        }
        self.visible_indices = complete_indices(&self.dataset, &self.filters);
        self.last_applied = Some(self.filters.clone());
    }

    /// Toggle a species in the filter selection.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.filters.selected_species.remove(&species) {
            self.filters.selected_species.insert(species);
        }
        self.refilter();
    }

    /// Select all species.
    pub fn select_all_species(&mut self) {
        self.filters.selected_species = ALL_SPECIES.into_iter().collect();
        self.refilter();
    }

    /// Deselect all species.
    pub fn select_no_species(&mut self) {
        self.filters.selected_species.clear();
        self.refilter();
    }

    /// Set the body-mass threshold (clamped to the slider domain).
    pub fn set_mass_threshold(&mut self, grams: f64) {
        self.filters.set_mass_threshold(grams);
        self.refilter();
    }

    /// Switch between scatterplot and histogram.
    pub fn set_chart_type(&mut self, chart: ChartType) {
        self.filters.chart_type = chart;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species, mass: f64) -> Penguin {
        Penguin {
            species,
            island: "Biscoe".to_string(),
            bill_length_mm: Some(44.0),
            bill_depth_mm: Some(16.0),
            flipper_length_mm: Some(205.0),
            body_mass_g: Some(mass),
            sex: None,
            year: Some(2009),
        }
    }

    fn state() -> AppState {
        AppState::new(PenguinDataset::new(vec![
            penguin(Species::Adelie, 3500.0),
            penguin(Species::Gentoo, 5500.0),
            penguin(Species::Chinstrap, 3800.0),
        ]))
    }

    #[test]
    fn defaults_show_every_complete_record() {
        let st = state();
        assert_eq!(st.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn mutators_refresh_the_cached_view() {
        let mut st = state();
        st.set_mass_threshold(4000.0);
        assert_eq!(st.visible_indices, vec![0, 2]);

        st.toggle_species(Species::Adelie);
        assert_eq!(st.visible_indices, vec![2]);

        st.select_no_species();
        assert!(st.visible_indices.is_empty());

        st.select_all_species();
        st.set_mass_threshold(6000.0);
        assert_eq!(st.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn refilter_is_a_no_op_while_filters_are_unchanged() {
        let mut st = state();
        let before = st.visible_indices.clone();
        st.refilter();
        st.refilter();
        assert_eq!(st.visible_indices, before);
    }

    #[test]
    fn direct_filter_edits_apply_on_next_refilter() {
        let mut st = state();
        st.filters.selected_species.remove(&Species::Gentoo);
        st.refilter();
        assert_eq!(st.visible_indices, vec![0, 2]);
    }
}
