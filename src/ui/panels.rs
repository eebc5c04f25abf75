use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::{ChartType, MASS_MAX, MASS_MIN};
use crate::data::model::ALL_SPECIES;
use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filter Penguins Data");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Body mass threshold ----
            ui.strong("Maximum Body Mass (grams)");
            let mut threshold = state.filters.mass_threshold;
            let slider = egui::Slider::new(&mut threshold, MASS_MIN..=MASS_MAX)
                .integer()
                .suffix(" g");
            if ui.add(slider).changed() {
                state.set_mass_threshold(threshold);
            }
            ui.separator();

            // ---- Species checkboxes ----
            ui.strong("Species");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_species();
                }
            });
            for sp in ALL_SPECIES {
                let mut checked = state.filters.selected_species.contains(&sp);
                let label = RichText::new(format!(
                    "{sp} ({})",
                    state.dataset.species_count(sp)
                ))
                .color(state.species_colors.color_for(sp));
                if ui.checkbox(&mut checked, label).changed() {
                    state.toggle_species(sp);
                }
            }
            ui.separator();

            // ---- Chart type ----
            ui.strong("Chart Type");
            let mut chart = state.filters.chart_type;
            let scatter = ui.radio_value(&mut chart, ChartType::Scatterplot, "Scatterplot");
            let histo = ui.radio_value(&mut chart, ChartType::Histogram, "Histogram");
            if scatter.changed() || histo.changed() {
                state.set_chart_type(chart);
            }
            ui.separator();

            // ---- Links ----
            ui.label(RichText::new("Links").small());
            ui.hyperlink_to(
                "Palmer Penguins dataset",
                "https://allisonhorst.github.io/palmerpenguins/",
            );
            ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        });

    // Recompute visible indices after any widget changes (memoized).
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Palmer Penguins data dashboard").strong());
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} matching filters",
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Summary value boxes
// ---------------------------------------------------------------------------

/// Render the three value boxes: count, mean bill length, mean bill depth.
pub fn summary_row(ui: &mut Ui, state: &AppState) {
    let view = &state.visible_indices;
    let count = summary::count(view);
    let bill_length = summary::mean_bill_length(&state.dataset, view);
    let bill_depth = summary::mean_bill_depth(&state.dataset, view);

    ui.columns(3, |columns| {
        value_box(
            &mut columns[0],
            "Total penguins matching filters",
            count.to_string(),
        );
        value_box(
            &mut columns[1],
            "Average bill length (mm)",
            format_mm(bill_length),
        );
        value_box(
            &mut columns[2],
            "Average bill depth (mm)",
            format_mm(bill_depth),
        );
    });
}

fn value_box(ui: &mut Ui, caption: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(caption).small());
            ui.heading(value);
        });
    });
}

/// Empty views have no mean; show that explicitly instead of a NaN.
fn format_mm(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{v:.1} mm"),
        None => "no data".to_string(),
    }
}
