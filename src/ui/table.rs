use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data grid – the filtered records as a table
// ---------------------------------------------------------------------------

/// Render the filtered view as a striped table with the columns the
/// dashboard cares about.
pub fn data_grid(ui: &mut Ui, state: &AppState) {
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Species",
                "Island",
                "Bill length (mm)",
                "Bill depth (mm)",
                "Body mass (g)",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, state.visible_indices.len(), |mut row| {
                let idx = state.visible_indices[row.index()];
                let p = &state.dataset.penguins[idx];
                row.col(|ui| {
                    ui.colored_label(
                        state.species_colors.color_for(p.species),
                        p.species.to_string(),
                    );
                });
                row.col(|ui| {
                    ui.label(&p.island);
                });
                row.col(|ui| {
                    ui.label(format_opt(p.bill_length_mm, 1));
                });
                row.col(|ui| {
                    ui.label(format_opt(p.bill_depth_mm, 1));
                });
                row.col(|ui| {
                    ui.label(format_opt(p.body_mass_g, 0));
                });
            });
        });
}

fn format_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "–".to_string(),
    }
}
