use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::data::filter::ChartType;
use crate::data::model::{Species, ALL_SPECIES};
use crate::state::AppState;

/// Bin width for the bill-length histogram, in millimetres.
const HISTOGRAM_BIN_MM: f64 = 2.0;

// ---------------------------------------------------------------------------
// Chart (central panel) – scatterplot or stacked histogram
// ---------------------------------------------------------------------------

/// Render the chart card for the current filtered view.
pub fn chart(ui: &mut Ui, state: &AppState) {
    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No penguins match the current filters");
        });
        return;
    }

    match state.filters.chart_type {
        ChartType::Scatterplot => scatterplot(ui, state),
        ChartType::Histogram => histogram(ui, state),
    }
}

/// Bill length vs bill depth, one point series per species.
fn scatterplot(ui: &mut Ui, state: &AppState) {
    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for sp in ALL_SPECIES {
                let points: PlotPoints = species_points(state, sp).into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(sp.to_string())
                        .color(state.species_colors.color_for(sp))
                        .radius(3.0),
                );
            }
        });
}

fn species_points(state: &AppState, species: Species) -> Vec<[f64; 2]> {
    state
        .visible_indices
        .iter()
        .map(|&i| &state.dataset.penguins[i])
        .filter(|p| p.species == species)
        .filter_map(|p| Some([p.bill_length_mm?, p.bill_depth_mm?]))
        .collect()
}

/// Stacked per-species histogram of bill length.
fn histogram(ui: &mut Ui, state: &AppState) {
    let lengths: Vec<(Species, f64)> = state
        .visible_indices
        .iter()
        .map(|&i| &state.dataset.penguins[i])
        .filter_map(|p| Some((p.species, p.bill_length_mm?)))
        .collect();

    let Some(lo) = lengths.iter().map(|&(_, v)| v).reduce(f64::min) else {
        return;
    };
    let lo = (lo / HISTOGRAM_BIN_MM).floor() * HISTOGRAM_BIN_MM;
    let hi = lengths.iter().map(|&(_, v)| v).fold(lo, f64::max);
    let n_bins = (((hi - lo) / HISTOGRAM_BIN_MM).floor() as usize) + 1;

    let mut charts: Vec<BarChart> = Vec::new();
    for sp in ALL_SPECIES {
        let mut counts = vec![0usize; n_bins];
        for &(s, v) in lengths.iter().filter(|&&(s, _)| s == sp) {
            let bin = ((v - lo) / HISTOGRAM_BIN_MM) as usize;
            counts[bin.min(n_bins - 1)] += 1;
        }

        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| {
                let center = lo + (bin as f64 + 0.5) * HISTOGRAM_BIN_MM;
                Bar::new(center, count as f64).width(HISTOGRAM_BIN_MM * 0.95)
            })
            .collect();

        let mut bar_chart = BarChart::new(bars)
            .name(sp.to_string())
            .color(state.species_colors.color_for(sp));
        let below: Vec<&BarChart> = charts.iter().collect();
        bar_chart = bar_chart.stack_on(&below);
        charts.push(bar_chart);
    }

    Plot::new("bill_histogram")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for bar_chart in charts {
                plot_ui.bar_chart(bar_chart);
            }
        });
}
