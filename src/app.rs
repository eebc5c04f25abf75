use eframe::egui;

use crate::data::filter::ChartType;
use crate::data::model::PenguinDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(dataset: PenguinDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, chart, data table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::summary_row(ui, &self.state);
            ui.add_space(8.0);

            let chart_title = match self.state.filters.chart_type {
                ChartType::Scatterplot => "Bill Length vs. Bill Depth Scatterplot",
                ChartType::Histogram => "Bill Length Histogram",
            };

            ui.columns(2, |columns| {
                columns[0].group(|ui| {
                    ui.strong(chart_title);
                    ui.separator();
                    plot::chart(ui, &self.state);
                });
                columns[1].group(|ui| {
                    ui.strong("Penguin Data");
                    ui.separator();
                    table::data_grid(ui, &self.state);
                });
            });
        });
    }
}
