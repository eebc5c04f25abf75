mod app;
mod color;
mod data;
mod state;
mod ui;

use app::PenguinDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The bundled dataset is the only data source; failing to parse it
    // leaves nothing to show.
    let dataset = match data::loader::load_embedded() {
        Ok(ds) => {
            log::info!("Loaded {} penguin records", ds.len());
            ds
        }
        Err(e) => {
            log::error!("Failed to load penguins dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Palmer Penguins Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(PenguinDashApp::new(dataset)))),
    )
}
