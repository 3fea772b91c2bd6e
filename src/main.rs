mod app;
mod color;
mod config;
mod data;
mod dsp;
mod pipeline;
mod state;
mod ui;

use std::path::Path;

use app::WavebandApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::AnalysisConfig::load_or_default(Path::new(config::CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Waveband – Waveguide Sweep Analyzer",
        options,
        Box::new(|_cc| Ok(Box::new(WavebandApp::new(config)))),
    )
}
