use eframe::egui;

use crate::config::AnalysisConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WavebandApp {
    pub state: AppState,
}

impl WavebandApp {
    pub fn new(config: AnalysisConfig) -> Self {
        WavebandApp {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for WavebandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: analysis parameters and results ----
        egui::SidePanel::left("analysis_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::analysis_charts(ui, &self.state);
        });
    }
}
