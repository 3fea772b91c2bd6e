use std::path::Path;

use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – analysis parameters and results
// ---------------------------------------------------------------------------

/// Render the left panel: the editable configuration surface on top, the
/// result list and summary table below.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            config_section(ui, state);
            ui.separator();
            results_section(ui, state);
        });
}

fn config_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Input");

    ui.horizontal(|ui: &mut Ui| {
        let label = state
            .config
            .input_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "<no directory>".to_string());
        ui.label(label);
        if ui.small_button("Choose…").clicked() {
            open_directory_dialog(state);
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Header rows to skip:");
        ui.add(DragValue::new(&mut state.config.skip_rows).range(0..=100));
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Frequency column:");
        ui.text_edit_singleline(&mut state.config.frequency_column);
    });

    ui.add_space(4.0);
    ui.strong("Signal columns");

    let mut remove: Option<usize> = None;
    for (i, name) in state.config.signal_columns.iter_mut().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            ui.text_edit_singleline(name);
            if ui.small_button("✕").clicked() {
                remove = Some(i);
            }
        });
    }
    if let Some(i) = remove {
        state.config.signal_columns.remove(i);
    }
    if ui.small_button("+ Add column").clicked() {
        state.config.signal_columns.push(String::new());
    }

    ui.add_space(4.0);
    ui.strong("Band filter");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Cutoff:");
        let mut cutoff_ghz = state.config.cutoff_hz / 1e9;
        if ui
            .add(
                DragValue::new(&mut cutoff_ghz)
                    .speed(0.1)
                    .range(0.0..=1000.0)
                    .suffix(" GHz"),
            )
            .changed()
        {
            state.config.cutoff_hz = cutoff_ghz * 1e9;
        }
    });

    ui.add_space(6.0);
    if ui.button("Run analysis").clicked() {
        state.run_analysis();
    }
}

fn results_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong(format!("Results ({})", state.results.len()));

    if state.results.is_empty() {
        ui.label("No results yet.");
        return;
    }

    let mut clicked: Option<usize> = None;
    for (i, analysis) in state.results.iter().enumerate() {
        let is_selected = state.selected == Some(i);
        if ui.selectable_label(is_selected, analysis.label()).clicked() {
            clicked = Some(i);
        }
    }
    if let Some(i) = clicked {
        state.select(i);
    }

    ui.add_space(4.0);
    egui::CollapsingHeader::new(RichText::new("Summary").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            summary_table(ui, state);
        });
}

/// Per-trace bin counts: total transformed bins and survivors of the
/// low-pass filter.
fn summary_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto())
        .column(Column::auto())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Trace");
            });
            header.col(|ui| {
                ui.strong("Bins");
            });
            header.col(|ui| {
                ui.strong("Kept");
            });
        })
        .body(|mut body| {
            for analysis in &state.results {
                body.row(16.0, |mut row| {
                    row.col(|ui| {
                        ui.label(analysis.label());
                    });
                    row.col(|ui| {
                        ui.label(analysis.frequency.len().to_string());
                    });
                    row.col(|ui| {
                        ui.label(analysis.band.len().to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open directory…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
            if ui.button("Save config").clicked() {
                save_config(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Run analysis").clicked() {
            state.run_analysis();
        }

        ui.separator();

        if !state.results.is_empty() {
            ui.label(format!("{} traces analyzed", state.results.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn save_config(state: &mut AppState) {
    match state.config.save(Path::new(config::CONFIG_FILE)) {
        Ok(()) => {
            log::info!("config saved to {}", config::CONFIG_FILE);
            state.status_message = None;
        }
        Err(e) => {
            log::error!("failed to save config: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Directory dialog
// ---------------------------------------------------------------------------

pub fn open_directory_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Choose measurement directory")
        .pick_folder();

    if let Some(dir) = dir {
        log::info!("input directory set to {}", dir.display());
        state.config.input_dir = Some(dir);
        state.status_message = None;
    }
}
