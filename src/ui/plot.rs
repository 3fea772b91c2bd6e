use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Analysis charts (central panel)
// ---------------------------------------------------------------------------

/// Render the chart stack for the selected (file, column) result: the
/// measured trace, the filtered magnitude and phase, and the reconstructed
/// signal over the filtered frequency axis.
///
/// Every chart draws whatever its series holds; an empty band simply yields
/// empty charts.
pub fn analysis_charts(ui: &mut Ui, state: &AppState) {
    let Some(analysis) = state.selected_result() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a directory and run the analysis  (File → Open…)");
        });
        return;
    };

    let color = state.color_map.color_for(&analysis.column);

    ui.heading(analysis.label());
    let chart_height = (ui.available_height() / 4.0 - 10.0).max(110.0);

    chart(
        ui,
        "raw_trace",
        "Measured trace",
        &analysis.column,
        chart_height,
        color,
        points(&analysis.frequency, &analysis.samples),
    );
    chart(
        ui,
        "band_magnitude",
        "Filtered magnitude",
        "|X|",
        chart_height,
        color,
        points(&analysis.band.frequency, &analysis.band.magnitude),
    );
    chart(
        ui,
        "band_phase",
        "Filtered phase",
        "Phase (rad)",
        chart_height,
        color,
        points(&analysis.band.frequency, &analysis.band.phase),
    );
    chart(
        ui,
        "reconstructed",
        "Reconstructed signal",
        &analysis.column,
        chart_height,
        color,
        points(&analysis.band.frequency, &analysis.reconstructed),
    );
}

/// Pair a frequency axis (Hz) with a value series, plotting in GHz.
fn points<'a>(frequency_hz: &'a [f64], values: &'a [f64]) -> PlotPoints<'a> {
    frequency_hz
        .iter()
        .zip(values)
        .map(|(&f, &v)| [f / 1e9, v])
        .collect()
}

fn chart(
    ui: &mut Ui,
    id: &str,
    name: &str,
    y_label: &str,
    height: f32,
    color: Color32,
    points: PlotPoints,
) {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Frequency (GHz)")
        .y_axis_label(y_label)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name(name).color(color).width(1.5));
        });
}
