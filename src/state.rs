use crate::color::ColorMap;
use crate::config::AnalysisConfig;
use crate::pipeline::{self, ColumnAnalysis};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Analysis parameters, editable in the side panel.
    pub config: AnalysisConfig,

    /// Results of the last run, one entry per (file, column) pair.
    pub results: Vec<ColumnAnalysis>,

    /// Index into `results` shown in the central panel.
    pub selected: Option<usize>,

    /// Trace colours keyed by signal column name.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        let color_map = ColorMap::new(&config.signal_columns);
        AppState {
            config,
            results: Vec::new(),
            selected: None,
            color_map,
            status_message: None,
        }
    }

    /// Run the batch pipeline over the configured input directory and keep
    /// the resulting snapshots for the charts.
    pub fn run_analysis(&mut self) {
        let Some(dir) = self.config.input_dir.clone() else {
            self.status_message = Some("Choose an input directory first".to_string());
            return;
        };

        match pipeline::analyze_directory(&dir, &self.config) {
            Ok(results) => {
                log::info!("analyzed {} (file, column) pairs", results.len());
                self.status_message = results
                    .is_empty()
                    .then(|| "No loadable files produced results".to_string());
                self.selected = (!results.is_empty()).then_some(0);
                self.results = results;
                self.color_map = ColorMap::new(&self.config.signal_columns);
            }
            Err(e) => {
                log::error!("analysis failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Select the result shown in the central panel.
    pub fn select(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_result(&self) -> Option<&ColumnAnalysis> {
        self.selected.and_then(|i| self.results.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn run_without_an_input_dir_only_sets_the_status() {
        let mut state = AppState::new(AnalysisConfig::default());
        state.run_analysis();
        assert!(state.results.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn run_over_a_directory_selects_the_first_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("sweep.csv")).unwrap();
        f.write_all(b"Frequency (Hz),S11 (dB)\n1e9,0.5\n2e9,0.25\n")
            .unwrap();

        let config = AnalysisConfig {
            input_dir: Some(dir.path().to_path_buf()),
            signal_columns: vec!["S11 (dB)".to_string()],
            ..AnalysisConfig::default()
        };
        let mut state = AppState::new(config);
        state.run_analysis();

        assert_eq!(state.results.len(), 1);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.selected_result().unwrap().column, "S11 (dB)");
    }
}
