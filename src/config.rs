use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "waveband.json";

/// Default band cutoff in Hz: keeps the X-band target content and drops the
/// ripple above 11.5 GHz.
pub const DEFAULT_CUTOFF_HZ: f64 = 1.15e10;

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Everything an analysis run needs, settable from the side panel or a JSON
/// config file. Nothing here is compiled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory scanned for measurement files.
    pub input_dir: Option<PathBuf>,
    /// Leading non-data rows to skip: lines before the CSV header, or data
    /// rows at the top of a Parquet file.
    pub skip_rows: usize,
    /// Header of the frequency-axis column, in Hz.
    pub frequency_column: String,
    /// Headers of the signal columns to analyze.
    pub signal_columns: Vec<String>,
    /// Low-pass cutoff in Hz.
    pub cutoff_hz: f64,
    /// Raw instrument header → friendly name, applied at load time.
    pub column_aliases: BTreeMap<String, String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input_dir: None,
            skip_rows: 0,
            frequency_column: "Frequency (Hz)".to_string(),
            signal_columns: vec![
                "Permittivity".to_string(),
                "Loss Tangent".to_string(),
                "S11 (dB)".to_string(),
                "S21 (dB)".to_string(),
            ],
            cutoff_hz: DEFAULT_CUTOFF_HZ,
            column_aliases: BTreeMap::new(),
        }
    }
}

impl AnalysisConfig {
    /// Load from a JSON file, falling back to defaults when the file is
    /// absent or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("ignoring malformed config {}: {e}", path.display());
                    AnalysisConfig::default()
                }
            },
            Err(_) => AnalysisConfig::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("serializing config")?;
        std::fs::write(path, text).with_context(|| format!("writing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cutoff_is_the_domain_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.cutoff_hz, 1.15e10);
        assert_eq!(config.skip_rows, 0);
        assert!(config.input_dir.is_none());
    }

    #[test]
    fn config_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waveband.json");

        let mut config = AnalysisConfig::default();
        config.cutoff_hz = 9.75e9;
        config.skip_rows = 2;
        config.signal_columns = vec!["S11 (dB)".to_string()];
        config
            .column_aliases
            .insert("freq_hz".to_string(), "Frequency (Hz)".to_string());
        config.save(&path).unwrap();

        let loaded = AnalysisConfig::load_or_default(&path);
        assert_eq!(loaded.cutoff_hz, 9.75e9);
        assert_eq!(loaded.skip_rows, 2);
        assert_eq!(loaded.signal_columns, vec!["S11 (dB)".to_string()]);
        assert_eq!(
            loaded.column_aliases.get("freq_hz").map(String::as_str),
            Some("Frequency (Hz)")
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AnalysisConfig::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(loaded.cutoff_hz, DEFAULT_CUTOFF_HZ);
    }
}
