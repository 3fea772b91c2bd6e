//! Orchestration: one pass over a directory of measurement files, running
//! the transform → filter → reconstruct pipeline per configured column.
//!
//! Each file is independent: a failure is reported and skipped, never
//! aborting the rest of the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::AnalysisConfig;
use crate::data::loader;
use crate::dsp::band::{filter_band, Band};
use crate::dsp::reconstruct::reconstruct;
use crate::dsp::spectrum::transform;

// ---------------------------------------------------------------------------
// ColumnAnalysis – the immutable per-(file, column) result bundle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ColumnAnalysis {
    pub file: PathBuf,
    pub column: String,
    /// Full frequency axis in Hz.
    pub frequency: Vec<f64>,
    /// Raw samples as loaded.
    pub samples: Vec<f64>,
    /// Polar spectrum over the full axis.
    pub magnitude: Vec<f64>,
    pub phase: Vec<f64>,
    /// Surviving low-pass band.
    pub band: Band,
    /// Real signal recovered from the filtered band.
    pub reconstructed: Vec<f64>,
}

impl ColumnAnalysis {
    /// Short label for result lists and chart legends.
    pub fn label(&self) -> String {
        let stem = self
            .file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string());
        format!("{stem} · {}", self.column)
    }
}

// ---------------------------------------------------------------------------
// Directory / file orchestration
// ---------------------------------------------------------------------------

/// Run the full pipeline over every loadable file in `dir`.
pub fn analyze_directory(dir: &Path, config: &AnalysisConfig) -> Result<Vec<ColumnAnalysis>> {
    let files = loader::discover_files(dir)?;
    log::info!("found {} loadable files in {}", files.len(), dir.display());

    let mut results = Vec::new();
    for path in files {
        match analyze_file(&path, config) {
            Ok(mut analyses) => results.append(&mut analyses),
            Err(e) => log::error!("skipping {}: {e:#}", path.display()),
        }
    }
    Ok(results)
}

/// Transform, filter, and reconstruct every configured signal column of one
/// file.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Result<Vec<ColumnAnalysis>> {
    let table = loader::load_table(path, config.skip_rows, &config.column_aliases)
        .with_context(|| format!("loading {}", path.display()))?;
    let frequency = table.column(&config.frequency_column)?.to_vec();

    let mut analyses = Vec::with_capacity(config.signal_columns.len());
    for name in &config.signal_columns {
        let samples = table.column(name)?;
        let spectrum = transform(samples, &frequency)?;
        let band = filter_band(
            &spectrum.magnitude,
            &spectrum.phase,
            &frequency,
            config.cutoff_hz,
        )?;
        let reconstructed = reconstruct(&band.magnitude, &band.phase)?;
        log::info!(
            "{} / {name}: kept {} of {} bins at or below {:.3} GHz",
            path.display(),
            band.len(),
            frequency.len(),
            config.cutoff_hz / 1e9
        );
        analyses.push(ColumnAnalysis {
            file: path.to_path_buf(),
            column: name.clone(),
            frequency: frequency.clone(),
            samples: samples.to_vec(),
            magnitude: spectrum.magnitude,
            phase: spectrum.phase,
            band,
            reconstructed,
        });
    }
    Ok(analyses)
}
