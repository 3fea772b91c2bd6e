use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::DataTable;

/// Extensions the directory scan will attempt to load.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["csv", "parquet", "pq"];

/// A file whose extension names neither supported tabular format.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported file extension: .{extension}")]
pub struct UnrecognizedFormat {
    pub extension: String,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a measurement table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`             – delimited text; the header row follows `skip_rows`
///   leading non-data lines
/// * `.parquet` / `.pq` – columnar file; the first `skip_rows` data rows are
///   dropped (the schema carries the headers)
///
/// `aliases` maps raw instrument headers to the names the analysis expects.
pub fn load_table(
    path: &Path,
    skip_rows: usize,
    aliases: &BTreeMap<String, String>,
) -> Result<DataTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path, skip_rows)?,
        "parquet" | "pq" => load_parquet(path, skip_rows)?,
        other => {
            return Err(UnrecognizedFormat {
                extension: other.to_string(),
            }
            .into())
        }
    };
    Ok(table.renamed(aliases))
}

/// List the loadable files in `dir`: regular files with a recognized
/// extension, hidden entries skipped, sorted by file name.
///
/// Filtering happens before any load attempt so that stray files in the
/// directory never abort a run.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("reading directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if RECOGNIZED_EXTENSIONS.contains(&ext.as_str()) {
            files.push(path);
        } else {
            log::debug!("ignoring {} (unrecognized extension)", path.display());
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path, skip_rows: usize) -> Result<DataTable> {
    let file = File::open(path).context("opening CSV")?;
    let mut reader = BufReader::new(file);

    let mut skipped = String::new();
    for n in 0..skip_rows {
        skipped.clear();
        let read = reader
            .read_line(&mut skipped)
            .context("skipping leading rows")?;
        if read == 0 {
            bail!("file ended after {n} of {skip_rows} skipped leading rows");
        }
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut cells: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];
    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, cell) in cells.iter_mut().enumerate() {
            cell.push(parse_cell(record.get(col_idx).unwrap_or("")));
        }
    }

    Ok(build_table(headers, cells))
}

/// Empty cells become NaN so a sparse column stays numeric; anything else
/// that fails to parse marks the whole column non-numeric.
fn parse_cell(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

fn load_parquet(path: &Path, skip_rows: usize) -> Result<DataTable> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut headers: Vec<String> = Vec::new();
    let mut cells: Vec<Vec<Option<f64>>> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        if headers.is_empty() {
            headers = batch
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().clone())
                .collect();
            cells = vec![Vec::new(); headers.len()];
        }
        for (col_idx, col) in batch.columns().iter().enumerate() {
            for row in 0..batch.num_rows() {
                cells[col_idx].push(numeric_value(col, row));
            }
        }
    }

    for col in &mut cells {
        if skip_rows >= col.len() {
            col.clear();
        } else {
            col.drain(..skip_rows);
        }
    }

    Ok(build_table(headers, cells))
}

/// Read one cell of an Arrow column as f64, if the column is numeric.
fn numeric_value(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return Some(f64::NAN);
    }
    match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Shared assembly
// ---------------------------------------------------------------------------

/// Keep the columns where every cell parsed; drop the rest from the numeric
/// view (their headers stay listed on the table).
fn build_table(headers: Vec<String>, cells: Vec<Vec<Option<f64>>>) -> DataTable {
    let mut columns = BTreeMap::new();
    let mut n_rows = 0;
    for (header, col) in headers.iter().zip(cells) {
        n_rows = col.len();
        match col.into_iter().collect::<Option<Vec<f64>>>() {
            Some(values) => {
                columns.insert(header.clone(), values);
            }
            None => log::debug!("column '{header}' is not numeric; excluded"),
        }
    }
    DataTable::new(headers, columns, n_rows)
}
