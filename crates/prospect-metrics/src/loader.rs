//! Loading spreadsheet exports into [`ProspectRecord`]s.
//!
//! CSV goes through polars; JSON is expected to be an array of
//! header -> value objects, the shape a spreadsheet-to-JSON export produces.

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{DashboardError, Result, ResultExt};
use crate::record::{CellValue, ProspectRecord};

/// How many rows polars looks at to infer column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Options for reading input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// CSV field separator.
    /// Default: `,`
    pub separator: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { separator: b',' }
    }
}

/// Load every record of a `.csv` or `.json` export.
///
/// Rows where every cell is blank are dropped. A file that yields no
/// records at all is an [`DashboardError::EmptyDataset`].
pub fn load_records(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<ProspectRecord>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !matches!(extension.as_str(), "csv" | "txt" | "json") {
        return Err(DashboardError::UnsupportedFormat(extension));
    }
    if !path.exists() {
        return Err(DashboardError::FileNotFound(path.display().to_string()));
    }

    info!("Loading records from: {}", path.display());
    let records = match extension.as_str() {
        "csv" | "txt" => load_csv(path, options)?,
        _ => load_json(path)?,
    };

    if records.is_empty() {
        return Err(DashboardError::EmptyDataset(path.display().to_string()));
    }
    info!("Loaded {} records", records.len());
    Ok(records)
}

fn load_csv(path: &Path, options: &LoadOptions) -> Result<Vec<ProspectRecord>> {
    let df = match read_csv(path, options, Some(INFER_SCHEMA_ROWS)) {
        Ok(df) => df,
        Err(e) => {
            // Mixed columns (a serial date followed by text) break inference
            debug!("Typed CSV read failed, retrying as text: {}", e);
            read_csv(path, options, Some(0))
                .context(format!("Failed to read CSV '{}'", path.display()))?
        }
    };
    records_from_frame(&df)
}

fn read_csv(path: &Path, options: &LoadOptions, infer_rows: Option<usize>) -> PolarsResult<DataFrame> {
    csv_options(options, infer_rows)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
}

fn csv_options(options: &LoadOptions, infer_rows: Option<usize>) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_infer_schema_length(infer_rows)
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(options.separator)
                .with_quote_char(Some(b'"')),
        )
}

/// Parse CSV text already in memory.
pub fn records_from_csv_str(content: &str, options: &LoadOptions) -> Result<Vec<ProspectRecord>> {
    let df = csv_options(options, Some(INFER_SCHEMA_ROWS))
        .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
        .finish()?;
    records_from_frame(&df)
}

fn load_json(path: &Path) -> Result<Vec<ProspectRecord>> {
    let content = std::fs::read_to_string(path)?;
    records_from_json_str(&content)
}

/// Parse a JSON array of row objects.
pub fn records_from_json_str(content: &str) -> Result<Vec<ProspectRecord>> {
    let records: Vec<ProspectRecord> =
        serde_json::from_str(content).context("Expected a JSON array of row objects")?;
    Ok(drop_blank_rows(records))
}

/// Convert a loaded frame row by row.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<ProspectRecord>> {
    let mut records = vec![ProspectRecord::new(); df.height()];

    for column in df.get_columns() {
        let header = column.name().trim_start_matches('\u{feff}').trim().to_string();
        if header.is_empty() {
            continue;
        }
        let series = column.as_materialized_series();
        for (idx, record) in records.iter_mut().enumerate() {
            let cell = cell_from_any(series.get(idx)?);
            if cell != CellValue::Empty {
                record.insert(header.clone(), cell);
            }
        }
    }

    Ok(drop_blank_rows(records))
}

fn drop_blank_rows(records: Vec<ProspectRecord>) -> Vec<ProspectRecord> {
    let before = records.len();
    let kept: Vec<ProspectRecord> = records
        .into_iter()
        .filter(ProspectRecord::has_content)
        .collect();
    if kept.len() < before {
        warn!("Dropped {} blank rows", before - kept.len());
    }
    kept
}

fn cell_from_any(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Empty,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::String(s) => CellValue::from(s),
        AnyValue::StringOwned(s) => CellValue::from(s.as_str()),
        AnyValue::Float64(f) => CellValue::Number(f),
        AnyValue::Float32(f) => CellValue::Number(f as f64),
        AnyValue::Int64(i) => CellValue::Number(i as f64),
        AnyValue::Int32(i) => CellValue::Number(i as f64),
        AnyValue::Int16(i) => CellValue::Number(i as f64),
        AnyValue::Int8(i) => CellValue::Number(i as f64),
        AnyValue::UInt64(u) => CellValue::Number(u as f64),
        AnyValue::UInt32(u) => CellValue::Number(u as f64),
        AnyValue::UInt16(u) => CellValue::Number(u as f64),
        AnyValue::UInt8(u) => CellValue::Number(u as f64),
        other => CellValue::Text(other.to_string()),
    }
}
