//! Typed record extraction from a loaded frame.

use std::path::Path;
use std::time::Instant;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, info};

use alumni_model::{Dataset, Record};

use crate::error::{IngestError, Result};
use crate::reader::read_csv_frame;
use crate::values::{any_to_f64, any_to_string};

pub const NAME_COLUMN: &str = "Name";
pub const PLATFORM_COLUMN: &str = "Platform";
pub const POINTS_COLUMN: &str = "Points";

/// Load an alumni CSV into a validated [`Dataset`].
///
/// The file needs `Name`, `Platform` and `Points` columns; any others are
/// ignored. The first invalid row rejects the whole file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let start = Instant::now();
    let df = read_csv_frame(path)?;
    let dataset = load_dataset_from_frame(&df)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Convert an in-memory frame into a validated [`Dataset`].
///
/// Row numbers in errors are 1-based data rows (the header is not counted).
pub fn load_dataset_from_frame(df: &DataFrame) -> Result<Dataset> {
    let names = required_column(df, NAME_COLUMN)?;
    let platforms = required_column(df, PLATFORM_COLUMN)?;
    let points = required_column(df, POINTS_COLUMN)?;
    debug!(
        name_dtype = %names.dtype(),
        platform_dtype = %platforms.dtype(),
        points_dtype = %points.dtype(),
        "resolved dataset columns"
    );

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 1;
        let name = text_cell(names, idx, NAME_COLUMN, row)?;
        let platform = text_cell(platforms, idx, PLATFORM_COLUMN, row)?;
        let value = points_cell(points, idx, row)?;
        records.push(Record::new(row, name, platform, value)?);
    }
    Ok(Dataset::new(records))
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

fn required_column<'a>(df: &'a DataFrame, name: &'static str) -> Result<&'a Column> {
    let actual = df
        .get_column_names()
        .into_iter()
        .find(|column| normalize_header(column.as_str()) == name)
        .ok_or(IngestError::MissingColumn { column: name })?;
    Ok(df.column(actual.as_str())?)
}

fn text_cell(column: &Column, idx: usize, name: &'static str, row: usize) -> Result<String> {
    let value = any_to_string(column.get(idx)?);
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IngestError::MissingValue { column: name, row });
    }
    Ok(trimmed.to_string())
}

fn points_cell(column: &Column, idx: usize, row: usize) -> Result<f64> {
    let value = column.get(idx)?;
    if let Some(points) = any_to_f64(&value) {
        return Ok(points);
    }
    let raw = any_to_string(value);
    if raw.trim().is_empty() {
        return Err(IngestError::MissingValue {
            column: POINTS_COLUMN,
            row,
        });
    }
    Err(IngestError::InvalidPoints { row, value: raw })
}
