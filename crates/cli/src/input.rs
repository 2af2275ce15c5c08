//! CSV column loading (polars lazy reader).

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Read two numeric columns from a headered CSV, as `f64`.
///
/// Integer columns are cast; nulls are rejected with the offending row.
pub fn read_xy(path: &Path, x_name: &str, y_name: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), path = %path.display(), "csv_loaded");
    let x = column_f64(&df, x_name)?;
    let y = column_f64(&df, y_name)?;
    Ok((x, y))
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null in column `{name}` at row {row}")))
        .collect()
}
