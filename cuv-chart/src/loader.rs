//! Dataset loading from JSON and CSV.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;
use serde_json::Value;

use crate::error::{ChartError, Result};
use crate::model::{self, DataPoint, DEFAULT_LABEL_KEY, TOTAL_KEY};

/// Parse a JSON array of record objects.
pub fn from_json_str(json: &str, label_key: Option<&str>) -> Result<Vec<DataPoint>> {
    let value: Value = serde_json::from_str(json)?;
    let records = value.as_array().ok_or(ChartError::NotAnArray)?;
    model::from_records(records, label_key)
}

/// Parse CSV with a header row.
///
/// The label column is named by `label_key`, a `total` column is optional and
/// every other column is read as a number. Empty cells are skipped.
pub fn from_csv_str(csv_data: &str, label_key: Option<&str>) -> Result<Vec<DataPoint>> {
    let label_key = label_key.unwrap_or(DEFAULT_LABEL_KEY);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    let label_idx = headers.iter().position(|h| h == label_key);

    let mut points = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let label = label_idx
            .and_then(|idx| record.get(idx))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ChartError::MissingLabel {
                row,
                key: label_key.to_string(),
            })?;

        let mut values = BTreeMap::new();
        let mut total = None;
        for (idx, (header, cell)) in headers.iter().zip(record.iter()).enumerate() {
            if Some(idx) == label_idx || cell.is_empty() {
                continue;
            }
            let value = cell.parse::<f64>().map_err(|_| ChartError::UnparseableCell {
                label: label.to_string(),
                key: header.to_string(),
                cell: cell.to_string(),
            })?;
            if header == TOTAL_KEY {
                total = Some(value);
            } else {
                values.insert(header.to_string(), value);
            }
        }

        points.push(match total {
            Some(total) => DataPoint::with_total(label, values, total),
            None => DataPoint::new(label, values),
        });
    }

    Ok(points)
}

/// Load a dataset, choosing the parser from the file extension.
pub fn load_path(path: impl AsRef<Path>, label_key: Option<&str>) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let contents = std::fs::read_to_string(path)?;
    let points = match extension.as_str() {
        "json" => from_json_str(&contents, label_key)?,
        "csv" => from_csv_str(&contents, label_key)?,
        other => return Err(ChartError::UnsupportedFormat(other.to_string())),
    };

    info!("Loaded {} categories from {}", points.len(), path.display());
    Ok(points)
}
