//! Categories, series legend and dataset validation.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, Result};

/// Record field holding the category label unless the caller overrides it.
pub const DEFAULT_LABEL_KEY: &str = "label";

/// Record field holding a precomputed category total.
pub const TOTAL_KEY: &str = "total";

/// Relative tolerance when comparing a precomputed total with its series sum.
const TOTAL_TOLERANCE: f64 = 1e-6;

/// One series of the stack: its record key and the name shown in tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
}

impl LegendEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Legend for per-namespace client counts.
    pub fn client_usage() -> Vec<LegendEntry> {
        vec![
            LegendEntry::new("non_entity_tokens", "non-entity tokens"),
            LegendEntry::new("distinct_entities", "unique entities"),
        ]
    }
}

/// A single category (one bar row) of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub values: BTreeMap<String, f64>,
    /// Total as given by the data source, if it gave one.
    pub supplied_total: Option<f64>,
}

impl DataPoint {
    /// Build a point whose total is derived from its legend series.
    pub fn new(label: impl Into<String>, values: BTreeMap<String, f64>) -> Self {
        Self {
            label: label.into(),
            values,
            supplied_total: None,
        }
    }

    /// Build a point with a total supplied by the data source.
    pub fn with_total(label: impl Into<String>, values: BTreeMap<String, f64>, total: f64) -> Self {
        Self {
            label: label.into(),
            values,
            supplied_total: Some(total),
        }
    }

    /// Convenience constructor from `(key, value)` pairs.
    pub fn from_pairs(label: impl Into<String>, pairs: &[(&str, f64)]) -> Self {
        let values = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        Self::new(label, values)
    }

    /// Read a point from a JSON object.
    ///
    /// The label comes from `label_key`. Numeric fields become series values,
    /// except `total`, which becomes the supplied total. Non-numeric fields
    /// are ignored.
    pub fn from_record(row: usize, record: &Map<String, Value>, label_key: &str) -> Result<Self> {
        let label = match record.get(label_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(ChartError::MissingLabel {
                    row,
                    key: label_key.to_string(),
                })
            }
        };

        let mut values = BTreeMap::new();
        let mut total = None;
        for (key, value) in record {
            if key == label_key {
                continue;
            }
            let Some(number) = value.as_f64() else {
                continue;
            };
            if key == TOTAL_KEY {
                total = Some(number);
            } else {
                values.insert(key.clone(), number);
            }
        }

        Ok(match total {
            Some(total) => Self::with_total(label, values, total),
            None => Self::new(label, values),
        })
    }

    /// Value for a series key, if the record had one.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Sum of the values of the legend's series. Missing series count as 0.
    pub fn series_sum(&self, legend: &[LegendEntry]) -> f64 {
        legend
            .iter()
            .filter_map(|entry| self.value(&entry.key))
            .sum()
    }

    /// Bar length: the supplied total, or the legend series sum without one.
    ///
    /// Numeric fields outside the legend never contribute.
    pub fn total(&self, legend: &[LegendEntry]) -> f64 {
        self.supplied_total.unwrap_or_else(|| self.series_sum(legend))
    }
}

/// Parse a slice of JSON objects into points.
pub fn from_records(records: &[Value], label_key: Option<&str>) -> Result<Vec<DataPoint>> {
    let label_key = label_key.unwrap_or(DEFAULT_LABEL_KEY);
    records
        .iter()
        .enumerate()
        .map(|(row, value)| {
            let record = value.as_object().ok_or(ChartError::NotAnObject(row))?;
            DataPoint::from_record(row, record, label_key)
        })
        .collect()
}

/// Reject legends and datasets the layout cannot draw faithfully.
pub fn validate(points: &[DataPoint], legend: &[LegendEntry]) -> Result<()> {
    if legend.is_empty() {
        return Err(ChartError::EmptyLegend);
    }

    let mut keys = HashSet::new();
    for entry in legend {
        if !keys.insert(entry.key.as_str()) {
            return Err(ChartError::DuplicateSeriesKey(entry.key.clone()));
        }
    }

    let mut labels = HashSet::new();
    for point in points {
        if !labels.insert(point.label.as_str()) {
            return Err(ChartError::DuplicateLabel(point.label.clone()));
        }

        let mut sum = 0.0;
        for entry in legend {
            let value = point
                .value(&entry.key)
                .ok_or_else(|| ChartError::MissingSeriesValue {
                    label: point.label.clone(),
                    key: entry.key.clone(),
                })?;
            check_value(&point.label, &entry.key, value)?;
            sum += value;
        }

        let Some(total) = point.supplied_total else {
            continue;
        };
        check_value(&point.label, TOTAL_KEY, total)?;
        let tolerance = TOTAL_TOLERANCE * sum.abs().max(1.0);
        if (total - sum).abs() > tolerance {
            return Err(ChartError::TotalMismatch {
                label: point.label.clone(),
                total,
                sum,
            });
        }
    }

    Ok(())
}

fn check_value(label: &str, key: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidValue {
            label: label.to_string(),
            key: key.to_string(),
            value,
        })
    }
}

/// Keep the `n` largest categories by total, largest first.
///
/// Equal totals keep their input order.
pub fn top_n(points: &[DataPoint], legend: &[LegendEntry], n: usize) -> Vec<DataPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| b.total(legend).total_cmp(&a.total(legend)));
    sorted.truncate(n);
    sorted
}
