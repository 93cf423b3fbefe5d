//! Errors raised while loading, validating or laying out chart data.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart legend is empty")]
    EmptyLegend,

    #[error("series key `{0}` appears more than once in the legend")]
    DuplicateSeriesKey(String),

    #[error("category label `{0}` appears more than once in the dataset")]
    DuplicateLabel(String),

    #[error("record {row} has no string field `{key}` to use as its label")]
    MissingLabel { row: usize, key: String },

    #[error("category `{label}` has no value for series `{key}`")]
    MissingSeriesValue { label: String, key: String },

    #[error("category `{label}` has invalid value {value} for `{key}`")]
    InvalidValue {
        label: String,
        key: String,
        value: f64,
    },

    #[error("category `{label}` has non-numeric cell `{cell}` in column `{key}`")]
    UnparseableCell {
        label: String,
        key: String,
        cell: String,
    },

    #[error("category `{label}` has total {total} but its series sum to {sum}")]
    TotalMismatch { label: String, total: f64, sum: f64 },

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("expected a JSON array of records")]
    NotAnArray,

    #[error("record {0} is not a JSON object")]
    NotAnObject(usize),

    #[error("unsupported dataset format `{0}` (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
