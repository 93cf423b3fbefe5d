//! Cumulative stacking of series values per category.

use crate::model::{DataPoint, LegendEntry};

/// One stacked interval `[start, end)` of a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index of the category in the dataset.
    pub category: usize,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Segments of one legend series, one per category in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    pub key: String,
    /// Position in the legend, used for stacking and colour lookup.
    pub index: usize,
    pub segments: Vec<Segment>,
}

/// Stack every category's values in legend order.
///
/// Expects data that passed [`crate::model::validate`]; a missing value
/// stacks as zero.
pub fn stack(points: &[DataPoint], legend: &[LegendEntry]) -> Vec<StackedSeries> {
    let mut offsets = vec![0.0; points.len()];

    legend
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let segments = points
                .iter()
                .zip(offsets.iter_mut())
                .enumerate()
                .map(|(category, (point, offset))| {
                    let start = *offset;
                    let end = start + point.value(&entry.key).unwrap_or(0.0);
                    *offset = end;
                    Segment {
                        category,
                        start,
                        end,
                    }
                })
                .collect();
            StackedSeries {
                key: entry.key.clone(),
                index,
                segments,
            }
        })
        .collect()
}
