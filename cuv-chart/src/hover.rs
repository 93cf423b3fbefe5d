//! Hover state and tooltip text.
//!
//! Only one pointer can hover at a time, so every event simply overwrites
//! the previous state.

use crate::label::format_value;
use crate::model::{DataPoint, LegendEntry};
use crate::scene::{Rect, Scene};

/// Which interaction rectangle the tooltip is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Row,
    Label,
}

/// The element a tooltip should point at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipTarget {
    pub row: usize,
    pub kind: TargetKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    pub target: Option<TooltipTarget>,
    pub text: Option<String>,
    /// Row whose bars use the hover palette.
    pub highlighted: Option<usize>,
}

impl HoverState {
    /// Pointer entered a row's full-width target.
    pub fn enter_row(&mut self, scene: &Scene, row: usize) {
        let (Some(info), Some(area)) = (scene.rows.get(row), scene.row_targets.get(row)) else {
            self.clear();
            return;
        };
        self.highlighted = Some(row);
        self.target = Some(TooltipTarget {
            row,
            kind: TargetKind::Row,
            rect: area.rect,
        });
        self.text = Some(info.tooltip.clone());
    }

    /// Pointer entered a row's label target.
    ///
    /// Truncated labels show their full text; otherwise there is no tooltip.
    /// The row is highlighted either way.
    pub fn enter_label(&mut self, scene: &Scene, row: usize) {
        let (Some(info), Some(area)) = (scene.rows.get(row), scene.label_targets.get(row)) else {
            self.clear();
            return;
        };
        self.highlighted = Some(row);
        if info.truncated {
            self.target = Some(TooltipTarget {
                row,
                kind: TargetKind::Label,
                rect: area.rect,
            });
            self.text = Some(info.label.clone());
        } else {
            self.target = None;
            self.text = None;
        }
    }

    pub fn leave(&mut self) {
        self.clear();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.highlighted.is_some()
    }
}

/// Tooltip for a row: percentage of `denominator`, then each series value.
///
/// e.g. `1% of total client counts: 60 non-entity tokens, 40 unique entities.`
pub fn row_tooltip(
    point: &DataPoint,
    legend: &[LegendEntry],
    denominator: f64,
    phrase: &str,
) -> String {
    let percent = if denominator > 0.0 {
        (point.total(legend) * 100.0 / denominator).round()
    } else {
        0.0
    };
    let breakdown = legend
        .iter()
        .map(|entry| {
            let value = point.value(&entry.key).unwrap_or(0.0);
            format!("{} {}", format_value(value), entry.label)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}% {}: {}.", format_value(percent), phrase, breakdown)
}
