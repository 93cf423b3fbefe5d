//! Chart geometry, palettes and tooltip settings.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "width": 800, "percent_base": { "fixed": 19000 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::model::LegendEntry;

/// Base fill per stack index.
pub const DEFAULT_PALETTE: [&str; 2] = ["#8AB1FF", "#1563FF"];

/// Fill per stack index while a row is hovered.
pub const DEFAULT_HOVER_PALETTE: [&str; 2] = ["#1563FF", "#0F4FD1"];

/// Space around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 16.0,
            bottom: 10.0,
            left: 137.0,
        }
    }
}

/// What a row's tooltip percentage is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentBase {
    /// Sum of the totals of every rendered category.
    #[default]
    SumOfTotals,
    /// A caller-supplied total, e.g. the client count for the whole cluster.
    Fixed(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Overall chart width in pixels.
    pub width: f64,
    pub margin: Margin,
    /// Vertical space given to each category.
    pub line_height: f64,
    /// Fraction of each band step left empty between bars.
    pub padding_inner: f64,
    /// Share of the plot width the longest bar may use. The rest is left
    /// for the total labels.
    pub bar_area_ratio: f64,
    pub bar_radius: f64,
    /// Labels with at least this many characters are truncated.
    pub truncate_at: usize,
    /// Characters kept before the ellipsis when truncating.
    pub truncate_keep: usize,
    pub axis_label_gap: f64,
    pub total_label_offset: f64,
    pub font_size: f64,
    pub palette: Vec<String>,
    pub hover_palette: Vec<String>,
    /// Text after the percentage in a row tooltip.
    pub tooltip_phrase: String,
    pub percent_base: PercentBase,
    /// Legend used when the caller does not supply one.
    pub legend: Option<Vec<LegendEntry>>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            margin: Margin::default(),
            line_height: 24.0,
            padding_inner: 0.765,
            bar_area_ratio: 0.75,
            bar_radius: 3.0,
            truncate_at: 15,
            truncate_keep: 12,
            axis_label_gap: 8.0,
            total_label_offset: 8.0,
            font_size: 12.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            hover_palette: DEFAULT_HOVER_PALETTE.iter().map(|c| c.to_string()).collect(),
            tooltip_phrase: "of total client counts".to_string(),
            percent_base: PercentBase::SumOfTotals,
            legend: None,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Width available to bars and total labels.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Check that the geometry can produce a sensible chart.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ChartError::InvalidConfig(msg));

        if !(self.width.is_finite() && self.width > 0.0) {
            return invalid(format!("width must be positive, got {}", self.width));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return invalid(format!(
                "line_height must be positive, got {}",
                self.line_height
            ));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return invalid(format!("font_size must be positive, got {}", self.font_size));
        }
        let offsets = [
            ("bar_radius", self.bar_radius),
            ("axis_label_gap", self.axis_label_gap),
            ("total_label_offset", self.total_label_offset),
        ];
        if let Some((name, value)) = offsets.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return invalid(format!("{name} must be non-negative, got {value}"));
        }
        if !(0.0..1.0).contains(&self.padding_inner) {
            return invalid(format!(
                "padding_inner must be in [0, 1), got {}",
                self.padding_inner
            ));
        }
        if !(self.bar_area_ratio > 0.0 && self.bar_area_ratio <= 1.0) {
            return invalid(format!(
                "bar_area_ratio must be in (0, 1], got {}",
                self.bar_area_ratio
            ));
        }
        let margins = [
            self.margin.top,
            self.margin.right,
            self.margin.bottom,
            self.margin.left,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return invalid("margins must be non-negative".to_string());
        }
        if self.width - self.margin.left - self.margin.right <= 0.0 {
            return invalid(format!(
                "width {} leaves no room for bars after left and right margins",
                self.width
            ));
        }
        if self.truncate_keep >= self.truncate_at {
            return invalid(format!(
                "truncate_keep ({}) must be below truncate_at ({})",
                self.truncate_keep, self.truncate_at
            ));
        }
        if self.palette.is_empty() || self.hover_palette.is_empty() {
            return invalid("palette and hover_palette must not be empty".to_string());
        }
        if let PercentBase::Fixed(total) = self.percent_base {
            if !(total.is_finite() && total > 0.0) {
                return invalid(format!("fixed percent base must be positive, got {total}"));
            }
        }
        Ok(())
    }
}
