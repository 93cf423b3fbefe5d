//! Layout: dataset + legend + config into positioned shapes.
//!
//! The scene is plain data. Every coordinate is in pixels relative to the
//! top-left corner of the chart, so a drawing surface only has to copy the
//! numbers into elements.

use log::{debug, warn};

use crate::config::{ChartConfig, PercentBase};
use crate::error::Result;
use crate::hover;
use crate::label::{format_value, is_truncated, truncate_label};
use crate::model::{self, DataPoint, LegendEntry};
use crate::scale::{BandScale, LinearScale};
use crate::stack::stack;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One stacked segment of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub row: usize,
    /// Stack index (legend position).
    pub series: usize,
    pub rect: Rect,
    pub radius: f64,
    pub fill: String,
    pub hover_fill: String,
}

/// Category name on the left axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub row: usize,
    /// Right edge of the text.
    pub x: f64,
    /// Vertical centre of the text.
    pub y: f64,
    pub text: String,
}

/// Invisible rectangle that reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    pub row: usize,
    pub rect: Rect,
}

/// Total printed to the right of a category's bars.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalText {
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Per-category data needed by the hover handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct RowInfo {
    pub label: String,
    pub total: f64,
    /// Whether the axis shows a shortened label.
    pub truncated: bool,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub rows: Vec<RowInfo>,
    pub bars: Vec<Bar>,
    pub axis_labels: Vec<AxisLabel>,
    /// Full-width targets, one per row.
    pub row_targets: Vec<HitArea>,
    /// Targets over the label margin, one per row.
    pub label_targets: Vec<HitArea>,
    pub totals: Vec<TotalText>,
}

impl Scene {
    /// Validate the inputs and lay out the chart.
    pub fn build(points: &[DataPoint], legend: &[LegendEntry], config: &ChartConfig) -> Result<Self> {
        config.validate()?;
        model::validate(points, legend)?;

        if legend.len() > config.palette.len() {
            warn!(
                "{} series share a palette of {} colours; colours will repeat",
                legend.len(),
                config.palette.len()
            );
        }

        let series = stack(points, legend);
        let point_totals: Vec<f64> = points.iter().map(|p| p.total(legend)).collect();
        let max_total = point_totals.iter().copied().fold(0.0, f64::max);
        let x_scale = LinearScale::new(
            (0.0, max_total),
            (0.0, config.plot_width() * config.bar_area_ratio),
        );

        let labels = points.iter().map(|p| p.label.clone()).collect();
        let band_extent = points.len() as f64 * config.line_height;
        let y_scale = BandScale::new(labels, (0.0, band_extent), config.padding_inner);

        let left = config.margin.left;
        let top = config.margin.top;
        let denominator = match config.percent_base {
            PercentBase::SumOfTotals => point_totals.iter().sum(),
            PercentBase::Fixed(total) => total,
        };

        let mut bars = Vec::with_capacity(points.len() * legend.len());
        for s in &series {
            let fill = &config.palette[s.index % config.palette.len()];
            let hover_fill = &config.hover_palette[s.index % config.hover_palette.len()];
            for segment in &s.segments {
                let Some(band_y) = y_scale.position(segment.category) else {
                    continue;
                };
                let x0 = x_scale.map(segment.start);
                let x1 = x_scale.map(segment.end);
                bars.push(Bar {
                    row: segment.category,
                    series: s.index,
                    rect: Rect {
                        x: left + x0,
                        y: top + band_y,
                        width: x1 - x0,
                        height: y_scale.bandwidth(),
                    },
                    radius: config.bar_radius,
                    fill: fill.clone(),
                    hover_fill: hover_fill.clone(),
                });
            }
        }

        let mut rows = Vec::with_capacity(points.len());
        let mut axis_labels = Vec::with_capacity(points.len());
        let mut row_targets = Vec::with_capacity(points.len());
        let mut label_targets = Vec::with_capacity(points.len());
        let mut totals = Vec::with_capacity(points.len());

        for (row, (point, &total)) in points.iter().zip(&point_totals).enumerate() {
            let center = top + y_scale.center(row).unwrap_or(0.0);
            let target_y = center - config.line_height / 2.0;

            rows.push(RowInfo {
                label: point.label.clone(),
                total,
                truncated: is_truncated(&point.label, config.truncate_at),
                tooltip: hover::row_tooltip(point, legend, denominator, &config.tooltip_phrase),
            });
            axis_labels.push(AxisLabel {
                row,
                x: left - config.axis_label_gap,
                y: center,
                text: truncate_label(&point.label, config.truncate_at, config.truncate_keep),
            });
            row_targets.push(HitArea {
                row,
                rect: Rect {
                    x: 0.0,
                    y: target_y,
                    width: config.width,
                    height: config.line_height,
                },
            });
            label_targets.push(HitArea {
                row,
                rect: Rect {
                    x: 0.0,
                    y: target_y,
                    width: left,
                    height: config.line_height,
                },
            });
            totals.push(TotalText {
                row,
                x: left + x_scale.map(total) + config.total_label_offset,
                y: center,
                text: format_value(total),
            });
        }

        debug!(
            "Laid out {} categories across {} series (max total {})",
            points.len(),
            legend.len(),
            max_total
        );

        Ok(Self {
            width: config.width,
            height: top + band_extent + config.margin.bottom,
            font_size: config.font_size,
            rows,
            bars,
            axis_labels,
            row_targets,
            label_targets,
            totals,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn bars_for_row(&self, row: usize) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(move |b| b.row == row)
    }

    /// Fill for a bar given the currently highlighted row.
    pub fn fill_for<'a>(&self, bar: &'a Bar, highlighted: Option<usize>) -> &'a str {
        if highlighted == Some(bar.row) {
            &bar.hover_fill
        } else {
            &bar.fill
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    fn usage_points() -> Vec<DataPoint> {
        vec![
            DataPoint::from_pairs("root", &[("non_entity_tokens", 60.0), ("distinct_entities", 40.0)]),
            DataPoint::from_pairs(
                "engineering-platform/",
                &[("non_entity_tokens", 15.5), ("distinct_entities", 4.5)],
            ),
            DataPoint::from_pairs("idle/", &[("non_entity_tokens", 0.0), ("distinct_entities", 0.0)]),
        ]
    }

    #[test]
    fn test_bar_widths_sum_to_scaled_total() {
        let config = ChartConfig::default();
        let points = usage_points();
        let scene = Scene::build(&points, &LegendEntry::client_usage(), &config).unwrap();
        let full = config.plot_width() * config.bar_area_ratio;

        for (row, point) in points.iter().enumerate() {
            let width: f64 = scene.bars_for_row(row).map(|b| b.rect.width).sum();
            let expected = point.total(&LegendEntry::client_usage()) / 100.0 * full;
            assert!((width - expected).abs() < 1e-9, "row {row}: {width} vs {expected}");
        }
    }

    #[test]
    fn test_segments_are_contiguous_in_legend_order() {
        let legend = vec![LegendEntry::new("a", "A"), LegendEntry::new("b", "B")];
        let points = vec![
            DataPoint::from_pairs("x", &[("a", 3.0), ("b", 1.0)]),
            DataPoint::from_pairs("y", &[("a", 1.0), ("b", 3.0)]),
        ];
        let scene = Scene::build(&points, &legend, &ChartConfig::default()).unwrap();
        for row in 0..2 {
            let bars: Vec<_> = scene.bars_for_row(row).collect();
            assert_eq!(bars[0].series, 0);
            assert_eq!(bars[1].series, 1);
            assert!((bars[0].rect.x + bars[0].rect.width - bars[1].rect.x).abs() < 1e-9);
            assert_eq!(bars[0].rect.x, ChartConfig::default().margin.left);
        }
    }

    #[test]
    fn test_palette_by_stack_index() {
        let scene =
            Scene::build(&usage_points(), &LegendEntry::client_usage(), &ChartConfig::default()).unwrap();
        let bar = scene.bars_for_row(0).find(|b| b.series == 1).unwrap();
        assert_eq!(bar.fill, "#1563FF");
        assert_eq!(bar.hover_fill, "#0F4FD1");
        assert_eq!(scene.fill_for(bar, None), "#1563FF");
        assert_eq!(scene.fill_for(bar, Some(0)), "#0F4FD1");
        assert_eq!(scene.fill_for(bar, Some(1)), "#1563FF");
    }

    #[test]
    fn test_palette_cycles_for_long_legends() {
        let legend = vec![
            LegendEntry::new("a", "A"),
            LegendEntry::new("b", "B"),
            LegendEntry::new("c", "C"),
        ];
        let points = vec![DataPoint::from_pairs("x", &[("a", 1.0), ("b", 1.0), ("c", 1.0)])];
        let scene = Scene::build(&points, &legend, &ChartConfig::default()).unwrap();
        assert_eq!(scene.bars[2].fill, scene.bars[0].fill);
    }

    #[test]
    fn test_axis_labels_and_totals() {
        let config = ChartConfig::default();
        let scene = Scene::build(&usage_points(), &LegendEntry::client_usage(), &config).unwrap();

        assert_eq!(scene.axis_labels[0].text, "root");
        assert_eq!(scene.axis_labels[1].text, "engineering-...");
        assert!(!scene.rows[0].truncated);
        assert!(scene.rows[1].truncated);
        assert_eq!(scene.axis_labels[0].x, config.margin.left - config.axis_label_gap);

        assert_eq!(scene.totals[0].text, "100");
        assert_eq!(scene.totals[1].text, "20");
        let bar_end = scene.bars_for_row(0).map(|b| b.rect.x + b.rect.width).fold(0.0, f64::max);
        assert!((scene.totals[0].x - (bar_end + config.total_label_offset)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_row_keeps_its_band() {
        let scene =
            Scene::build(&usage_points(), &LegendEntry::client_usage(), &ChartConfig::default()).unwrap();
        let bars: Vec<_> = scene.bars_for_row(2).collect();
        assert_eq!(bars.len(), 2);
        assert!(bars.iter().all(|b| b.rect.width == 0.0));
        assert!(bars[0].rect.height > 0.0);
        assert_eq!(scene.totals[2].text, "0");
    }

    #[test]
    fn test_hit_areas_cover_rows() {
        let config = ChartConfig::default();
        let scene = Scene::build(&usage_points(), &LegendEntry::client_usage(), &config).unwrap();
        for (row, target) in scene.row_targets.iter().enumerate() {
            assert_eq!(target.row, row);
            assert_eq!(target.rect.width, config.width);
            assert_eq!(target.rect.height, config.line_height);
            let bar = scene.bars_for_row(row).next().unwrap();
            assert!(bar.rect.y >= target.rect.y);
            assert!(bar.rect.y + bar.rect.height <= target.rect.y + target.rect.height);
        }
        assert!(scene.label_targets.iter().all(|t| t.rect.width == config.margin.left));
        assert_eq!(
            scene.height,
            config.margin.top + 3.0 * config.line_height + config.margin.bottom
        );
    }

    #[test]
    fn test_all_zero_dataset_draws_zero_width_bars() {
        let points = vec![DataPoint::from_pairs("x", &[("a", 0.0)])];
        let scene =
            Scene::build(&points, &[LegendEntry::new("a", "A")], &ChartConfig::default()).unwrap();
        assert_eq!(scene.bars[0].rect.width, 0.0);
        assert!(scene.rows[0].tooltip.starts_with("0% "));
    }

    #[test]
    fn test_fields_outside_legend_do_not_change_bar_length() {
        let records = vec![serde_json::json!({
            "label": "root",
            "non_entity_tokens": 60,
            "distinct_entities": 40,
            "clients": 100,
        })];
        let points = model::from_records(&records, None).unwrap();
        let scene = Scene::build(&points, &LegendEntry::client_usage(), &ChartConfig::default())
            .unwrap();
        assert_eq!(scene.rows[0].total, 100.0);
        assert_eq!(scene.totals[0].text, "100");
        assert!(scene.rows[0].tooltip.starts_with("100% "));
    }

    #[test]
    fn test_empty_dataset_builds_empty_scene() {
        let config = ChartConfig::default();
        let scene = Scene::build(&[], &LegendEntry::client_usage(), &config).unwrap();
        assert!(scene.is_empty());
        assert!(scene.bars.is_empty());
        assert!(scene.row_targets.is_empty());
        assert_eq!(scene.height, config.margin.top + config.margin.bottom);
    }

    #[test]
    fn test_build_fails_fast_on_bad_input() {
        assert!(matches!(
            Scene::build(&usage_points(), &[], &ChartConfig::default()),
            Err(ChartError::EmptyLegend)
        ));
        let config = ChartConfig {
            palette: Vec::new(),
            ..ChartConfig::default()
        };
        assert!(matches!(
            Scene::build(&usage_points(), &LegendEntry::client_usage(), &config),
            Err(ChartError::InvalidConfig(_))
        ));
    }
}
