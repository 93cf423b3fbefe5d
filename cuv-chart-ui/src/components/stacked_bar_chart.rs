//! Horizontal stacked bar chart drawn as inline SVG.
//!
//! Layout comes from `cuv_chart::Scene`; this component only copies the
//! shapes into elements and forwards pointer events to `HoverState`.

use std::rc::Rc;

use cuv_chart::{ChartConfig, DataPoint, HoverState, LegendEntry, Scene};
use dioxus::prelude::*;

use crate::components::ErrorDisplay;
use crate::state::TooltipState;

#[derive(Props, Clone, PartialEq)]
pub struct StackedBarChartProps {
    /// One entry per bar row
    pub data: Vec<DataPoint>,
    /// Series in stacking order
    pub legend: Vec<LegendEntry>,
    #[props(default)]
    pub config: ChartConfig,
}

/// Stacked bar chart with hover highlighting.
///
/// Tooltip text and anchor are written to the `TooltipState` in context, or
/// to a private one when no ancestor provides it.
#[component]
pub fn StackedBarChart(props: StackedBarChartProps) -> Element {
    let mut hover = use_signal(HoverState::default);
    let mut tooltip = use_hook(|| try_consume_context::<TooltipState>().unwrap_or_default());

    // New data means new rows; a highlighted index would point at the wrong one.
    use_effect(use_reactive((&props.data,), move |_| {
        hover.set(HoverState::default());
        tooltip.clear();
    }));

    // Layout only reruns when the inputs change, not on hover.
    let layout = use_memo(use_reactive(
        (&props.data, &props.legend, &props.config),
        |(data, legend, config)| {
            Scene::build(&data, &legend, &config).map(Rc::new).map_err(|e| {
                log::error!("Failed to lay out stacked bar chart: {e}");
                e.to_string()
            })
        },
    ));

    let scene = match layout() {
        Ok(scene) => scene,
        Err(message) => {
            return rsx! {
                ErrorDisplay {
                    title: "Could not lay out chart".to_string(),
                    message,
                    hint: "Check that every row has a value for each legend series.".to_string(),
                }
            };
        }
    };

    let highlighted = hover.read().highlighted;
    let width = scene.width;
    let height = scene.height;
    let font_size = scene.font_size;

    let bars = scene.bars.iter().map(|bar| {
        let fill = scene.fill_for(bar, highlighted).to_string();
        rsx! {
            rect {
                key: "bar-{bar.row}-{bar.series}",
                x: "{bar.rect.x}",
                y: "{bar.rect.y}",
                width: "{bar.rect.width}",
                height: "{bar.rect.height}",
                rx: "{bar.radius}",
                fill: "{fill}",
            }
        }
    });

    let labels = scene.axis_labels.iter().map(|label| {
        rsx! {
            text {
                key: "label-{label.row}",
                x: "{label.x}",
                y: "{label.y}",
                text_anchor: "end",
                dominant_baseline: "middle",
                font_size: "{font_size}",
                "{label.text}"
            }
        }
    });

    let totals = scene.totals.iter().map(|total| {
        rsx! {
            text {
                key: "total-{total.row}",
                x: "{total.x}",
                y: "{total.y}",
                dominant_baseline: "middle",
                font_size: "{font_size}",
                "{total.text}"
            }
        }
    });

    let row_targets = scene.row_targets.iter().map(|area| {
        let row = area.row;
        let scene = Rc::clone(&scene);
        rsx! {
            rect {
                key: "row-target-{row}",
                x: "{area.rect.x}",
                y: "{area.rect.y}",
                width: "{area.rect.width}",
                height: "{area.rect.height}",
                fill: "transparent",
                onmouseenter: move |_| {
                    hover.with_mut(|h| h.enter_row(&scene, row));
                    tooltip.sync(&hover.read());
                },
                onmouseleave: move |_| {
                    hover.with_mut(|h| h.leave());
                    tooltip.clear();
                },
            }
        }
    });

    let label_targets = scene.label_targets.iter().map(|area| {
        let row = area.row;
        let scene = Rc::clone(&scene);
        rsx! {
            rect {
                key: "label-target-{row}",
                x: "{area.rect.x}",
                y: "{area.rect.y}",
                width: "{area.rect.width}",
                height: "{area.rect.height}",
                fill: "transparent",
                onmouseenter: move |_| {
                    hover.with_mut(|h| h.enter_label(&scene, row));
                    tooltip.sync(&hover.read());
                },
                onmouseleave: move |_| {
                    hover.with_mut(|h| h.leave());
                    tooltip.clear();
                },
            }
        }
    });

    rsx! {
        svg {
            class: "stacked-bar-chart",
            width: "{width}",
            height: "{height}",
            view_box: "0 0 {width} {height}",
            g { class: "bars", {bars} }
            g { class: "axis", {labels} }
            g { class: "totals", {totals} }
            g { class: "row-targets", {row_targets} }
            g { class: "label-targets", {label_targets} }
        }
    }
}
