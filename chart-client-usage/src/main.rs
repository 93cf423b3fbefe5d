//! Client Usage by Namespace
//!
//! Shows the namespaces with the most clients as a stacked bar chart of
//! non-entity tokens and unique entities, with hover tooltips.
//!
//! Data flow:
//! 1. `build.rs` reads the monthly `client_usage.csv` and sums each
//!    namespace's counts into `namespace_usage.csv` at compile time.
//! 2. `include_str!` embeds the aggregated CSV into the WASM binary.
//! 3. On mount: parse the CSV into data points.
//! 4. On display count change: keep the top N namespaces and re-render.

use cuv_chart::{loader, model, ChartConfig, DataPoint, LegendEntry, PercentBase};
use cuv_chart_ui::components::{
    ChartContainer, ChartHeader, ChartTooltip, DisplayCountSelector, EmptyState, ErrorDisplay,
    LoadingBars, StackedBarChart,
};
use cuv_chart_ui::state::{AppState, TooltipState};
use dioxus::prelude::*;
use log::{error, info};

// Embed per-namespace usage (namespace,non_entity_tokens,distinct_entities,total).
const NAMESPACE_USAGE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/namespace_usage.csv"));

/// CSV column holding the category label.
const LABEL_KEY: &str = "namespace";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("client-usage-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_context_provider(TooltipState::new);
    let mut all_data: Signal<Vec<DataPoint>> = use_signal(Vec::new);

    // ─── Effect: Parse CSV once on mount ───
    use_effect(move || {
        match loader::from_csv_str(NAMESPACE_USAGE_CSV, Some(LABEL_KEY)) {
            Ok(data) => {
                info!("Parsed usage for {} namespaces", data.len());
                all_data.set(data);
                state.error_msg.set(None);
            }
            Err(e) => {
                error!("Failed to parse namespace usage: {e}");
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    // Top N namespaces by total; recomputed when the data or count changes.
    let display_data = use_memo(move || {
        let count = (state.display_count)();
        model::top_n(&all_data.read(), &LegendEntry::client_usage(), count)
    });

    // Percentages are against every namespace, not only the ones shown.
    let chart_config = use_memo(move || {
        let legend = LegendEntry::client_usage();
        let total: f64 = all_data.read().iter().map(|p| p.total(&legend)).sum();
        let mut config = ChartConfig::default();
        if total > 0.0 {
            config.percent_base = PercentBase::Fixed(total);
        }
        config
    });

    let legend = LegendEntry::client_usage();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    title: "Usage data unavailable".to_string(),
                    message: err.clone(),
                    hint: "The embedded namespace_usage.csv could not be parsed.".to_string(),
                }
            }

            if *state.loading.read() {
                LoadingBars {}
            } else if display_data.read().is_empty() {
                if state.error_msg.read().is_none() {
                    EmptyState {
                        title: "No data received".to_string(),
                        message: "Client usage will appear here once namespaces report activity.".to_string(),
                    }
                }
            } else {
                ChartHeader {
                    title: "Client usage by namespace".to_string(),
                    description: "Hover a bar for its share of all clients; hover a shortened name to see it in full.".to_string(),
                }

                ChartContainer {
                    loading: *state.loading.read(),
                    StackedBarChart {
                        data: display_data(),
                        legend: legend.clone(),
                        config: chart_config(),
                    }
                    ChartTooltip {}
                }

                Legend { legend: legend.clone() }

                DisplayCountSelector {}
            }
        }
    }
}

/// Colour key under the chart.
#[component]
fn Legend(legend: Vec<LegendEntry>) -> Element {
    let palette = ChartConfig::default().palette;
    let items = legend.iter().enumerate().map(|(index, entry)| {
        let swatch = format!(
            "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {};",
            palette[index % palette.len()]
        );
        rsx! {
            span {
                key: "{entry.key}",
                style: "display: flex; align-items: center; gap: 4px;",
                span { style: "{swatch}" }
                "{entry.label}"
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; gap: 16px; font-size: 12px; color: #444; margin-top: 4px;",
            {items}
        }
    }
}
