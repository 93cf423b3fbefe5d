//! Reusable Dioxus RSX components for client usage chart apps.

mod chart_container;
mod chart_header;
mod chart_tooltip;
mod display_count_selector;
mod empty_state;
mod error_display;
mod loading_bars;
mod stacked_bar_chart;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_tooltip::ChartTooltip;
pub use display_count_selector::DisplayCountSelector;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use loading_bars::LoadingBars;
pub use stacked_bar_chart::StackedBarChart;
