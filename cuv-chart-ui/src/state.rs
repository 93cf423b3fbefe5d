//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page-level signals and is provided with
//! `use_context_provider`. `TooltipState` is the pair of signals the chart
//! writes on hover and `ChartTooltip` reads.

use cuv_chart::{HoverState, TooltipTarget};
use dioxus::prelude::*;

/// Shared application state for client usage chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Number of categories to display
    pub display_count: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            display_count: Signal::new(10),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tooltip anchor and text, observed by `ChartTooltip`.
#[derive(Clone, Copy)]
pub struct TooltipState {
    pub target: Signal<Option<TooltipTarget>>,
    pub text: Signal<Option<String>>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self {
            target: Signal::new(None),
            text: Signal::new(None),
        }
    }

    /// Copy the chart's hover state into the observable fields.
    pub fn sync(&mut self, hover: &HoverState) {
        self.target.set(hover.target);
        self.text.set(hover.text.clone());
    }

    pub fn clear(&mut self) {
        self.target.set(None);
        self.text.set(None);
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new()
    }
}
