//! Chart container component with loading state.

use dioxus::prelude::*;

use crate::components::LoadingBars;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 200)]
    pub min_height: u32,
    pub children: Element,
}

/// Positioned wrapper for a chart and its tooltip.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                LoadingBars {}
            } else {
                {props.children}
            }
        }
    }
}
