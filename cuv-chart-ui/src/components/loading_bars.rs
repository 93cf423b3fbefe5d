//! Placeholder bars shown while usage data is parsed.

use dioxus::prelude::*;

/// Bar lengths as a share of the placeholder width, longest first like a
/// top-N chart.
const SHARES: [f64; 5] = [0.9, 0.7, 0.55, 0.4, 0.25];

#[derive(Props, Clone, PartialEq)]
pub struct LoadingBarsProps {
    /// Number of placeholder rows
    #[props(default = 5)]
    pub rows: usize,
}

/// Grey skeleton of a stacked bar chart.
#[component]
pub fn LoadingBars(props: LoadingBarsProps) -> Element {
    let bars = (0..props.rows).map(|row| {
        let share = SHARES[row % SHARES.len()];
        let style = format!(
            "height: 8px; width: {:.0}%; background: #E3E8F0; border-radius: 3px;",
            share * 100.0
        );
        rsx! {
            div { key: "placeholder-{row}", style: "{style}" }
        }
    });

    rsx! {
        div {
            aria_busy: "true",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px 16px 24px 137px;",
            {bars}
            span {
                style: "font-size: 12px; color: #888;",
                "Loading client usage..."
            }
        }
    }
}
