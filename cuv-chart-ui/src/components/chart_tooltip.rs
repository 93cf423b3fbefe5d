//! Floating tooltip driven by `TooltipState`.

use cuv_chart::TargetKind;
use dioxus::prelude::*;

use crate::state::TooltipState;

/// Shows the current tooltip text next to its target.
///
/// Must share a `position: relative` parent with the chart so the target
/// coordinates line up.
#[component]
pub fn ChartTooltip() -> Element {
    let tooltip = use_context::<TooltipState>();
    let target = (tooltip.target)();
    let text = (tooltip.text)();

    let (Some(target), Some(text)) = (target, text) else {
        return rsx! {};
    };

    // Row tooltips sit under the label margin; label tooltips under the label.
    let left = match target.kind {
        TargetKind::Row => target.rect.x + 16.0,
        TargetKind::Label => target.rect.x + target.rect.width / 2.0,
    };
    let top = target.rect.y + target.rect.height;
    let style = format!(
        "position: absolute; left: {left}px; top: {top}px; max-width: 320px; padding: 6px 10px; \
         background: #0C0C0E; color: #FFFFFF; font-size: 12px; border-radius: 3px; \
         pointer-events: none; z-index: 10;"
    );

    rsx! {
        div {
            class: "chart-tooltip",
            style: "{style}",
            "{text}"
        }
    }
}
