//! Number of categories to chart.

use crate::state::AppState;
use dioxus::prelude::*;

/// Number input bound to `AppState::display_count`, clamped to 1-100.
#[component]
pub fn DisplayCountSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_count = (state.display_count)();

    let on_count_change = move |evt: Event<FormData>| {
        if let Ok(count) = evt.value().parse::<usize>() {
            state.display_count.set(count.clamp(1, 100));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Show top: "
                input {
                    r#type: "number",
                    value: "{current_count}",
                    min: "1",
                    max: "100",
                    style: "width: 60px;",
                    onchange: on_count_change,
                }
                " namespaces"
            }
        }
    }
}
