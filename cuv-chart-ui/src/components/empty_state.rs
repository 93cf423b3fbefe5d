//! Placeholder shown when there is nothing to chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub title: String,
    #[props(default = String::new())]
    pub message: String,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 32px 16px; color: #666; border: 1px dashed #ccc; border-radius: 4px;",
            h4 {
                style: "margin: 0 0 4px 0;",
                "{props.title}"
            }
            if !props.message.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px;",
                    "{props.message}"
                }
            }
        }
    }
}
