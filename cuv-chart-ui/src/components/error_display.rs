//! Error box for data or layout failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// What failed, e.g. "Could not lay out chart"
    #[props(default = "Chart unavailable".to_string())]
    pub title: String,
    /// The underlying error, shown verbatim
    pub message: String,
    /// Optional suggestion for the reader
    #[props(default = String::new())]
    pub hint: String,
}

/// Titled error box. The error text is kept monospaced so keys and labels
/// quoted by `ChartError` stay readable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-left: 4px solid #C62828; border-radius: 4px;",
            strong {
                style: "display: block; margin-bottom: 4px;",
                "{props.title}"
            }
            code {
                style: "font-size: 12px; white-space: pre-wrap; word-break: break-word;",
                "{props.message}"
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #8E2424;",
                    "{props.hint}"
                }
            }
        }
    }
}
