//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #3b1a1f; color: #ffb4b4; border-radius: 4px; border: 1px solid #7a2e36;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
