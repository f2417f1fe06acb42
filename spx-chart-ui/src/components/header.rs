//! Branding bar shown above the dashboard.

use dioxus::prelude::*;
use spx_core::theme::Theme;

pub const APP_TITLE: &str = "Sponsorytics";

/// Static header: title plus an analytics glyph.
#[component]
pub fn Header() -> Element {
    let theme = Theme::default();
    let style = format!(
        "background-color: {}; padding: 10px 10px 10px 30px; text-align: center; color: white; display: flex; align-items: center; justify-content: center; gap: 12px;",
        theme.header_background
    );

    rsx! {
        header {
            style: "{style}",
            h1 {
                style: "margin: 0; font-size: 24px;",
                "{APP_TITLE}"
            }
            svg {
                class: "analytics-icon",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "white",
                rect { x: "3", y: "12", width: "4", height: "9" }
                rect { x: "10", y: "7", width: "4", height: "14" }
                rect { x: "17", y: "3", width: "4", height: "18" }
            }
        }
    }
}
