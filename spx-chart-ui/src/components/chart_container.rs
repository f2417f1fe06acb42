//! Chart container component with loading state.

use dioxus::prelude::*;
use spx_core::theme::Theme;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the chart library renders into
    pub id: String,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div for Highcharts/Leaflet with loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let theme = Theme::default();
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; background: {}; border-radius: 6px;",
        props.min_height, theme.background
    );
    let inner_style = format!("width: 100%; height: {}px;", props.min_height);

    rsx! {
        div {
            class: "dashboard-chart",
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #9aa4b2;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "{inner_style}",
            }
        }
    }
}
