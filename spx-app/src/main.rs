//! Sponsorytics recommendation dashboard.
//!
//! Three routes:
//! - `/`: upload two files, then generate the dashboard
//! - `/dashboard`: sponsorship metrics rendered with Highcharts
//! - `/map`: company locations (Leaflet markers and a world bubble map)
//!
//! The uploaded files gate navigation only; every chart shows the
//! hardcoded sample metrics from `spx_core::sample`.

mod views;

use dioxus::prelude::*;
use spx_chart_ui::js_bridge;
use views::{CompanyLocations, Dashboard, Upload};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Upload {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/map")]
    CompanyLocations {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Bridge functions must exist before any view renders a chart
    use_hook(js_bridge::load_bridge_scripts);

    rsx! {
        div {
            class: "App",
            style: "min-height: 100vh; background: #0b1220; color: white; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            Router::<Route> {}
        }
    }
}

/// Unknown paths show the upload view.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    log::warn!("No route for /{}, showing upload view", segments.join("/"));
    rsx! {
        Upload {}
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use spx_core::upload::DASHBOARD_PATH;
    use std::str::FromStr;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Upload {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), DASHBOARD_PATH);
        assert_eq!(Route::CompanyLocations {}.to_string(), "/map");
    }

    #[test]
    fn test_paths_parse_to_views() {
        assert_eq!(Route::from_str("/dashboard").ok(), Some(Route::Dashboard {}));
        assert_eq!(Route::from_str("/").ok(), Some(Route::Upload {}));
        assert!(matches!(
            Route::from_str("/nowhere"),
            Ok(Route::NotFound { .. })
        ));
    }
}
