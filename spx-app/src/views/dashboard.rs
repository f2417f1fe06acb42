//! Dashboard view: four sample-metric charts.
//!
//! Charts are drawn once after mount, after Highcharts has loaded, and
//! destroyed when the view unmounts.

use crate::Route;
use dioxus::prelude::*;
use spx_chart_ui::components::{ChartContainer, ErrorDisplay, Header};
use spx_chart_ui::js_bridge::{self, HighchartsSurface};
use spx_chart_ui::state::RenderStatus;
use spx_core::dashboard::{self, DashboardAssembly};
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn Dashboard() -> Element {
    let mut status = use_context_provider(RenderStatus::new);
    let assembly = use_hook(|| Rc::new(RefCell::new(DashboardAssembly::new(HighchartsSurface))));

    // Render charts after mount
    let on_mount = assembly.clone();
    use_effect(move || {
        let assembly = on_mount.clone();
        spawn(async move {
            if let Err(e) = js_bridge::load_scripts(js_bridge::HIGHCHARTS_SCRIPTS).await {
                log::error!("Highcharts unavailable: {}", e);
                status.finish(vec![e.to_string()]);
                return;
            }
            let activation = assembly.borrow_mut().activate();
            let errors = activation
                .failures
                .iter()
                .map(|(id, e)| format!("#{}: {}", id, e))
                .collect();
            status.finish(errors);
        });
    });

    // Release every chart on unmount
    let on_unmount = assembly.clone();
    use_drop(move || on_unmount.borrow_mut().deactivate());

    let loading = (status.loading)();

    rsx! {
        div {
            class: "dashboard-wrapper",
            Header {}
            if let Some(err) = (status.error_msg)() {
                ErrorDisplay { message: err }
            }
            div {
                class: "dashboard-container",
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px; padding: 16px;",
                for id in dashboard::container_ids() {
                    ChartContainer {
                        key: "{id}",
                        id: id.to_string(),
                        loading: loading,
                    }
                }
            }
            div {
                class: "dashboard-links",
                style: "padding: 0 16px 16px; font-size: 13px;",
                Link {
                    to: Route::CompanyLocations {},
                    "View company locations"
                }
            }
        }
    }
}
