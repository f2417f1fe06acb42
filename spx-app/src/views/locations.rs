//! Company locations: Leaflet marker map and the Highcharts world bubble map.

use crate::Route;
use dioxus::prelude::*;
use spx_chart_ui::components::{ChartContainer, ErrorDisplay, Header};
use spx_chart_ui::js_bridge::{self, HighchartsSurface, LeafletSurface};
use spx_chart_ui::state::RenderStatus;
use spx_core::chart::ChartSpec;
use spx_core::geo::MapView;
use spx_core::map::MapRenderer;
use spx_core::render::{ChartRegistry, ChartRenderer};
use spx_core::sample;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Leaflet marker map container.
const COMPANY_MAP_ID: &str = "company-map";
/// Highcharts world map container.
const WORLD_MAP_ID: &str = "map-container";

struct LocationMaps {
    markers: MapRenderer<LeafletSurface>,
    charts: ChartRenderer<HighchartsSurface>,
    registry: ChartRegistry<JsValue>,
}

impl LocationMaps {
    fn new() -> Self {
        Self {
            markers: MapRenderer::new(LeafletSurface, COMPANY_MAP_ID, MapView::default()),
            charts: ChartRenderer::new(HighchartsSurface),
            registry: ChartRegistry::new(),
        }
    }

    async fn render(maps: Rc<RefCell<Self>>) -> Vec<String> {
        let mut errors = Vec::new();

        match js_bridge::load_scripts(js_bridge::LEAFLET_SCRIPTS).await {
            Ok(()) => {
                if let Err(e) = maps.borrow_mut().markers.render(&sample::company_locations()) {
                    errors.push(format!("#{}: {}", COMPANY_MAP_ID, e));
                }
            }
            Err(e) => errors.push(e.to_string()),
        }

        match js_bridge::load_scripts(js_bridge::HIGHMAPS_SCRIPTS).await {
            Ok(()) => {
                let result = ChartSpec::map_bubble(WORLD_MAP_ID, "Company Locations", sample::world_bubbles())
                    .map_err(spx_core::Error::from)
                    .and_then(|spec| {
                        let mut maps = maps.borrow_mut();
                        let LocationMaps { charts, registry, .. } = &mut *maps;
                        charts.render(registry, &spec)
                    });
                if let Err(e) = result {
                    errors.push(format!("#{}: {}", WORLD_MAP_ID, e));
                }
            }
            Err(e) => errors.push(e.to_string()),
        }

        for e in &errors {
            log::error!("Location maps: {}", e);
        }
        errors
    }

    fn teardown(&mut self) {
        self.markers.teardown();
        let chart = self.registry.remove(WORLD_MAP_ID);
        self.charts.dispose(chart);
    }
}

#[component]
pub fn CompanyLocations() -> Element {
    let mut status = use_context_provider(RenderStatus::new);
    let maps = use_hook(|| Rc::new(RefCell::new(LocationMaps::new())));

    let on_mount = maps.clone();
    use_effect(move || {
        let maps = on_mount.clone();
        spawn(async move {
            let errors = LocationMaps::render(maps).await;
            status.finish(errors);
        });
    });

    let on_unmount = maps.clone();
    use_drop(move || on_unmount.borrow_mut().teardown());

    let loading = (status.loading)();

    rsx! {
        document::Stylesheet { href: js_bridge::LEAFLET_CSS }
        div {
            class: "dashboard-wrapper",
            Header {}
            if let Some(err) = (status.error_msg)() {
                ErrorDisplay { message: err }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 16px; padding: 16px;",
                ChartContainer {
                    id: COMPANY_MAP_ID.to_string(),
                    loading: loading,
                    min_height: 400,
                }
                ChartContainer {
                    id: WORLD_MAP_ID.to_string(),
                    loading: loading,
                    min_height: 500,
                }
            }
            div {
                class: "dashboard-links",
                style: "padding: 0 16px 16px; font-size: 13px;",
                Link {
                    to: Route::Dashboard {},
                    "Back to dashboard"
                }
            }
        }
    }
}
