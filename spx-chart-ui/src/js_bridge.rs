//! Typed wrappers around JS interop.
//!
//! Highcharts and Leaflet are fetched on demand with [`load_scripts`].
//! The small bridge scripts in `assets/js/*.js` are evaluated once as globals
//! and exposed via `window.*`; this module calls them through `js_sys` and
//! hands the returned chart/map objects back to Rust, which owns them.

use js_sys::{Function, Reflect};
use spx_core::chart::ChartSpec;
use spx_core::geo::{GeoPoint, MapView};
use spx_core::map::MapSurface;
use spx_core::render::ChartSurface;
use spx_core::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed the bridge JS files at compile time
static LOADER_JS: &str = include_str!("../assets/js/loader.js");
static HIGHCHARTS_BRIDGE_JS: &str = include_str!("../assets/js/highcharts-bridge.js");
static LEAFLET_BRIDGE_JS: &str = include_str!("../assets/js/leaflet-bridge.js");

/// Scripts for bar and pie charts.
pub const HIGHCHARTS_SCRIPTS: &[&str] = &["https://code.highcharts.com/highcharts.js"];

/// Scripts for the world bubble map, in load order.
pub const HIGHMAPS_SCRIPTS: &[&str] = &[
    "https://code.highcharts.com/highcharts.js",
    "https://code.highcharts.com/highcharts-more.js",
    "https://code.highcharts.com/maps/modules/map.js",
    "https://code.highcharts.com/mapdata/custom/world.js",
];

pub const LEAFLET_SCRIPTS: &[&str] = &["https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"];
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

const BRIDGE_FUNCTIONS: [&str; 5] = [
    "spxLoadScript",
    "spxRenderChart",
    "spxDestroyChart",
    "spxRenderMap",
    "spxRemoveMap",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SPX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the bridge scripts at global scope and promote their functions
/// to `window.*`. Safe to call more than once.
pub fn load_bridge_scripts() {
    if is_defined("spxLoadScript") {
        return;
    }
    let all_js = [LOADER_JS, HIGHCHARTS_BRIDGE_JS, LEAFLET_BRIDGE_JS].join("\n");
    if let Err(e) = js_sys::eval(&all_js) {
        log::error!("Failed to load chart bridge: {}", describe(&e));
        return;
    }
    let promote = BRIDGE_FUNCTIONS
        .iter()
        .map(|name| format!("if (typeof {0} !== 'undefined') window.{0} = {0};", name))
        .collect::<Vec<_>>()
        .join("\n");
    call_js(&promote);
    log::info!("Chart bridge initialized");
}

/// Whether `window[name]` is defined.
pub fn is_defined(name: &str) -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Whether an element with this id is currently in the document.
pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert() failed: {}", describe(&e));
        }
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn script_error(value: JsValue) -> Error {
    Error::Script {
        message: describe(&value),
    }
}

fn require(library: &'static str) -> Result<()> {
    if is_defined(library) {
        Ok(())
    } else {
        Err(Error::LibraryUnavailable { library })
    }
}

fn bridge_function(name: &str) -> Result<Function> {
    load_bridge_scripts();
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map_err(script_error)?
        .dyn_into::<Function>()
        .map_err(|_| Error::Script {
            message: format!("{} is not a function", name),
        })
}

/// Load `sources` one after another, each waiting for the previous one.
/// Scripts already on the page resolve immediately.
pub async fn load_scripts(sources: &[&str]) -> Result<()> {
    let loader = bridge_function("spxLoadScript")?;
    for src in sources {
        let promise = loader
            .call1(&JsValue::NULL, &JsValue::from_str(src))
            .map_err(script_error)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| Error::Script {
                message: "spxLoadScript did not return a promise".to_string(),
            })?;
        JsFuture::from(promise).await.map_err(script_error)?;
        log::info!("Loaded {}", src);
    }
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Script {
        message: e.to_string(),
    })
}

/// Draws charts with Highcharts.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighchartsSurface;

impl ChartSurface for HighchartsSurface {
    type Instance = JsValue;

    fn has_container(&self, container_id: &str) -> bool {
        element_exists(container_id)
    }

    fn draw(&mut self, spec: &ChartSpec) -> Result<JsValue> {
        require("Highcharts")?;
        let options = to_json(&spec.to_options())?;
        bridge_function("spxRenderChart")?
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(&spec.container_id),
                &JsValue::from_str(spec.chart_type.constructor()),
                &JsValue::from_str(&options),
            )
            .map_err(script_error)
    }

    fn destroy(&mut self, instance: JsValue) -> Result<()> {
        bridge_function("spxDestroyChart")?
            .call1(&JsValue::NULL, &instance)
            .map(|_| ())
            .map_err(script_error)
    }
}

/// Draws marker maps with Leaflet.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeafletSurface;

impl MapSurface for LeafletSurface {
    type Instance = JsValue;

    fn has_container(&self, container_id: &str) -> bool {
        element_exists(container_id)
    }

    fn draw(&mut self, container_id: &str, view: &MapView, points: &[GeoPoint]) -> Result<JsValue> {
        require("L")?;
        let view_json = to_json(view)?;
        let points_json = to_json(points)?;
        bridge_function("spxRenderMap")?
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(container_id),
                &JsValue::from_str(&view_json),
                &JsValue::from_str(&points_json),
            )
            .map_err(script_error)
    }

    fn remove(&mut self, instance: JsValue) -> Result<()> {
        bridge_function("spxRemoveMap")?
            .call1(&JsValue::NULL, &instance)
            .map(|_| ())
            .map_err(script_error)
    }
}
