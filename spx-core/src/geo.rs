//! Geographic points and map viewport settings.

use serde::Serialize;
use serde_json::{json, Value};

/// A named location, optionally weighted (bubble size on the world map).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl GeoPoint {
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            label: label.into(),
            latitude,
            longitude,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Bubble map data point; the label doubles as the ISO-3 join code.
    pub fn to_bubble(&self) -> Value {
        let mut point = json!({
            "code": self.label,
            "lat": self.latitude,
            "lon": self.longitude,
        });
        if let Some(z) = self.weight {
            point["z"] = json!(z);
        }
        point
    }
}

/// Viewport and tile source for the marker map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// (latitude, longitude)
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: (37.7749, -122.4194),
            zoom: 4,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}
