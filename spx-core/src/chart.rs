//! Declarative chart descriptions.
//!
//! A [`ChartSpec`] is built once per render call and never mutated. It knows
//! how to turn itself into the option object the charting library consumes
//! (`to_options`), so the browser side only has to hand that JSON over.

use crate::error::ValidationError;
use crate::geo::GeoPoint;
use crate::theme::Theme;
use serde::Serialize;
use serde_json::{json, Value};

/// Map data key registered by the world map script.
pub const WORLD_MAP_KEY: &str = "custom/world";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Pie,
    MapBubble,
}

impl ChartType {
    /// Name of the library constructor that builds this kind of chart.
    pub fn constructor(&self) -> &'static str {
        match self {
            ChartType::Bar | ChartType::Pie => "chart",
            ChartType::MapBubble => "mapChart",
        }
    }
}

/// A labelled value in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Pair bar categories with their values index-for-index.
///
/// Lists of different lengths are rejected instead of truncated.
pub fn pair_series(categories: &[String], values: &[f64]) -> Result<Vec<SeriesPoint>, ValidationError> {
    if categories.len() != values.len() {
        return Err(ValidationError::LengthMismatch {
            categories: categories.len(),
            values: values.len(),
        });
    }
    Ok(categories
        .iter()
        .zip(values)
        .map(|(label, value)| SeriesPoint::new(label.clone(), *value))
        .collect())
}

/// Immutable description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub container_id: String,
    pub chart_type: ChartType,
    pub title: String,
    pub series_name: String,
    /// Axis categories, bar charts only
    pub categories: Vec<String>,
    pub series: Vec<SeriesPoint>,
    /// Bubble locations, map charts only
    pub points: Vec<GeoPoint>,
    pub theme: Theme,
}

fn check_container_id(container_id: &str) -> Result<(), ValidationError> {
    if container_id.trim().is_empty() {
        Err(ValidationError::EmptyContainerId)
    } else {
        Ok(())
    }
}

impl ChartSpec {
    /// Horizontal bar chart; the series is named after the title.
    pub fn bar(
        container_id: &str,
        title: &str,
        categories: Vec<String>,
        values: &[f64],
    ) -> Result<Self, ValidationError> {
        check_container_id(container_id)?;
        let series = pair_series(&categories, values)?;
        Ok(Self {
            container_id: container_id.to_string(),
            chart_type: ChartType::Bar,
            title: title.to_string(),
            series_name: title.to_string(),
            categories,
            series,
            points: Vec::new(),
            theme: Theme::default(),
        })
    }

    /// Bar chart from already-labelled points.
    pub fn bar_from_points(
        container_id: &str,
        title: &str,
        points: &[SeriesPoint],
    ) -> Result<Self, ValidationError> {
        let categories = points.iter().map(|p| p.label.clone()).collect();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        Self::bar(container_id, title, categories, &values)
    }

    /// Pie chart showing each point's share.
    pub fn pie(container_id: &str, title: &str, series: Vec<SeriesPoint>) -> Result<Self, ValidationError> {
        check_container_id(container_id)?;
        Ok(Self {
            container_id: container_id.to_string(),
            chart_type: ChartType::Pie,
            title: title.to_string(),
            series_name: "Share".to_string(),
            categories: Vec::new(),
            series,
            points: Vec::new(),
            theme: Theme::default(),
        })
    }

    /// World map with one bubble per point, joined on ISO-3 country code.
    pub fn map_bubble(
        container_id: &str,
        title: &str,
        points: Vec<GeoPoint>,
    ) -> Result<Self, ValidationError> {
        check_container_id(container_id)?;
        Ok(Self {
            container_id: container_id.to_string(),
            chart_type: ChartType::MapBubble,
            title: title.to_string(),
            series_name: "Companies".to_string(),
            categories: Vec::new(),
            series: Vec::new(),
            points,
            theme: Theme::default(),
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn title_options(&self) -> Value {
        json!({
            "text": self.title,
            "style": { "color": self.theme.text },
        })
    }

    /// Build the option object for the charting library.
    pub fn to_options(&self) -> Value {
        let text = self.theme.text;
        match self.chart_type {
            ChartType::Bar => json!({
                "chart": { "type": "bar", "backgroundColor": self.theme.background },
                "title": self.title_options(),
                "xAxis": {
                    "categories": self.categories,
                    "labels": { "style": { "color": text } },
                },
                "yAxis": {
                    "min": 0,
                    "labels": { "style": { "color": text } },
                },
                "credits": { "enabled": false },
                "legend": { "itemStyle": { "color": text, "fontWeight": "bold" } },
                "plotOptions": {
                    "series": { "borderWidth": 0, "dataLabels": { "color": text } },
                },
                "series": [{
                    "name": self.series_name,
                    "data": self.series.iter().map(|p| p.value).collect::<Vec<_>>(),
                }],
            }),
            ChartType::Pie => json!({
                "chart": { "type": "pie", "backgroundColor": self.theme.background },
                "title": self.title_options(),
                "credits": { "enabled": false },
                "plotOptions": {
                    "pie": { "borderWidth": 0, "dataLabels": { "style": { "color": text } } },
                },
                "series": [{
                    "name": self.series_name,
                    "data": self.series
                        .iter()
                        .map(|p| json!({ "name": p.label, "y": p.value }))
                        .collect::<Vec<_>>(),
                }],
            }),
            ChartType::MapBubble => json!({
                "chart": { "map": WORLD_MAP_KEY, "backgroundColor": self.theme.background },
                "title": self.title_options(),
                "mapNavigation": {
                    "enabled": true,
                    "buttonOptions": { "theme": { "fill": self.theme.map_button_fill } },
                },
                "credits": { "enabled": false },
                "series": [{
                    "name": self.series_name,
                    "type": "mapbubble",
                    "joinBy": ["iso-a3", "code"],
                    "data": self.points.iter().map(GeoPoint::to_bubble).collect::<Vec<_>>(),
                    "color": self.theme.bubble_color,
                    "dataLabels": {
                        "enabled": true,
                        "format": "{point.name}",
                        "style": { "color": text },
                    },
                }],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_series_index_for_index() {
        let pairs = pair_series(&labels(&["A", "B", "C"]), &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(pairs[0], SeriesPoint::new("A", 1.0));
        assert_eq!(pairs[2], SeriesPoint::new("C", 3.0));
    }

    #[test]
    fn test_pair_series_rejects_mismatch() {
        let err = pair_series(&labels(&["A", "B"]), &[1.0]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                categories: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_empty_container_id_rejected() {
        let err = ChartSpec::pie("  ", "Share", vec![]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyContainerId);
    }

    #[test]
    fn test_bar_options() {
        let spec = ChartSpec::bar("bar", "Funding", labels(&["X", "Y"]), &[5.0, 4.0]).unwrap();
        let options = spec.to_options();

        assert_eq!(options["chart"]["type"], "bar");
        assert_eq!(options["chart"]["backgroundColor"], "rgb(9 17 30)");
        assert_eq!(options["title"]["text"], "Funding");
        assert_eq!(options["title"]["style"]["color"], "white");
        assert_eq!(options["xAxis"]["categories"], json!(["X", "Y"]));
        assert_eq!(options["yAxis"]["min"], 0);
        assert_eq!(options["credits"]["enabled"], false);
        assert_eq!(options["series"][0]["name"], "Funding");
        assert_eq!(options["series"][0]["data"], json!([5.0, 4.0]));
    }

    #[test]
    fn test_pie_options() {
        let spec = ChartSpec::pie(
            "pie",
            "Industry",
            vec![SeriesPoint::new("Retail", 10.0)],
        )
        .unwrap();
        let options = spec.to_options();

        assert_eq!(spec.chart_type.constructor(), "chart");
        assert_eq!(options["chart"]["type"], "pie");
        assert_eq!(options["series"][0]["name"], "Share");
        assert_eq!(options["series"][0]["data"][0], json!({ "name": "Retail", "y": 10.0 }));
    }

    #[test]
    fn test_map_bubble_options() {
        let points = vec![
            GeoPoint::new("USA", 37.7749, -122.4194).with_weight(10.0),
            GeoPoint::new("GBR", 51.5074, -0.1278),
        ];
        let spec = ChartSpec::map_bubble("map", "Company Locations", points).unwrap();
        let options = spec.to_options();

        assert_eq!(spec.chart_type.constructor(), "mapChart");
        assert_eq!(options["chart"]["map"], WORLD_MAP_KEY);
        assert_eq!(options["mapNavigation"]["enabled"], true);
        assert_eq!(options["series"][0]["type"], "mapbubble");
        assert_eq!(options["series"][0]["color"], "#FF5733");
        assert_eq!(options["series"][0]["data"][0]["z"], 10.0);
        assert!(options["series"][0]["data"][1].get("z").is_none());
    }
}
