//! Fixed styling constants shared by every chart.

use serde::Serialize;

/// Dark dashboard theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    /// Chart and map background
    pub background: &'static str,
    /// Titles, axis labels, legend and data labels
    pub text: &'static str,
    /// Header bar background
    pub header_background: &'static str,
    /// Marker colour for bubble map series
    pub bubble_color: &'static str,
    /// Fill of the map zoom buttons
    pub map_button_fill: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "rgb(9 17 30)",
            text: "white",
            header_background: "#141b28",
            bubble_color: "#FF5733",
            map_button_fill: "#303030",
        }
    }
}
