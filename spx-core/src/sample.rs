//! Hardcoded sample metrics shown on the dashboard and map.
//!
//! None of this is derived from the uploaded files.

use crate::chart::SeriesPoint;
use crate::geo::GeoPoint;

/// Milwaukee-area candidate sponsors, index-aligned with [`SIMILARITIES`].
pub const COMPANIES: [&str; 21] = [
    "Advocate Aurora Health",
    "Froedtert Health",
    "Ascension Wisconsin",
    "Quad",
    "Medical College of Wisconsin",
    "Kohl's",
    "GE Healthcare",
    "Goodwill Industries",
    "Rockwell Automation",
    "WEC Energy Group",
    "Harley-Davidson",
    "Milwaukee Tool",
    "Johnson Controls",
    "Robert W. Baird & Company",
    "ManpowerGroup",
    "Fiserv",
    "BMO Harris Bank",
    "Briggs & Stratton Corp.",
    "Children's Wisconsin",
    "Generac Holdings Inc.",
    "ProHealth Care",
];

/// Description similarity per company (0..1).
pub const SIMILARITIES: [f64; 21] = [
    0.503, 0.557, 0.204, 0.999, 0.813, 0.44, 0.155, 0.384, 0.318, 0.974, 0.559, 0.98, 0.462,
    0.601, 0.685, 0.619, 0.662, 0.847, 0.362, 0.25, 0.117,
];

/// Percentage share per industry.
pub const INDUSTRY_ALIGNMENT: [(&str, f64); 5] = [
    ("Healthcare", 30.0),
    ("Finance", 20.0),
    ("Manufacturing", 25.0),
    ("Technology", 15.0),
    ("Retail", 10.0),
];

/// Funding capacity in thousands of dollars.
pub const FUNDING_CAPACITY: [(&str, f64); 5] = [
    ("GE Healthcare", 500.0),
    ("Fiserv", 450.0),
    ("Johnson Controls", 400.0),
    ("Harley-Davidson", 350.0),
    ("Kohl's", 300.0),
];

pub const MILWAUKEE_VS_NATIONAL: [(&str, f64); 2] = [("Milwaukee-based", 40.0), ("National", 60.0)];

pub const UNTAPPED_SPONSORS: [(&str, f64); 3] = [
    ("XYZ Corporation", 700.0),
    ("ABC Industries", 650.0),
    ("LMN Solutions", 600.0),
];

pub fn companies() -> Vec<String> {
    COMPANIES.iter().map(|c| c.to_string()).collect()
}

pub fn series(pairs: &[(&str, f64)]) -> Vec<SeriesPoint> {
    pairs
        .iter()
        .map(|(label, value)| SeriesPoint::new(*label, *value))
        .collect()
}

/// Marker map locations.
pub fn company_locations() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new("Company A", 37.7749, -122.4194),
        GeoPoint::new("Company B", 40.7128, -74.006),
        GeoPoint::new("Company C", 34.0522, -118.2437),
    ]
}

/// World bubble map points, labelled by ISO-3 country code.
pub fn world_bubbles() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new("USA", 37.7749, -122.4194).with_weight(10.0),
        GeoPoint::new("IND", 28.6139, 77.209),
        GeoPoint::new("GBR", 51.5074, -0.1278),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarities_cover_every_company() {
        assert_eq!(COMPANIES.len(), 21);
        assert_eq!(SIMILARITIES.len(), COMPANIES.len());
        assert!(SIMILARITIES.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_industry_shares_sum_to_100() {
        let total: f64 = INDUSTRY_ALIGNMENT.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 100.0);
    }
}
