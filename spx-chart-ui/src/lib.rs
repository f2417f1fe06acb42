//! Shared Dioxus components and Highcharts/Leaflet bridge for the
//! Sponsorytics dashboard.
//!
//! This crate provides:
//! - `js_bridge`: browser surfaces implementing the `spx-core` render traits
//! - `state`: reactive view state with Dioxus Signals
//! - `components`: reusable RSX components (header, containers, upload slots)

pub mod js_bridge;
pub mod state;
pub mod components;
