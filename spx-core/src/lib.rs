//! Core types for the Sponsorytics dashboard.
//!
//! This crate has no browser dependencies. It provides:
//! - `upload`: the two-slot upload gate in front of the dashboard
//! - `chart` / `geo` / `theme`: declarative chart, map and styling types
//! - `render` / `map`: rendering contracts over a pluggable surface
//! - `dashboard`: panel layout and the activate/deactivate lifecycle
//! - `sample`: the hardcoded metrics the dashboard displays

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod geo;
pub mod map;
pub mod render;
pub mod sample;
pub mod theme;
pub mod upload;

#[cfg(test)]
mod testing;

pub use error::{Error, Result, ValidationError};
