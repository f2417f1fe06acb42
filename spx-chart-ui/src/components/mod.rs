//! Reusable Dioxus RSX components for the Sponsorytics views.

mod chart_container;
mod error_display;
mod file_slot;
mod header;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use file_slot::FileSlot;
pub use header::Header;
