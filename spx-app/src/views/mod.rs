//! Top-level route views.

mod dashboard;
mod locations;
mod upload;

pub use dashboard::Dashboard;
pub use locations::CompanyLocations;
pub use upload::Upload;
