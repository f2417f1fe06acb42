//! View state managed via Dioxus context.
//!
//! Each view provides its own state with `use_context_provider`, so nothing
//! outlives the route that created it. Child components retrieve it with
//! `use_context::<...>()`.

use dioxus::prelude::*;
use spx_core::upload::UploadState;

/// State of the upload view.
#[derive(Clone, Copy)]
pub struct UploadContext {
    /// The two file slots
    pub files: Signal<UploadState>,
}

impl UploadContext {
    pub fn new() -> Self {
        Self {
            files: Signal::new(UploadState::new()),
        }
    }
}

/// Render status shared by the chart views.
#[derive(Clone, Copy)]
pub struct RenderStatus {
    /// Whether charts are still being drawn
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl RenderStatus {
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Record the outcome of a render pass.
    pub fn finish(&mut self, errors: Vec<String>) {
        if !errors.is_empty() {
            self.error_msg.set(Some(errors.join("; ")));
        }
        self.loading.set(false);
    }
}
