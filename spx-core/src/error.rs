/// Error types for the Sponsorytics dashboard.
use crate::upload::Slot;
use thiserror::Error;

/// Input rejected before anything is rendered or navigated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Dashboard requested with one or both upload slots empty
    #[error("Please upload both files before generating the dashboard.")]
    MissingFiles { missing: Vec<Slot> },

    /// Bar chart categories and values do not pair index-for-index
    #[error("Category/value length mismatch (categories: {categories}, values: {values})")]
    LengthMismatch { categories: usize, values: usize },

    /// A chart or map was built without a container id
    #[error("Render target id must not be empty")]
    EmptyContainerId,
}

/// Main error type for dashboard operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No DOM element with the given id exists at render time
    #[error("Render target not found: #{container_id}")]
    RenderTargetMissing { container_id: String },

    /// The JS library backing a surface has not been loaded on the page
    #[error("{library} is not loaded")]
    LibraryUnavailable { library: &'static str },

    /// A call into the charting or mapping library threw
    #[error("Script error: {message}")]
    Script { message: String },
}

/// Type alias for Results using Error
pub type Result<T> = std::result::Result<T, Error>;
