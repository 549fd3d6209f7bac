//! Error types for histogram rendering

use crate::charts::BackendError;
use crate::data::PayloadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Element not found on page: {0}")]
    MissingElement(String),

    #[error("Render target `{0}` is also the data-source element")]
    MountConflict(String),

    #[error("Malformed histogram payload: {0}")]
    MalformedPayload(#[from] PayloadError),

    #[error("Chart backend failed: {0}")]
    Backend(#[from] BackendError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
