use hexpage_model::ModelError;
use thiserror::Error;

/// Failure taxonomy for the controller and its collaborators.
///
/// Nothing here is fatal to the page: validation failures leave state
/// untouched, platform gaps fall back or are ignored, and export failures
/// surface a notice without retry.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ModelError),

    #[error("platform unavailable: {0}")]
    PlatformUnavailable(String),

    #[error("image encoding failed: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<image::ImageError> for CoreError {
    fn from(err: image::ImageError) -> Self {
        CoreError::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
