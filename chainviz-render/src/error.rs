//! Error types for rendering and export

use std::path::PathBuf;

use chainviz_core::DataError;
use plotters::drawing::DrawingAreaErrorKind;

/// Error types for chart rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("cannot prepare output directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(err.to_string())
    }
}

/// Result alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
