// src/error.rs
use folio_render_core::RenderError;
use thiserror::Error;

/// Errors returned by a document conversion.
///
/// Canvas failures are split by when they happened: `Setup` while the page and
/// faces were being prepared, `Canvas` once nodes were being drawn. Either way no
/// partial document is produced.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Canvas setup failed: {0}")]
    Setup(#[source] RenderError),

    #[error("Rendering failed: {0}")]
    Canvas(#[source] RenderError),

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The canvas could not be prepared; no node was rendered.
    Setup,
    /// The canvas rejected an operation while drawing or finalizing.
    Canvas,
    /// The input could not be decoded into a document.
    Input,
    /// Reading input or writing output failed.
    Io,
    Config,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Setup(_) => ErrorKind::Setup,
            ConvertError::Canvas(_) => ErrorKind::Canvas,
            ConvertError::Json(_) => ErrorKind::Input,
            ConvertError::Io(_) => ErrorKind::Io,
            ConvertError::Config(_) => ErrorKind::Config,
        }
    }

    /// The backend error behind a setup or canvas failure.
    pub fn render_error(&self) -> Option<&RenderError> {
        match self {
            ConvertError::Setup(e) | ConvertError::Canvas(e) => Some(e),
            _ => None,
        }
    }
}
