use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Page setup failed: {0}")]
    Setup(String),
    #[error("Failed to load font '{name}': {reason}")]
    FontLoad { name: String, reason: String },
    #[error("Font '{0}' has not been registered")]
    UnknownFont(String),
    #[error("Invalid font size {0}")]
    InvalidFontSize(f32),
    #[error("Canvas is in an invalid state: {0}")]
    InvalidState(String),
    #[error("PDF generation error: {0}")]
    Pdf(String),
}

impl RenderError {
    pub fn font_load(name: impl Into<String>, reason: impl ToString) -> Self {
        RenderError::FontLoad { name: name.into(), reason: reason.to_string() }
    }
}
