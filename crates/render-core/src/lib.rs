//! Core rendering abstractions for folio.
//!
//! This crate provides what sits between the node renderer and a page backend:
//! - `PageCanvas`, the drawing capability a backend implements
//! - `RenderError` for setup and drawing failures
//! - `FontSource`, where a logical face is loaded from
//! - `RecordingCanvas`, a backend that records calls instead of drawing them

mod error;
pub mod recording;
mod traits;
mod types;

pub use error::RenderError;
pub use recording::{CanvasCall, RecordingCanvas};
pub use traits::PageCanvas;
pub use types::FontSource;
