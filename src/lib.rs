//! folio renders rich-text document trees into paginated PDF.
//!
//! A document is a JSON array of top-level nodes (paragraphs, headings, bullet
//! and ordered lists) whose text leaves carry style marks. The
//! [`DocumentConverter`] walks the nodes in order, resolves each leaf's marks to a
//! concrete font and color, and draws the result onto a
//! [`PageCanvas`](folio_render_core::PageCanvas).
//!
//! ```no_run
//! use folio::{ConverterConfig, DocumentConverter};
//!
//! let json = br#"[{"type":"paragraph","content":[{"type":"text","text":"Hello"}]}]"#;
//! let pdf = DocumentConverter::new(ConverterConfig::default()).convert_json(json)?;
//! std::fs::write("hello.pdf", pdf)?;
//! # Ok::<(), folio::ConvertError>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod render;

pub use config::{ConverterConfig, FontConfig, LayoutConfig, PageConfig};
pub use driver::DocumentConverter;
pub use error::{ConvertError, ErrorKind};
pub use render::NodeRenderer;

pub use folio_render_core::{FontSource, PageCanvas, RecordingCanvas, RenderError};
pub use folio_render_lopdf::LopdfCanvas;
pub use folio_style::{FontVariant, Margins, PageSize};
pub use folio_types::{Mark, MarkKind, Node, NodeKind};
