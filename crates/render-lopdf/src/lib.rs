//! PDF page canvas for folio using lopdf.
//!
//! [`LopdfCanvas`] implements [`folio_render_core::PageCanvas`]: it keeps a
//! top-left cursor, turns text cells into content-stream operations, starts a new
//! page when a line break runs past the bottom margin, and assembles the final
//! document with `lopdf` on `finalize`.

mod builder;
mod canvas;
mod encoding;
mod fonts;
mod metrics;
mod page;

pub use canvas::LopdfCanvas;
