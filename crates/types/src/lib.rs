//! Document model shared by every folio crate.
//!
//! A document is an ordered sequence of top-level [`Node`]s, usually decoded from
//! the JSON produced by a rich-text editor. Node and mark types form closed enums
//! with an explicit `Unknown` variant so that unsupported content degrades to a
//! no-op instead of a decoding failure.

pub mod color;
pub mod document;

pub use color::Color;
pub use document::{Attributes, Mark, MarkKind, Node, NodeKind};
