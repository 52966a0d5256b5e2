//! Style resolution for folio.
//!
//! - [`resolve_marks`] turns the marks of a text leaf into a [`ResolvedStyle`].
//! - [`resolve_heading`] applies the heading overrides (bold face, level-derived size).
//! - [`PageSize`] and [`Margins`] describe the page the styles are drawn on.

pub mod dimension;
pub mod font;
pub mod resolver;


pub use dimension::{Margins, PageSize, StyleParseError};
pub use font::FontVariant;
pub use resolver::{
    DEFAULT_COLOR, DEFAULT_FONT_SIZE, ResolvedStyle, heading_size, resolve_heading, resolve_marks,
};
