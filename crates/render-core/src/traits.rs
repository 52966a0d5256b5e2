use crate::error::RenderError;
use crate::types::FontSource;
use folio_style::{Margins, PageSize};

/// The page-drawing capability the node renderer draws through.
///
/// A canvas owns the cursor, the current font and color, and the pages drawn so
/// far. One conversion exclusively owns one canvas; nothing here is shared.
///
/// Coordinates are in points with the origin at the top-left corner of the page.
pub trait PageCanvas {
    /// Allocates the first page and places the cursor at the top-left margin.
    fn initialize_page(&mut self, size: &PageSize, margins: &Margins) -> Result<(), RenderError>;

    /// Loads a face and makes it selectable under `name`.
    fn register_font(&mut self, name: &str, source: &FontSource) -> Result<(), RenderError>;

    /// Sets the face and size used by subsequent text cells.
    fn select_font(&mut self, name: &str, size_pt: f32) -> Result<(), RenderError>;

    /// Sets the text color. Unrecognized tokens draw black.
    fn select_color(&mut self, token: &str) -> Result<(), RenderError>;

    /// Draws `text` at the cursor and advances the cursor by its width.
    fn emit_text_cell(&mut self, text: &str) -> Result<(), RenderError>;

    /// Moves the cursor to an absolute horizontal position.
    fn set_horizontal_cursor(&mut self, x: f32) -> Result<(), RenderError>;

    /// Breaks the line: returns to the left margin and moves down by `units`.
    fn advance_vertical(&mut self, units: f32) -> Result<(), RenderError>;

    /// Serializes every page drawn so far into the final artifact.
    fn finalize(&mut self) -> Result<Vec<u8>, RenderError>;
}
