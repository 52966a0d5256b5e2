use super::NodeRenderer;
use folio_render_core::{PageCanvas, RenderError};
use folio_types::{Node, NodeKind};

impl<C: PageCanvas + ?Sized> NodeRenderer<'_, C> {
    /// Draws each `list_item` child as an indented marker followed by the item's
    /// first block.
    ///
    /// Ordered markers count every child of the list, so a non-item child still
    /// consumes a number. The marker is drawn in whatever font and color the
    /// canvas currently has selected.
    pub(crate) fn render_list(&mut self, node: &Node, ordered: bool) -> Result<(), RenderError> {
        for (index, item) in node.content.iter().enumerate() {
            if item.kind != NodeKind::ListItem {
                log::debug!("Skipping '{}' child of a list", item.kind.tag());
                continue;
            }
            self.canvas.set_horizontal_cursor(self.layout.list_indent)?;
            if ordered {
                self.canvas.emit_text_cell(&format!("{}. ", index + 1))?;
            } else {
                self.canvas.emit_text_cell(&self.layout.bullet)?;
            }
            self.render_item_body(item)?;
        }
        Ok(())
    }

    /// The first block of an item is always drawn as a paragraph, whatever its
    /// type. An item without blocks still gets its paragraph break.
    fn render_item_body(&mut self, item: &Node) -> Result<(), RenderError> {
        match item.content.split_first() {
            Some((first, rest)) => {
                if !rest.is_empty() {
                    log::debug!("Ignoring {} extra block(s) in list item", rest.len());
                }
                self.render_paragraph(first)
            }
            None => self.paragraph_break(),
        }
    }
}
