//! Node rendering: turns one document node into canvas calls.
//!
//! The renderer never fails on a badly shaped node. A leaf in container position,
//! a container with nothing to draw, or a node type it does not know all render
//! as nothing. Only canvas errors propagate, and they abort the traversal.

mod inline;
mod list;

#[cfg(test)]
mod render_test;

use crate::config::LayoutConfig;
use folio_render_core::{PageCanvas, RenderError};
use folio_types::{Node, NodeKind};

/// Draws nodes onto a canvas it borrows exclusively for the duration of a
/// conversion.
pub struct NodeRenderer<'a, C: PageCanvas + ?Sized> {
    canvas: &'a mut C,
    layout: &'a LayoutConfig,
}

impl<'a, C: PageCanvas + ?Sized> NodeRenderer<'a, C> {
    pub fn new(canvas: &'a mut C, layout: &'a LayoutConfig) -> Self {
        Self { canvas, layout }
    }

    /// Renders one top-level node.
    pub fn render(&mut self, node: &Node) -> Result<(), RenderError> {
        match &node.kind {
            NodeKind::Paragraph => self.render_paragraph(node),
            NodeKind::Heading => self.render_heading(node),
            NodeKind::BulletList => self.render_list(node, false),
            NodeKind::OrderedList => self.render_list(node, true),
            NodeKind::ListItem => {
                log::debug!("Skipping list_item outside of a list");
                Ok(())
            }
            NodeKind::Text => {
                log::debug!("Skipping text leaf outside of a block");
                Ok(())
            }
            NodeKind::Unknown(tag) => {
                log::debug!("Skipping unsupported node type '{}'", tag);
                Ok(())
            }
        }
    }

    pub(crate) fn paragraph_break(&mut self) -> Result<(), RenderError> {
        self.canvas.advance_vertical(self.layout.paragraph_gap)
    }
}
