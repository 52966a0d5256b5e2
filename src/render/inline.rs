use super::NodeRenderer;
use folio_render_core::{PageCanvas, RenderError};
use folio_style::{ResolvedStyle, resolve_heading, resolve_marks};
use folio_types::{Mark, Node};

impl<C: PageCanvas + ?Sized> NodeRenderer<'_, C> {
    /// Draws the text leaves of a block on the current line, then breaks.
    pub(crate) fn render_paragraph(&mut self, node: &Node) -> Result<(), RenderError> {
        self.render_runs(node, resolve_marks)?;
        self.paragraph_break()
    }

    /// Like a paragraph, but every run is bold at the size derived from the
    /// heading level.
    pub(crate) fn render_heading(&mut self, node: &Node) -> Result<(), RenderError> {
        let level = node.level();
        self.render_runs(node, |marks| resolve_heading(marks, level))?;
        self.paragraph_break()
    }

    fn render_runs(
        &mut self,
        node: &Node,
        resolve: impl Fn(&[Mark]) -> ResolvedStyle,
    ) -> Result<(), RenderError> {
        for child in node.content.iter().filter(|child| child.has_text()) {
            let style = resolve(&child.marks);
            self.draw_run(child.text_str(), &style)?;
        }
        Ok(())
    }

    fn draw_run(&mut self, text: &str, style: &ResolvedStyle) -> Result<(), RenderError> {
        self.canvas.select_font(style.variant.face_name(), style.size_pt)?;
        self.canvas.select_color(&style.color_token)?;
        self.canvas.emit_text_cell(text)
    }
}
