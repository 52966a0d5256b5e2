use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Operations of one page, with the text state already written to the stream so
/// redundant `Tf`/`rg` operators are skipped.
#[derive(Default)]
pub(crate) struct PageContent {
    operations: Vec<Operation>,
    font: Option<(String, f32)>,
    fill_color: Option<Color>,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Draws one run of already-encoded text with its baseline at (`x`, `y`) in
    /// PDF user space.
    pub fn show_text(&mut self, resource_name: &str, size_pt: f32, color: Color, x: f32, y: f32, encoded: Vec<u8>) {
        self.operations.push(Operation::new("BT", vec![]));
        self.set_font(resource_name, size_pt);
        self.set_fill_color(color);
        self.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.operations
            .push(Operation::new("Tj", vec![Object::String(encoded, StringFormat::Literal)]));
        self.operations.push(Operation::new("ET", vec![]));
    }

    fn set_font(&mut self, resource_name: &str, size_pt: f32) {
        let unchanged = self
            .font
            .as_ref()
            .is_some_and(|(name, size)| name == resource_name && *size == size_pt);
        if !unchanged {
            self.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(resource_name.as_bytes().to_vec()), size_pt.into()],
            ));
            self.font = Some((resource_name.to_string(), size_pt));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            self.fill_color = Some(color);
        }
    }

    pub fn into_content(self) -> Content {
        Content { operations: self.operations }
    }
}
