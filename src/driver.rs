use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::render::NodeRenderer;
use folio_render_core::{PageCanvas, RenderError};
use folio_render_lopdf::LopdfCanvas;
use folio_style::{DEFAULT_FONT_SIZE, FontVariant};
use folio_types::Node;
use std::time::Instant;

/// Converts top-level node sequences into finished documents.
///
/// A converter holds only configuration. Every call to [`convert`](Self::convert)
/// builds a fresh canvas, so one converter can serve many threads at once.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter {
    config: ConverterConfig,
}

impl DocumentConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Renders `nodes` into a PDF.
    pub fn convert(&self, nodes: &[Node]) -> Result<Vec<u8>, ConvertError> {
        let mut canvas = LopdfCanvas::new();
        self.convert_with(&mut canvas, nodes)
    }

    /// Decodes a JSON array of top-level nodes and renders it into a PDF.
    pub fn convert_json(&self, json: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let nodes: Vec<Node> = serde_json::from_slice(json)?;
        self.convert(&nodes)
    }

    /// Runs a full conversion against a caller-supplied canvas: setup, every
    /// top-level node in order, then finalize.
    ///
    /// The first failure aborts the conversion and nothing is returned.
    pub fn convert_with<C: PageCanvas + ?Sized>(
        &self,
        canvas: &mut C,
        nodes: &[Node],
    ) -> Result<Vec<u8>, ConvertError> {
        let start = Instant::now();
        self.setup(canvas).map_err(ConvertError::Setup)?;

        let mut renderer = NodeRenderer::new(canvas, &self.config.layout);
        for node in nodes {
            renderer.render(node).map_err(ConvertError::Canvas)?;
        }

        let bytes = canvas.finalize().map_err(ConvertError::Canvas)?;
        log::info!(
            "Converted {} top-level node(s) into {} bytes in {:.2?}",
            nodes.len(),
            bytes.len(),
            start.elapsed()
        );
        Ok(bytes)
    }

    fn setup<C: PageCanvas + ?Sized>(&self, canvas: &mut C) -> Result<(), RenderError> {
        let page = &self.config.page;
        canvas.initialize_page(&page.size, &page.margins)?;
        for variant in FontVariant::ALL {
            canvas.register_font(variant.face_name(), self.config.fonts.source(variant))?;
        }
        canvas.select_font(FontVariant::Regular.face_name(), DEFAULT_FONT_SIZE)
    }
}
