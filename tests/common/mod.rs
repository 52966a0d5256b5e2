#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use folio::{ConvertError, ConverterConfig, DocumentConverter, Node};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Convert a JSON node array with the default configuration
pub fn generate_pdf_from_json(document: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_config(document, ConverterConfig::default())
}

pub fn generate_pdf_with_config(
    document: &Value,
    config: ConverterConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let json = serde_json::to_vec(document)?;
    let bytes = DocumentConverter::new(config).convert_json(&json)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn convert_nodes(nodes: &[Node]) -> Result<Vec<u8>, ConvertError> {
    DocumentConverter::default().convert(nodes)
}
