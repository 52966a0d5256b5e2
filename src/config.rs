//! Conversion settings: page geometry, layout constants and the three faces.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! classic layout: A4, 10pt margins, 20pt paragraph gap, 20pt list indent and
//! the Helvetica family.
//!
//! ```toml
//! [page]
//! size = "letter"
//! margins = "36pt"
//!
//! [layout]
//! paragraph_gap = 24
//!
//! [fonts]
//! regular = { file = "fonts/arial/ARIAL.TTF" }
//! bold = { file = "fonts/arial/ARIALBD.TTF" }
//! italic = { file = "fonts/arial/ARIALI.TTF" }
//! ```

use crate::error::ConvertError;
use folio_render_core::FontSource;
use folio_style::{FontVariant, Margins, PageSize};
use serde::Deserialize;
use std::path::Path;

/// Prefix of the environment variables that override file settings, e.g.
/// `FOLIO__LAYOUT__PARAGRAPH_GAP=24`.
pub const ENV_PREFIX: &str = "FOLIO";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub page: PageConfig,
    pub layout: LayoutConfig,
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub size: PageSize,
    pub margins: Margins,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical advance after every paragraph and heading.
    pub paragraph_gap: f32,
    /// Horizontal cursor position of list markers.
    pub list_indent: f32,
    /// Marker drawn before each bullet list item.
    pub bullet: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            paragraph_gap: 20.0,
            list_indent: 20.0,
            bullet: "• ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: FontSource,
    pub bold: FontSource,
    pub italic: FontSource,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: FontSource::standard("Helvetica"),
            bold: FontSource::standard("Helvetica-Bold"),
            italic: FontSource::standard("Helvetica-Oblique"),
        }
    }
}

impl FontConfig {
    pub fn source(&self, variant: FontVariant) -> &FontSource {
        match variant {
            FontVariant::Regular => &self.regular,
            FontVariant::Bold => &self.bold,
            FontVariant::Italic => &self.italic,
        }
    }
}

impl ConverterConfig {
    /// Loads settings from a TOML or JSON file (picked by extension), then
    /// applies `FOLIO__*` environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        log::debug!("Loading converter configuration from {}", path.display());
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Defaults with `FOLIO__*` environment overrides applied.
    pub fn from_env() -> Result<Self, ConvertError> {
        let settings = config::Config::builder().add_source(environment()).build()?;
        Ok(settings.try_deserialize()?)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
