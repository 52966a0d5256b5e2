//! Faces registered on a canvas, with the metrics needed to measure and embed them.

use crate::encoding::decode_byte;
use crate::metrics::standard_face;
use folio_render_core::{FontSource, RenderError};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub(crate) enum FontKind {
    /// A standard Type1 face, referenced by name and never embedded.
    Standard { base_font: &'static str },
    /// A TrueType face embedded as `FontFile2`.
    TrueType(TrueTypeFace),
}

#[derive(Debug, Clone)]
pub(crate) struct TrueTypeFace {
    pub postscript_name: String,
    pub data: Arc<Vec<u8>>,
    pub flags: i64,
    pub bbox: [i64; 4],
    pub italic_angle: i64,
    pub ascent: i64,
    pub descent: i64,
    pub cap_height: i64,
}

/// A face loaded under a logical name (`regular`, `bold`, ...).
#[derive(Debug, Clone)]
pub(crate) struct LoadedFont {
    pub name: String,
    /// Name of the entry in the page resource dictionary, e.g. `F1`.
    pub resource_name: String,
    pub kind: FontKind,
    /// Advance of every WinAnsi code, in 1/1000 em.
    widths: Box<[u16; 256]>,
}

impl LoadedFont {
    pub fn load(name: &str, resource_name: String, source: &FontSource) -> Result<Self, RenderError> {
        match source {
            FontSource::Standard(base) => Self::standard(name, resource_name, base),
            FontSource::File(path) => {
                let data = std::fs::read(path).map_err(|e| {
                    RenderError::font_load(name, format!("{}: {}", path.display(), e))
                })?;
                Self::true_type(name, resource_name, Arc::new(data))
            }
            FontSource::Bytes(data) => Self::true_type(name, resource_name, data.clone()),
        }
    }

    fn standard(name: &str, resource_name: String, base: &str) -> Result<Self, RenderError> {
        let face = standard_face(base).ok_or_else(|| {
            RenderError::font_load(name, format!("'{}' is not a supported standard font", base))
        })?;
        let mut widths = Box::new([0u16; 256]);
        for (code, width) in widths.iter_mut().enumerate() {
            *width = face.width(code as u8);
        }
        Ok(Self {
            name: name.to_string(),
            resource_name,
            kind: FontKind::Standard { base_font: face.base_font },
            widths,
        })
    }

    fn true_type(name: &str, resource_name: String, data: Arc<Vec<u8>>) -> Result<Self, RenderError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| RenderError::font_load(name, e))?;
        let scale = 1000.0 / face.units_per_em() as f32;
        let to_pdf = |v: i16| (v as f32 * scale).round() as i64;

        let missing_width = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .map(|adv| (adv as f32 * scale).round() as u16)
            .unwrap_or(0);
        let mut widths = Box::new([missing_width; 256]);
        for (code, width) in widths.iter_mut().enumerate() {
            let advance = decode_byte(code as u8)
                .and_then(|c| face.glyph_index(c))
                .and_then(|glyph| face.glyph_hor_advance(glyph));
            if let Some(adv) = advance {
                *width = (adv as f32 * scale).round() as u16;
            }
        }

        let postscript_name = face
            .names()
            .into_iter()
            .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|n| n.to_string())
            .map(|n| n.chars().filter(|c| c.is_ascii_graphic()).collect::<String>())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Folio-{}", name));

        // Nonsymbolic, plus FixedPitch and Italic when the face says so.
        let mut flags = 32;
        if face.is_monospaced() {
            flags |= 1;
        }
        if face.is_italic() {
            flags |= 64;
        }

        let bbox = face.global_bounding_box();
        let ascent = to_pdf(face.ascender());
        Ok(Self {
            name: name.to_string(),
            resource_name,
            kind: FontKind::TrueType(TrueTypeFace {
                postscript_name,
                flags,
                bbox: [to_pdf(bbox.x_min), to_pdf(bbox.y_min), to_pdf(bbox.x_max), to_pdf(bbox.y_max)],
                italic_angle: if face.is_italic() { -12 } else { 0 },
                ascent,
                descent: to_pdf(face.descender()),
                cap_height: face.capital_height().map(to_pdf).unwrap_or(ascent),
                data: data.clone(),
            }),
            widths,
        })
    }

    pub fn width(&self, code: u8) -> u16 {
        self.widths[code as usize]
    }

    /// Width of WinAnsi-encoded text at `size_pt`, in points.
    pub fn text_width(&self, encoded: &[u8], size_pt: f32) -> f32 {
        let units: u32 = encoded.iter().map(|&b| self.width(b) as u32).sum();
        units as f32 * size_pt / 1000.0
    }

    /// The `/Widths` array for codes 32..=255.
    pub fn pdf_widths(&self) -> Vec<i64> {
        self.widths[32..].iter().map(|w| *w as i64).collect()
    }
}
