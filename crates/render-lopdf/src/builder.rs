//! Assembles the lopdf object graph: fonts, shared resources, pages, catalog.

use crate::fonts::{FontKind, LoadedFont, TrueTypeFace};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use folio_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;

const PRODUCER: &str = concat!("folio ", env!("CARGO_PKG_VERSION"));

fn pdf_error(err: lopdf::Error) -> RenderError {
    RenderError::Pdf(err.to_string())
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

pub(crate) struct DocumentBuilder {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self { document, pages_id, resources_id, page_ids: Vec::new() }
    }

    /// Writes every registered face and the resource dictionary all pages share.
    pub fn add_fonts(&mut self, fonts: &[LoadedFont]) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();
        for font in fonts {
            let font_id = match &font.kind {
                FontKind::Standard { base_font } => self.document.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => *base_font,
                    "Encoding" => "WinAnsiEncoding",
                }),
                FontKind::TrueType(face) => self.add_true_type(font, face)?,
            };
            font_dict.set(font.resource_name.as_bytes(), font_id);
        }
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(dictionary! { "Font" => font_dict }));
        Ok(())
    }

    fn add_true_type(&mut self, font: &LoadedFont, face: &TrueTypeFace) -> Result<ObjectId, RenderError> {
        let file = Stream::new(
            dictionary! {
                "Length1" => face.data.len() as i64,
                "Filter" => "FlateDecode",
            },
            deflate(&face.data)?,
        );
        let file_id = self.document.add_object(file);

        let descriptor_id = self.document.add_object(dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => Object::Name(face.postscript_name.as_bytes().to_vec()),
            "Flags" => face.flags,
            "FontBBox" => face.bbox.iter().map(|v| Object::Integer(*v)).collect::<Vec<_>>(),
            "ItalicAngle" => face.italic_angle,
            "Ascent" => face.ascent,
            "Descent" => face.descent,
            "CapHeight" => face.cap_height,
            "StemV" => 80,
            "FontFile2" => file_id,
        });

        Ok(self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "TrueType",
            "BaseFont" => Object::Name(face.postscript_name.as_bytes().to_vec()),
            "FirstChar" => 32,
            "LastChar" => 255,
            "Widths" => font.pdf_widths().into_iter().map(Object::Integer).collect::<Vec<_>>(),
            "Encoding" => "WinAnsiEncoding",
            "FontDescriptor" => descriptor_id,
        }))
    }

    pub fn add_page(&mut self, content: Content, width: f32, height: f32) -> Result<ObjectId, RenderError> {
        let encoded = content.encode().map_err(pdf_error)?;
        let stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflate(&encoded)?);
        let content_id = self.document.add_object(stream);

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => self.page_ids.len() as i64,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let info_id = self.document.add_object(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(created),
        });
        self.document.trailer.set("Root", catalog_id);
        self.document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        self.document
            .save_to(&mut bytes)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}
