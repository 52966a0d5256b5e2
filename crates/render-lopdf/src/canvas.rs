use crate::builder::DocumentBuilder;
use crate::encoding::to_win_ansi;
use crate::fonts::LoadedFont;
use crate::page::PageContent;
use folio_render_core::{FontSource, PageCanvas, RenderError};
use folio_style::{Margins, PageSize};
use folio_types::Color;
use lopdf::content::Content;

/// Baseline offset of a text cell below the cursor, as a fraction of font size.
const BASELINE_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy)]
struct PageGeometry {
    width: f32,
    height: f32,
    margins: Margins,
}

/// A [`PageCanvas`] that writes PDF pages with `lopdf`.
///
/// The cursor lives in top-left page coordinates; it is flipped into PDF user
/// space only when a text run is written to the page content.
pub struct LopdfCanvas {
    fonts: Vec<LoadedFont>,
    geometry: Option<PageGeometry>,
    pages: Vec<Content>,
    current: PageContent,
    x: f32,
    y: f32,
    font: Option<(usize, f32)>,
    color: Color,
    finalized: bool,
}

impl Default for LopdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfCanvas {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            geometry: None,
            pages: Vec::new(),
            current: PageContent::new(),
            x: 0.0,
            y: 0.0,
            font: None,
            color: Color::BLACK,
            finalized: false,
        }
    }

    /// Pages started so far, including the one being drawn.
    pub fn page_count(&self) -> usize {
        match self.geometry {
            Some(_) => self.pages.len() + 1,
            None => 0,
        }
    }

    /// Current cursor position in top-left page coordinates.
    pub fn cursor(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn geometry(&self) -> Result<PageGeometry, RenderError> {
        if self.finalized {
            return Err(RenderError::InvalidState("canvas has already been finalized".into()));
        }
        self.geometry
            .ok_or_else(|| RenderError::InvalidState("no page has been initialized".into()))
    }

    fn start_new_page(&mut self, geometry: &PageGeometry) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished.into_content());
        self.x = geometry.margins.left;
        self.y = geometry.margins.top;
        log::debug!("Started page {}", self.pages.len() + 1);
    }
}

impl PageCanvas for LopdfCanvas {
    fn initialize_page(&mut self, size: &PageSize, margins: &Margins) -> Result<(), RenderError> {
        if self.finalized || self.geometry.is_some() {
            return Err(RenderError::InvalidState("page has already been initialized".into()));
        }
        let (width, height) = size.dimensions_pt();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderError::Setup(format!("invalid page size {}x{}", width, height)));
        }
        if !margins.is_valid() || margins.left + margins.right >= width || margins.top + margins.bottom >= height {
            return Err(RenderError::Setup(format!(
                "margins {:?} leave no printable area on a {}x{} page",
                margins, width, height
            )));
        }
        self.geometry = Some(PageGeometry { width, height, margins: *margins });
        self.x = margins.left;
        self.y = margins.top;
        log::debug!("Initialized {}x{}pt page", width, height);
        Ok(())
    }

    fn register_font(&mut self, name: &str, source: &FontSource) -> Result<(), RenderError> {
        if self.finalized {
            return Err(RenderError::InvalidState("canvas has already been finalized".into()));
        }
        match self.fonts.iter().position(|f| f.name == name) {
            Some(index) => {
                let resource_name = self.fonts[index].resource_name.clone();
                self.fonts[index] = LoadedFont::load(name, resource_name, source)?;
                log::debug!("Replaced font '{}' with {}", name, source);
            }
            None => {
                let resource_name = format!("F{}", self.fonts.len() + 1);
                self.fonts.push(LoadedFont::load(name, resource_name, source)?);
                log::debug!("Registered font '{}' from {}", name, source);
            }
        }
        Ok(())
    }

    fn select_font(&mut self, name: &str, size_pt: f32) -> Result<(), RenderError> {
        if !size_pt.is_finite() {
            return Err(RenderError::InvalidFontSize(size_pt));
        }
        let index = self
            .fonts
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| RenderError::UnknownFont(name.to_string()))?;
        self.font = Some((index, size_pt));
        Ok(())
    }

    fn select_color(&mut self, token: &str) -> Result<(), RenderError> {
        if !Color::is_known_token(token) {
            log::debug!("Color token '{}' is drawn black", token);
        }
        self.color = Color::from_token(token);
        Ok(())
    }

    fn emit_text_cell(&mut self, text: &str) -> Result<(), RenderError> {
        let geometry = self.geometry()?;
        if text.is_empty() {
            return Ok(());
        }
        let (index, size_pt) = self
            .font
            .ok_or_else(|| RenderError::InvalidState("no font selected".into()))?;
        let font = &self.fonts[index];
        let encoded = to_win_ansi(text);
        let width = font.text_width(&encoded, size_pt);
        let baseline = self.y + size_pt * BASELINE_RATIO;
        self.current.show_text(
            &font.resource_name,
            size_pt,
            self.color,
            self.x,
            geometry.height - baseline,
            encoded,
        );
        self.x += width;
        Ok(())
    }

    fn set_horizontal_cursor(&mut self, x: f32) -> Result<(), RenderError> {
        self.geometry()?;
        self.x = x;
        Ok(())
    }

    fn advance_vertical(&mut self, units: f32) -> Result<(), RenderError> {
        let geometry = self.geometry()?;
        self.x = geometry.margins.left;
        self.y += units;
        if self.y > geometry.height - geometry.margins.bottom {
            self.start_new_page(&geometry);
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<Vec<u8>, RenderError> {
        let geometry = self.geometry()?;
        self.finalized = true;

        let mut builder = DocumentBuilder::new();
        builder.add_fonts(&self.fonts)?;
        let current = std::mem::take(&mut self.current);
        let pages = std::mem::take(&mut self.pages);
        let page_count = pages.len() + 1;
        for content in pages.into_iter().chain(std::iter::once(current.into_content())) {
            builder.add_page(content, geometry.width, geometry.height)?;
        }
        let bytes = builder.finish()?;
        log::debug!("Finalized PDF: {} page(s), {} bytes", page_count, bytes.len());
        Ok(bytes)
    }
}
