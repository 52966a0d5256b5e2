//! A canvas that records every call instead of drawing.
//!
//! Used to observe exactly what the node renderer asks of a backend, and as a dry
//! run backend: its artifact is the call log, one call per line.

use crate::error::RenderError;
use crate::traits::PageCanvas;
use crate::types::FontSource;
use folio_style::{Margins, PageSize};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    InitializePage { width: f32, height: f32, margins: Margins },
    RegisterFont { name: String },
    SelectFont { name: String, size_pt: f32 },
    SelectColor(String),
    EmitText(String),
    SetHorizontalCursor(f32),
    AdvanceVertical(f32),
    Finalize,
}

impl CanvasCall {
    pub fn select_font(name: &str, size_pt: f32) -> Self {
        CanvasCall::SelectFont { name: name.to_string(), size_pt }
    }

    pub fn select_color(token: &str) -> Self {
        CanvasCall::SelectColor(token.to_string())
    }

    pub fn emit(text: &str) -> Self {
        CanvasCall::EmitText(text.to_string())
    }

    pub fn is_setup(&self) -> bool {
        matches!(self, CanvasCall::InitializePage { .. } | CanvasCall::RegisterFont { .. })
    }
}

impl fmt::Display for CanvasCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasCall::InitializePage { width, height, .. } => {
                write!(f, "initialize_page {} {}", width, height)
            }
            CanvasCall::RegisterFont { name } => write!(f, "register_font {}", name),
            CanvasCall::SelectFont { name, size_pt } => write!(f, "select_font {} {}", name, size_pt),
            CanvasCall::SelectColor(token) => write!(f, "select_color {:?}", token),
            CanvasCall::EmitText(text) => write!(f, "emit_text_cell {:?}", text),
            CanvasCall::SetHorizontalCursor(x) => write!(f, "set_horizontal_cursor {}", x),
            CanvasCall::AdvanceVertical(units) => write!(f, "advance_vertical {}", units),
            CanvasCall::Finalize => f.write_str("finalize"),
        }
    }
}

type FailurePredicate = Box<dyn Fn(&CanvasCall) -> bool + Send>;

#[derive(Default)]
pub struct RecordingCanvas {
    calls: Vec<CanvasCall>,
    fail_when: Option<FailurePredicate>,
    finalized: bool,
}

impl fmt::Debug for RecordingCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingCanvas")
            .field("calls", &self.calls)
            .field("finalized", &self.finalized)
            .finish()
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas that rejects every call matching `predicate`.
    ///
    /// Rejected calls are not recorded.
    pub fn failing_when(predicate: impl Fn(&CanvasCall) -> bool + Send + 'static) -> Self {
        Self {
            fail_when: Some(Box::new(predicate)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    /// The text of every emitted cell, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CanvasCall::EmitText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The call log in its artifact form.
    pub fn script(&self) -> String {
        self.calls.iter().map(|call| format!("{}\n", call)).collect()
    }

    fn record(&mut self, call: CanvasCall) -> Result<(), RenderError> {
        if self.fail_when.as_ref().is_some_and(|fails| fails(&call)) {
            return Err(match call {
                CanvasCall::RegisterFont { name } => {
                    RenderError::font_load(name, "rejected by recording canvas")
                }
                other => RenderError::InvalidState(format!("rejected `{}`", other)),
            });
        }
        log::trace!("{}", call);
        self.calls.push(call);
        Ok(())
    }
}

impl PageCanvas for RecordingCanvas {
    fn initialize_page(&mut self, size: &PageSize, margins: &Margins) -> Result<(), RenderError> {
        let (width, height) = size.dimensions_pt();
        self.record(CanvasCall::InitializePage { width, height, margins: *margins })
    }

    fn register_font(&mut self, name: &str, _source: &FontSource) -> Result<(), RenderError> {
        self.record(CanvasCall::RegisterFont { name: name.to_string() })
    }

    fn select_font(&mut self, name: &str, size_pt: f32) -> Result<(), RenderError> {
        self.record(CanvasCall::select_font(name, size_pt))
    }

    fn select_color(&mut self, token: &str) -> Result<(), RenderError> {
        self.record(CanvasCall::select_color(token))
    }

    fn emit_text_cell(&mut self, text: &str) -> Result<(), RenderError> {
        self.record(CanvasCall::emit(text))
    }

    fn set_horizontal_cursor(&mut self, x: f32) -> Result<(), RenderError> {
        self.record(CanvasCall::SetHorizontalCursor(x))
    }

    fn advance_vertical(&mut self, units: f32) -> Result<(), RenderError> {
        self.record(CanvasCall::AdvanceVertical(units))
    }

    fn finalize(&mut self) -> Result<Vec<u8>, RenderError> {
        if self.finalized {
            return Err(RenderError::InvalidState("canvas already finalized".into()));
        }
        self.record(CanvasCall::Finalize)?;
        self.finalized = true;
        Ok(self.script().into_bytes())
    }
}
