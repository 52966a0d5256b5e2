use crate::font::FontVariant;
use folio_types::{Color, Mark, MarkKind};

pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_COLOR: &str = "black";

/// The concrete style of one text run, derived from its marks at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub variant: FontVariant,
    pub size_pt: f32,
    /// The color token as authored; see [`ResolvedStyle::color`] for the drawn color.
    pub color_token: String,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            variant: FontVariant::Regular,
            size_pt: DEFAULT_FONT_SIZE,
            color_token: DEFAULT_COLOR.to_string(),
        }
    }
}

impl ResolvedStyle {
    pub fn color(&self) -> Color {
        Color::from_token(&self.color_token)
    }
}

/// Folds a leaf's marks over the default style, in authored order.
///
/// Later marks win per attribute. `underline` and unrecognized marks leave the
/// style untouched.
pub fn resolve_marks(marks: &[Mark]) -> ResolvedStyle {
    let mut style = ResolvedStyle::default();
    for mark in marks {
        match &mark.kind {
            MarkKind::Bold => style.variant = FontVariant::Bold,
            MarkKind::Italic => style.variant = FontVariant::Italic,
            MarkKind::Underline => {}
            MarkKind::TextColor => style.color_token = mark.color().to_string(),
            MarkKind::Unknown(tag) => log::debug!("Ignoring unsupported mark '{}'", tag),
        }
    }
    style
}

/// Point size of a heading: `18 - 2 * level`.
///
/// Not clamped; level 9 yields 0 and deeper levels go negative.
pub fn heading_size(level: i64) -> f32 {
    (18.0 - 2.0 * level as f64) as f32
}

/// Style of a text run inside a heading: the face is always bold and the size
/// comes from the level, while color marks still apply.
pub fn resolve_heading(marks: &[Mark], level: i64) -> ResolvedStyle {
    ResolvedStyle {
        variant: FontVariant::Bold,
        size_pt: heading_size(level),
        ..resolve_marks(marks)
    }
}
