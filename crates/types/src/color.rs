use serde::{Deserialize, Serialize};

/// An opaque RGB color as drawn on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Maps a color token from a `textColor` mark to a concrete color.
    ///
    /// Only `"blue"` is recognized; every other token, including the empty one,
    /// is drawn black.
    pub fn from_token(token: &str) -> Self {
        match token {
            "blue" => Color::BLUE,
            _ => Color::BLACK,
        }
    }

    pub fn is_known_token(token: &str) -> bool {
        matches!(token, "blue" | "black")
    }

    /// Components in the 0..=1 range used by PDF color operators.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}
