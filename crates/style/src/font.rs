use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical font faces a canvas must provide.
///
/// Bold and italic are exclusive: there is no combined bold-italic face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
    Italic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 3] = [FontVariant::Regular, FontVariant::Bold, FontVariant::Italic];

    /// The name the face is registered under on the canvas.
    pub fn face_name(&self) -> &'static str {
        match self {
            FontVariant::Regular => "regular",
            FontVariant::Bold => "bold",
            FontVariant::Italic => "italic",
        }
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.face_name())
    }
}
