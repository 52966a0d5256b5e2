use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where a logical face (`regular`, `bold`, `italic`) is loaded from.
///
/// In configuration files this is written as `{ standard = "Helvetica-Bold" }`
/// or `{ file = "fonts/arial/ARIALBD.TTF" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    /// One of the standard Type1 faces every PDF reader provides.
    Standard(String),
    /// A TrueType file on disk.
    File(PathBuf),
    /// TrueType data already in memory.
    #[serde(skip)]
    Bytes(Arc<Vec<u8>>),
}

impl FontSource {
    pub fn standard(name: impl Into<String>) -> Self {
        FontSource::Standard(name.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        FontSource::File(path.into())
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Standard(name) => write!(f, "standard font {}", name),
            FontSource::File(path) => write!(f, "font file {}", path.display()),
            FontSource::Bytes(data) => write!(f, "in-memory font ({} bytes)", data.len()),
        }
    }
}
