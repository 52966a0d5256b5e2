//! Page geometry: sizes and margins, in points.
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Invalid length '{0}'")]
    InvalidLength(String),

    #[error("Invalid number of values for margin shorthand: got {0}, expected 1, 2, or 4")]
    MarginArity(usize),

    #[error("Unknown page size: {0}")]
    UnknownPageSize(String),
}

/// Parses a length with an optional unit suffix (`pt`, `in`, `cm`, `mm`); bare
/// numbers are points.
pub fn parse_length(input: &str) -> Result<f32, StyleParseError> {
    let input = input.trim();
    let (number, factor) = if let Some(v) = input.strip_suffix("pt") {
        (v, 1.0)
    } else if let Some(v) = input.strip_suffix("in") {
        (v, 72.0)
    } else if let Some(v) = input.strip_suffix("cm") {
        (v, 28.35)
    } else if let Some(v) = input.strip_suffix("mm") {
        (v, 2.835)
    } else {
        (input, 1.0)
    };
    number
        .trim()
        .parse::<f32>()
        .map(|v| v * factor)
        .map_err(|_| StyleParseError::InvalidLength(input.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::all(10.0)
    }
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Parses CSS-style shorthand: `"10"`, `"10pt 20pt"` or `"1cm 2cm 1cm 2cm"`.
    pub fn parse_shorthand(input: &str) -> Result<Self, StyleParseError> {
        let values = input
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()?;
        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [y, x] => Ok(Margins { top: *y, right: *x, bottom: *y, left: *x }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            other => Err(StyleParseError::MarginArity(other.len())),
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a shorthand string like '10pt 20pt', or a map")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Margins, E> {
                Ok(Margins::all(value as f32))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Margins, E> {
                Ok(Margins::all(value as f32))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Margins, E> {
                Ok(Margins::all(value as f32))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Margins, E> {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn width(&self) -> f32 {
        self.dimensions_pt().0
    }

    pub fn height(&self) -> f32 {
        self.dimensions_pt().1
    }

    pub fn parse(name: &str) -> Result<Self, StyleParseError> {
        match name.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleParseError::UnknownPageSize(name.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Name(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Name(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
