use serde::{Deserialize, Deserializer, Serialize};

/// The discriminator of a [`Node`].
///
/// Tags that folio does not render are kept verbatim in `Unknown` so callers can
/// log or inspect them; the renderer treats them as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Paragraph,
    Heading,
    BulletList,
    OrderedList,
    ListItem,
    Text,
    Unknown(String),
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "bullet_list" => NodeKind::BulletList,
            "ordered_list" => NodeKind::OrderedList,
            "list_item" => NodeKind::ListItem,
            "text" => NodeKind::Text,
            other => NodeKind::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::BulletList => "bullet_list",
            NodeKind::OrderedList => "ordered_list",
            NodeKind::ListItem => "list_item",
            NodeKind::Text => "text",
            NodeKind::Unknown(tag) => tag,
        }
    }
}

/// The discriminator of a [`Mark`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    TextColor,
    Unknown(String),
}

impl MarkKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bold" => MarkKind::Bold,
            "italic" => MarkKind::Italic,
            "underline" => MarkKind::Underline,
            "textColor" => MarkKind::TextColor,
            other => MarkKind::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            MarkKind::Bold => "bold",
            MarkKind::Italic => "italic",
            MarkKind::Underline => "underline",
            MarkKind::TextColor => "textColor",
            MarkKind::Unknown(tag) => tag,
        }
    }
}

/// Structural attributes shared by nodes and marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Heading depth, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    /// Free-form color token, read by `textColor` marks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.color.is_none()
    }
}

/// An inline style annotation attached to a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMark", into = "RawMark")]
pub struct Mark {
    pub kind: MarkKind,
    pub attrs: Attributes,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self { kind, attrs: Attributes::default() }
    }

    pub fn bold() -> Self {
        Self::new(MarkKind::Bold)
    }

    pub fn italic() -> Self {
        Self::new(MarkKind::Italic)
    }

    pub fn underline() -> Self {
        Self::new(MarkKind::Underline)
    }

    pub fn text_color(color: impl Into<String>) -> Self {
        Self {
            kind: MarkKind::TextColor,
            attrs: Attributes { level: None, color: Some(color.into()) },
        }
    }

    /// The color token carried by this mark, or `""` when none was authored.
    pub fn color(&self) -> &str {
        self.attrs.color.as_deref().unwrap_or("")
    }
}

/// One element of the document tree.
///
/// Containers carry `content`; text leaves carry `text` and `marks`. Nothing
/// enforces that split: a node that mixes both, or a container with no usable
/// children, simply renders less.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub struct Node {
    pub kind: NodeKind,
    pub content: Vec<Node>,
    pub text: Option<String>,
    pub marks: Vec<Mark>,
    pub attrs: Attributes,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: Vec::new(),
            text: None,
            marks: Vec::new(),
            attrs: Attributes::default(),
        }
    }

    pub fn container(kind: NodeKind, content: Vec<Node>) -> Self {
        Self { content, ..Self::new(kind) }
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::container(NodeKind::Paragraph, content)
    }

    pub fn heading(level: i64, content: Vec<Node>) -> Self {
        let mut node = Self::container(NodeKind::Heading, content);
        node.attrs.level = Some(level);
        node
    }

    pub fn bullet_list(items: Vec<Node>) -> Self {
        Self::container(NodeKind::BulletList, items)
    }

    pub fn ordered_list(items: Vec<Node>) -> Self {
        Self::container(NodeKind::OrderedList, items)
    }

    pub fn list_item(blocks: Vec<Node>) -> Self {
        Self::container(NodeKind::ListItem, blocks)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::styled_text(text, Vec::new())
    }

    pub fn styled_text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: Some(text.into()),
            marks,
            ..Self::new(NodeKind::Text)
        }
    }

    pub fn unknown(tag: impl Into<String>, content: Vec<Node>) -> Self {
        Self::container(NodeKind::Unknown(tag.into()), content)
    }

    /// The literal text payload, `""` for containers.
    pub fn text_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn has_text(&self) -> bool {
        !self.text_str().is_empty()
    }

    /// Heading depth, `0` when the attribute is absent.
    pub fn level(&self) -> i64 {
        self.attrs.level.unwrap_or(0)
    }
}

// --- Wire representation ---

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize)]
struct RawMark {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Attributes::is_empty")]
    attrs: Attributes,
}

impl From<RawMark> for Mark {
    fn from(raw: RawMark) -> Self {
        Mark { kind: MarkKind::from_tag(&raw.kind), attrs: raw.attrs }
    }
}

impl From<Mark> for RawMark {
    fn from(mark: Mark) -> Self {
        RawMark { kind: mark.kind.tag().to_string(), attrs: mark.attrs }
    }
}

#[derive(Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type", default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    kind: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    content: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    marks: Vec<Mark>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Attributes::is_empty")]
    attrs: Attributes,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        // Editors sometimes omit the tag on text leaves.
        let kind = if raw.kind.is_empty() && raw.text.is_some() {
            NodeKind::Text
        } else {
            NodeKind::from_tag(&raw.kind)
        };
        Node {
            kind,
            content: raw.content,
            text: raw.text,
            marks: raw.marks,
            attrs: raw.attrs,
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        RawNode {
            kind: node.kind.tag().to_string(),
            content: node.content,
            text: node.text,
            marks: node.marks,
            attrs: node.attrs,
        }
    }
}
