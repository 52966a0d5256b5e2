use serde_json::{Value, json};

/// A text leaf with no marks
pub fn text(content: &str) -> Value {
    json!({ "type": "text", "text": content })
}

/// A text leaf with the given marks
pub fn marked_text(content: &str, marks: Value) -> Value {
    json!({ "type": "text", "text": content, "marks": marks })
}

pub fn bold() -> Value {
    json!({ "type": "bold" })
}

pub fn italic() -> Value {
    json!({ "type": "italic" })
}

pub fn text_color(color: &str) -> Value {
    json!({ "type": "textColor", "attrs": { "color": color } })
}

/// A paragraph holding a single unmarked text leaf
pub fn paragraph(content: &str) -> Value {
    paragraph_of(vec![text(content)])
}

pub fn paragraph_of(children: Vec<Value>) -> Value {
    json!({ "type": "paragraph", "content": children })
}

pub fn heading(level: i64, content: &str) -> Value {
    json!({ "type": "heading", "attrs": { "level": level }, "content": [text(content)] })
}

/// A list item whose only block is a paragraph with `content`
pub fn list_item(content: &str) -> Value {
    json!({ "type": "list_item", "content": [paragraph(content)] })
}

pub fn bullet_list(items: &[&str]) -> Value {
    let items: Vec<Value> = items.iter().map(|item| list_item(item)).collect();
    json!({ "type": "bullet_list", "content": items })
}

pub fn ordered_list(items: &[&str]) -> Value {
    let items: Vec<Value> = items.iter().map(|item| list_item(item)).collect();
    json!({ "type": "ordered_list", "content": items })
}

/// The top-level node array
pub fn document(nodes: Vec<Value>) -> Value {
    Value::Array(nodes)
}

/// `count` numbered paragraphs, enough to overflow several A4 pages
pub fn many_paragraphs(count: usize) -> Value {
    document((1..=count).map(|i| paragraph(&format!("Paragraph {}", i))).collect())
}
