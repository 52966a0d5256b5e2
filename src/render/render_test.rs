use super::NodeRenderer;
use crate::config::LayoutConfig;
use folio_render_core::{CanvasCall, PageCanvas, RecordingCanvas, RenderError};
use folio_types::{Mark, Node};

fn render(nodes: &[Node]) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    let layout = LayoutConfig::default();
    let mut renderer = NodeRenderer::new(&mut canvas, &layout);
    for node in nodes {
        renderer.render(node).unwrap();
    }
    canvas
}

fn run(font: &str, size: f32, color: &str, text: &str) -> Vec<CanvasCall> {
    vec![
        CanvasCall::select_font(font, size),
        CanvasCall::select_color(color),
        CanvasCall::emit(text),
    ]
}

#[test]
fn test_plain_paragraph() {
    let canvas = render(&[Node::paragraph(vec![Node::text("Hello")])]);
    let mut expected = run("regular", 12.0, "black", "Hello");
    expected.push(CanvasCall::AdvanceVertical(20.0));
    assert_eq!(canvas.calls(), expected.as_slice());
}

#[test]
fn test_paragraph_runs_are_styled_independently() {
    let canvas = render(&[Node::paragraph(vec![
        Node::text("Hello "),
        Node::styled_text("world", vec![Mark::bold()]),
        Node::styled_text(" again", vec![Mark::italic(), Mark::text_color("blue")]),
    ])]);

    let mut expected = run("regular", 12.0, "black", "Hello ");
    expected.extend(run("bold", 12.0, "black", "world"));
    expected.extend(run("italic", 12.0, "blue", " again"));
    expected.push(CanvasCall::AdvanceVertical(20.0));
    assert_eq!(canvas.calls(), expected.as_slice());
}

#[test]
fn test_empty_and_textless_children_are_skipped() {
    let canvas = render(&[Node::paragraph(vec![
        Node::text(""),
        Node::paragraph(vec![Node::text("nested")]),
        Node::text("kept"),
    ])]);
    assert_eq!(canvas.texts(), vec!["kept"]);
}

#[test]
fn test_empty_paragraph_still_breaks() {
    let canvas = render(&[Node::paragraph(vec![])]);
    assert_eq!(canvas.calls(), &[CanvasCall::AdvanceVertical(20.0)]);
}

#[test]
fn test_heading_is_bold_at_level_size() {
    for (level, size) in [(1, 16.0), (3, 12.0), (9, 0.0), (12, -6.0)] {
        let canvas = render(&[Node::heading(level, vec![Node::text("Title")])]);
        assert_eq!(canvas.calls()[0], CanvasCall::select_font("bold", size), "level {}", level);
    }
}

#[test]
fn test_heading_level_past_32_bits_is_not_clamped() {
    let canvas = render(&[Node::heading(5_000_000_000, vec![Node::text("Title")])]);
    assert_eq!(
        canvas.calls()[0],
        CanvasCall::select_font("bold", -9_999_999_982.0_f64 as f32)
    );
}

#[test]
fn test_heading_without_level_is_18pt() {
    let mut heading = Node::heading(0, vec![Node::text("Title")]);
    heading.attrs.level = None;
    let canvas = render(&[heading]);
    assert_eq!(canvas.calls()[0], CanvasCall::select_font("bold", 18.0));
}

#[test]
fn test_heading_overrides_italic_but_keeps_color() {
    let canvas = render(&[Node::heading(
        2,
        vec![Node::styled_text("Blue", vec![Mark::italic(), Mark::text_color("blue")])],
    )]);
    let mut expected = run("bold", 14.0, "blue", "Blue");
    expected.push(CanvasCall::AdvanceVertical(20.0));
    assert_eq!(canvas.calls(), expected.as_slice());
}

#[test]
fn test_unknown_and_stray_nodes_draw_nothing() {
    let canvas = render(&[
        Node::unknown("table", vec![Node::paragraph(vec![Node::text("cell")])]),
        Node::text("loose text"),
        Node::list_item(vec![Node::paragraph(vec![Node::text("orphan")])]),
    ]);
    assert!(canvas.calls().is_empty());
}

#[test]
fn test_custom_paragraph_gap() {
    let mut canvas = RecordingCanvas::new();
    let layout = LayoutConfig { paragraph_gap: 32.0, ..LayoutConfig::default() };
    NodeRenderer::new(&mut canvas, &layout)
        .render(&Node::paragraph(vec![Node::text("x")]))
        .unwrap();
    assert_eq!(canvas.calls().last(), Some(&CanvasCall::AdvanceVertical(32.0)));
}

#[test]
fn test_renders_through_a_trait_object() {
    let mut recording = RecordingCanvas::new();
    let canvas: &mut dyn PageCanvas = &mut recording;
    let layout = LayoutConfig::default();
    NodeRenderer::new(canvas, &layout)
        .render(&Node::paragraph(vec![Node::text("dyn")]))
        .unwrap();
    assert_eq!(recording.texts(), vec!["dyn"]);
}

#[test]
fn test_canvas_failure_aborts_the_node() {
    let mut canvas = RecordingCanvas::failing_when(|call| *call == CanvasCall::emit("world"));
    let layout = LayoutConfig::default();
    let result = NodeRenderer::new(&mut canvas, &layout).render(&Node::paragraph(vec![
        Node::text("Hello "),
        Node::text("world"),
        Node::text("never"),
    ]));

    assert!(matches!(result, Err(RenderError::InvalidState(_))));
    assert_eq!(canvas.texts(), vec!["Hello "]);
    assert!(!canvas.calls().iter().any(|c| matches!(c, CanvasCall::AdvanceVertical(_))));
}
