mod common;

use common::fixtures::*;
use common::pdf_assertions::{extract_font_names, fill_colors};
use common::{TestResult, generate_pdf_from_json};
use serde_json::json;

#[test]
fn test_plain_and_marked_runs_render() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![paragraph_of(vec![
        text("Hello "),
        marked_text("bold", json!([bold()])),
        marked_text(" and italic", json!([italic()])),
    ])]);

    let pdf = generate_pdf_from_json(&doc)?;
    assert_pdf_contains_text!(pdf, "Hello");
    assert_pdf_contains_text!(pdf, "bold");
    assert_pdf_contains_text!(pdf, "and italic");
    Ok(())
}

#[test]
fn test_three_standard_faces_are_registered() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf_from_json(&document(vec![paragraph("Fonts")]))?;
    let mut fonts = extract_font_names(&pdf.doc);
    fonts.sort();
    assert_eq!(fonts, vec!["Helvetica", "Helvetica-Bold", "Helvetica-Oblique"]);
    Ok(())
}

#[test]
fn test_blue_text_uses_blue_fill() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![paragraph_of(vec![
        text("black "),
        marked_text("blue", json!([text_color("blue")])),
    ])]);
    let pdf = generate_pdf_from_json(&doc)?;
    assert_eq!(fill_colors(&pdf.doc, 1), vec![[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    Ok(())
}

#[test]
fn test_other_color_tokens_render_black() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![paragraph_of(vec![
        marked_text("red", json!([text_color("red")])),
        marked_text("hex", json!([text_color("#0000ff")])),
        marked_text("none", json!([{ "type": "textColor" }])),
    ])]);
    let pdf = generate_pdf_from_json(&doc)?;
    assert_eq!(fill_colors(&pdf.doc, 1), vec![[0.0, 0.0, 0.0]]);
    assert_pdf_contains_text!(pdf, "none");
    Ok(())
}

#[test]
fn test_unknown_marks_do_not_fail() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![paragraph_of(vec![marked_text(
        "struck",
        json!([{ "type": "strike" }, { "type": "underline" }, { "type": "link", "attrs": { "href": "x" } }]),
    )])]);
    let pdf = generate_pdf_from_json(&doc)?;
    assert_pdf_contains_text!(pdf, "struck");
    Ok(())
}

#[test]
fn test_headings_render_their_text() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![heading(1, "Big"), heading(3, "Small"), heading(9, "Zero size")]);
    let pdf = generate_pdf_from_json(&doc)?;
    assert_pdf_contains_text!(pdf, "Big");
    assert_pdf_contains_text!(pdf, "Small");
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_heading_level_past_32_bits_is_accepted() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![heading(5_000_000_000, "Huge"), paragraph("after")]);
    let pdf = generate_pdf_from_json(&doc)?;
    assert_pdf_contains_text!(pdf, "after");
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_non_latin_text_is_replaced_not_rejected() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf_from_json(&document(vec![paragraph("café 日本")]))?;
    assert_pdf_contains_text!(pdf, "café ??");
    Ok(())
}
