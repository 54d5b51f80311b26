//! Tests for template rendering and final assembly.
mod common;
use common::*;
use promptflow::prelude::*;

#[test]
fn test_empty_document_compiles_to_empty_text() {
    let result = compile_document(&doc(vec![], vec![]));
    assert_eq!(result.compiled_text, "");
    assert!(result.report.is_clean());
}

#[test]
fn test_single_user_input_node() {
    let result = compile_document(&doc(vec![user_input("n1", 0.0, 0.0, "Hello")], vec![]));
    assert_eq!(result.compiled_text, "User Input: Hello");
    assert!(result.report.is_clean());
}

#[test]
fn test_list_field_joined_with_semicolons() {
    let task = node_with(
        "t1",
        NodeType::Task,
        0.0,
        0.0,
        &[("objective", text("Ship it")), ("steps", list(&["a", "b", "c"]))],
    );
    let result = compile_document(&doc(vec![task], vec![]));
    assert_eq!(result.compiled_text, "Task: Ship it Steps: a; b; c");
}

#[test]
fn test_absent_optional_field_substitutes_empty() {
    // `constraints` is optional on persona; its placeholder collapses to
    // nothing and the trailing whitespace is trimmed.
    let result = compile_document(&doc(vec![filled_persona("p1", 0.0, 0.0)], vec![]));
    assert_eq!(
        result.compiled_text,
        "You are Senior Copywriter. Goals: clarity; brevity. Tone: professional."
    );
    assert!(result.report.is_clean());
}

#[test]
fn test_joiner_setting_between_fragments() {
    let mut document = doc(
        vec![
            user_input("n1", 0.0, 0.0, "first"),
            user_input("n2", 0.0, 100.0, "second"),
        ],
        vec![],
    );
    document.settings.joiner = Some(" | ".to_string());
    let result = compile_document(&document);
    assert_eq!(result.compiled_text, "User Input: first | User Input: second");
}

#[test]
fn test_default_joiner_is_blank_line() {
    let result = compile_document(&doc(
        vec![
            user_input("n1", 0.0, 0.0, "first"),
            user_input("n2", 0.0, 100.0, "second"),
        ],
        vec![],
    ));
    assert_eq!(
        result.compiled_text,
        "User Input: first\n\nUser Input: second"
    );
}

#[test]
fn test_note_node_never_renders() {
    let note = node_with("n1", NodeType::Note, 0.0, 0.0, &[("text", text("reminder"))]);
    let result = compile_document(&doc(
        vec![note, user_input("n2", 0.0, 100.0, "visible")],
        vec![],
    ));
    assert_eq!(result.compiled_text, "User Input: visible");
}

#[test]
fn test_unknown_node_type_renders_empty() {
    let mystery = node("n1", NodeType::parse("mystery"), 0.0, 0.0);
    let result = compile_document(&doc(
        vec![mystery, user_input("n2", 0.0, 100.0, "visible")],
        vec![],
    ));
    assert_eq!(result.compiled_text, "User Input: visible");
}

#[test]
fn test_empty_fragments_do_not_produce_extra_joiners() {
    // The unknown node sits between the two renderable ones in y-order; its
    // empty render must be skipped, not joined.
    let mut document = doc(
        vec![
            user_input("n1", 0.0, 0.0, "first"),
            node("n2", NodeType::parse("mystery"), 0.0, 50.0),
            user_input("n3", 0.0, 100.0, "second"),
        ],
        vec![],
    );
    document.settings.joiner = Some("|".to_string());
    let result = compile_document(&document);
    assert_eq!(result.compiled_text, "User Input: first|User Input: second");
}

#[test]
fn test_select_field_renders_plain_text() {
    let format = node_with(
        "f1",
        NodeType::Format,
        0.0,
        0.0,
        &[("style", text("markdown")), ("length", text("tight"))],
    );
    let result = compile_document(&doc(vec![format], vec![]));
    assert_eq!(result.compiled_text, "Output as markdown, length tight");
}

#[test]
fn test_compilation_is_deterministic() {
    let document = doc(
        vec![
            filled_persona("p1", 10.0, 10.0),
            user_input("u1", 0.0, 200.0, "Hello"),
            node_with(
                "t1",
                NodeType::Task,
                0.0,
                300.0,
                &[("objective", text("answer")), ("steps", list(&["read", "reply"]))],
            ),
        ],
        vec![edge("e1", "p1", "u1"), edge("e2", "u1", "t1")],
    );
    let first = compile_document(&document);
    let second = compile_document(&document);
    assert_eq!(first, second);
}
