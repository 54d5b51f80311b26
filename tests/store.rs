//! Tests for the in-memory document store and its bounded undo/redo history.
mod common;
use common::*;
use promptflow::prelude::*;

#[test]
fn test_add_and_fill_node_then_compile() {
    let mut store = DocumentStore::default();
    let id = store.add_node(NodeType::UserInput, Position::new(0.0, 0.0));
    assert!(store.update_node_field(&id, "prompt", "Hello"));

    let result = store.compile();
    assert_eq!(result.compiled_text, "User Input: Hello");
    assert!(result.report.is_clean());
}

#[test]
fn test_update_unknown_node_returns_false() {
    let mut store = DocumentStore::default();
    assert!(!store.update_node_field("ghost", "prompt", "Hello"));
    assert!(!store.move_node("ghost", Position::new(1.0, 1.0)));
    assert!(!store.delete_node("ghost"));
}

#[test]
fn test_delete_node_cascades_edges() {
    let mut store = DocumentStore::default();
    let a = store.add_node(NodeType::UserInput, Position::new(0.0, 0.0));
    let b = store.add_node(NodeType::UserInput, Position::new(0.0, 100.0));
    store.add_edge(a.clone(), b.clone(), None);
    store.add_edge(b.clone(), a.clone(), None);
    assert_eq!(store.document().edges.len(), 2);

    assert!(store.delete_node(&a));
    assert_eq!(store.document().nodes.len(), 1);
    assert!(store.document().edges.is_empty());
}

#[test]
fn test_undo_redo_roundtrip() {
    let mut store = DocumentStore::default();
    let id = store.add_node(NodeType::UserInput, Position::new(0.0, 0.0));
    store.update_node_field(&id, "prompt", "Hello");

    assert!(store.undo());
    assert!(store.document().node(&id).unwrap().data.is_empty());

    assert!(store.redo());
    assert_eq!(
        store.document().node(&id).unwrap().data.get("prompt"),
        Some(&FieldValue::Text("Hello".to_string()))
    );
}

#[test]
fn test_undo_at_start_and_redo_at_tip_are_noops() {
    let mut store = DocumentStore::default();
    assert!(!store.undo());
    assert!(!store.redo());

    store.add_node(NodeType::Note, Position::new(0.0, 0.0));
    assert!(!store.redo());
}

#[test]
fn test_new_edit_discards_redo_tail() {
    let mut store = DocumentStore::default();
    store.add_node(NodeType::UserInput, Position::new(0.0, 0.0));
    store.add_node(NodeType::Task, Position::new(0.0, 100.0));

    assert!(store.undo());
    assert_eq!(store.document().nodes.len(), 1);

    // Writing below the tip truncates the redo history before appending.
    store.add_node(NodeType::Note, Position::new(0.0, 200.0));
    assert!(!store.redo());
    assert_eq!(store.document().nodes.len(), 2);
}

#[test]
fn test_history_is_bounded() {
    let mut store = DocumentStore::default();
    let id = store.add_node(NodeType::UserInput, Position::new(0.0, 0.0));
    for i in 0..80 {
        store.update_node_field(&id, "prompt", format!("edit {}", i));
    }

    let mut undo_steps = 0;
    while store.undo() {
        undo_steps += 1;
    }
    // Capacity snapshots in total, so capacity - 1 steps back from the tip.
    assert_eq!(undo_steps, HISTORY_CAPACITY - 1);
}

#[test]
fn test_generated_ids_skip_loaded_ones() {
    let mut document = doc(vec![user_input("node_0001", 0.0, 0.0, "loaded")], vec![]);
    document.id = "doc_loaded".to_string();
    let mut store = DocumentStore::new(document);

    let id = store.add_node(NodeType::Task, Position::new(0.0, 100.0));
    assert_eq!(id, "node_0002");
}

#[test]
fn test_clear_keeps_identity_and_settings() {
    let mut store = DocumentStore::default();
    store.update_settings(Settings {
        joiner: Some(" | ".to_string()),
        ..Settings::default()
    });
    store.add_node(NodeType::UserInput, Position::new(0.0, 0.0));

    store.clear();
    assert!(store.document().nodes.is_empty());
    assert_eq!(store.document().settings.joiner.as_deref(), Some(" | "));
}

#[test]
fn test_edge_condition_update() {
    let mut store = DocumentStore::default();
    let branch = store.add_node(NodeType::IfElse, Position::new(0.0, 0.0));
    let body = store.add_node(NodeType::UserInput, Position::new(0.0, 100.0));
    let edge_id = store.add_edge(branch, body, None);

    assert!(store.update_edge_condition(&edge_id, Some("if".to_string())));
    assert_eq!(
        store.document().edge(&edge_id).unwrap().condition.as_deref(),
        Some("if")
    );
    assert!(store.delete_edge(&edge_id));
    assert!(!store.delete_edge(&edge_id));
}
