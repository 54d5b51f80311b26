//! Common test utilities for building documents, nodes and edges.
use promptflow::prelude::*;

/// Wraps nodes and edges in a test document with default settings.
#[allow(dead_code)]
pub fn doc(nodes: Vec<Node>, edges: Vec<Edge>) -> Document {
    let mut doc = Document::new("doc_test", "Test Document");
    doc.nodes = nodes;
    doc.edges = edges;
    doc
}

#[allow(dead_code)]
pub fn node(id: &str, node_type: NodeType, x: f64, y: f64) -> Node {
    Node::new(id, node_type, Position::new(x, y))
}

#[allow(dead_code)]
pub fn node_with(
    id: &str,
    node_type: NodeType,
    x: f64,
    y: f64,
    data: &[(&str, FieldValue)],
) -> Node {
    let mut node = node(id, node_type, x, y);
    for (key, value) in data {
        node.data.insert((*key).to_string(), value.clone());
    }
    node
}

#[allow(dead_code)]
pub fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

#[allow(dead_code)]
pub fn list(items: &[&str]) -> FieldValue {
    FieldValue::List(items.iter().map(|s| s.to_string()).collect())
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(id, source, target)
}

#[allow(dead_code)]
pub fn cond_edge(id: &str, source: &str, target: &str, condition: &str) -> Edge {
    Edge::new(id, source, target).with_condition(condition)
}

/// A filled `userInput` node, the simplest renderable fragment.
#[allow(dead_code)]
pub fn user_input(id: &str, x: f64, y: f64, prompt: &str) -> Node {
    node_with(id, NodeType::UserInput, x, y, &[("prompt", text(prompt))])
}

/// A persona node with every required field filled.
#[allow(dead_code)]
pub fn filled_persona(id: &str, x: f64, y: f64) -> Node {
    node_with(
        id,
        NodeType::Persona,
        x,
        y,
        &[
            ("name", text("Senior Copywriter")),
            ("goals", list(&["clarity", "brevity"])),
            ("tone", text("professional")),
        ],
    )
}
