//! An in-memory document store with a bounded undo/redo history.
//!
//! This is the collaborator the editor front-end talks to: it owns the live
//! [`Document`], applies node/edge mutations, and keeps a capped vector of
//! immutable snapshots with a movable cursor. Writing while the cursor sits
//! below the tip discards the redo tail before appending (push-truncate-on-
//! new-edit). It persists nothing itself.

use crate::compiler::{CompileResult, compile_document};
use crate::document::{Document, Edge, FieldValue, Node, NodeId, NodeType, Position, Settings};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of history snapshots kept. The oldest entry is evicted once
/// the cap is reached.
pub const HISTORY_CAPACITY: usize = 50;

pub struct DocumentStore {
    doc: Document,
    history: Vec<Document>,
    cursor: usize,
    next_id: u64,
}

impl DocumentStore {
    /// Creates a store around an existing document (e.g. one imported from
    /// JSON). The document becomes the first history snapshot.
    pub fn new(doc: Document) -> Self {
        Self {
            history: vec![doc.clone()],
            doc,
            cursor: 0,
            next_id: 0,
        }
    }

    /// The current document snapshot.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Compiles the current snapshot.
    pub fn compile(&self) -> CompileResult {
        compile_document(&self.doc)
    }

    /// Adds a node of the given type with empty data, returning its id.
    pub fn add_node(&mut self, node_type: NodeType, position: Position) -> NodeId {
        let id = self.fresh_id("node");
        self.doc.nodes.push(Node::new(id.clone(), node_type, position));
        self.commit();
        id
    }

    /// Sets one field of a node's data. Returns false if the node is unknown.
    pub fn update_node_field(
        &mut self,
        id: &str,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> bool {
        let Some(node) = self.doc.node_mut(id) else {
            return false;
        };
        node.data.insert(key.into(), value.into());
        self.commit();
        true
    }

    /// Moves a node on the canvas. Position feeds the compiler's ordering
    /// tie-break, so this changes compilation output for untied nodes.
    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        let Some(node) = self.doc.node_mut(id) else {
            return false;
        };
        node.position = position;
        self.commit();
        true
    }

    /// Deletes a node and cascades to every edge touching it.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let before = self.doc.nodes.len();
        self.doc.nodes.retain(|n| n.id != id);
        if self.doc.nodes.len() == before {
            return false;
        }
        self.doc.edges.retain(|e| e.source != id && e.target != id);
        self.commit();
        true
    }

    /// Connects two nodes, returning the new edge's id.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        condition: Option<String>,
    ) -> String {
        let id = self.fresh_id("edge");
        let mut edge = Edge::new(id.clone(), source, target);
        edge.condition = condition;
        self.doc.edges.push(edge);
        self.commit();
        id
    }

    /// Retags an edge's condition. Returns false if the edge is unknown.
    pub fn update_edge_condition(&mut self, id: &str, condition: Option<String>) -> bool {
        let Some(edge) = self.doc.edges.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        edge.condition = condition;
        self.commit();
        true
    }

    /// Removes an edge. Returns false if the edge is unknown.
    pub fn delete_edge(&mut self, id: &str) -> bool {
        let before = self.doc.edges.len();
        self.doc.edges.retain(|e| e.id != id);
        if self.doc.edges.len() == before {
            return false;
        }
        self.commit();
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.doc.name = name.into();
        self.commit();
    }

    pub fn update_settings(&mut self, settings: Settings) {
        self.doc.settings = settings;
        self.commit();
    }

    /// Replaces the whole document, e.g. after an import.
    pub fn replace(&mut self, doc: Document) {
        self.doc = doc;
        self.commit();
    }

    /// Empties the canvas but keeps identity and settings.
    pub fn clear(&mut self) {
        self.doc.nodes.clear();
        self.doc.edges.clear();
        self.commit();
    }

    /// Steps the cursor back one snapshot. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.doc = self.history[self.cursor].clone();
        true
    }

    /// Steps the cursor forward one snapshot. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        self.doc = self.history[self.cursor].clone();
        true
    }

    /// Records the current document as a new history snapshot: drops anything
    /// beyond the cursor, appends, and evicts the oldest entry past capacity.
    fn commit(&mut self) {
        self.doc.updated_at = now_millis();
        self.history.truncate(self.cursor + 1);
        self.history.push(self.doc.clone());
        if self.history.len() > HISTORY_CAPACITY {
            self.history.remove(0);
        }
        self.cursor = self.history.len() - 1;
    }

    /// Generates an id like `node_0001`, skipping ids already present in a
    /// loaded document.
    fn fresh_id(&mut self, prefix: &str) -> String {
        loop {
            self.next_id += 1;
            let id = format!("{}_{:04}", prefix, self.next_id);
            let taken = self.doc.nodes.iter().any(|n| n.id == id)
                || self.doc.edges.iter().any(|e| e.id == id);
            if !taken {
                return id;
            }
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
