use crate::document::{
    Document, Edge, FieldValue, IntoDocument, Node, NodeType, Position, SCHEMA_VERSION, Settings,
};
use crate::error::{DocumentConversionError, DocumentError};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Canvas coordinates as the editor serializes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// A field value in the editor JSON: a plain string or an array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UiFieldValue {
    Text(String),
    List(Vec<String>),
}

/// UI node with type tag, position and field data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: UiPosition,
    #[serde(default)]
    pub data: AHashMap<String, UiFieldValue>,
}

/// UI edge connecting nodes, with optional routing points and condition tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<UiPosition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Document settings as the editor serializes them. Presentation-only keys
/// (e.g. `previewTemplate`) are ignored on input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joiner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Complete editor document structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
    #[serde(default)]
    pub settings: UiSettings,
    #[serde(rename = "updatedAt", alias = "updated_at", default)]
    pub updated_at: u64,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

impl UiDocument {
    /// Parses an editor document from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParse(e.to_string()))
    }

    /// Serializes back to the editor's JSON format.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::JsonSerialize(e.to_string()))
    }
}

impl IntoDocument for UiDocument {
    /// Converts the wire document into the canonical model. The single
    /// invariant enforced here is node id uniqueness; everything else
    /// (dangling edges, unknown type tags) is the compiler's tolerance to
    /// exercise.
    fn into_document(self) -> Result<Document, DocumentConversionError> {
        let mut seen = AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(DocumentConversionError::ValidationError(format!(
                    "Duplicate node id '{}'",
                    node.id
                )));
            }
        }

        let nodes = self
            .nodes
            .into_iter()
            .map(|node| Node {
                id: node.id,
                node_type: NodeType::parse(&node.node_type),
                position: Position::new(node.position.x, node.position.y),
                data: node
                    .data
                    .into_iter()
                    .map(|(key, value)| {
                        let value = match value {
                            UiFieldValue::Text(text) => FieldValue::Text(text),
                            UiFieldValue::List(items) => FieldValue::List(items),
                        };
                        (key, value)
                    })
                    .collect(),
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| Edge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                points: edge
                    .points
                    .map(|points| points.iter().map(|p| Position::new(p.x, p.y)).collect()),
                condition: edge.condition,
            })
            .collect();

        Ok(Document {
            id: self.id,
            name: self.name,
            nodes,
            edges,
            settings: Settings {
                language: self.settings.language,
                joiner: self.settings.joiner,
                model: self.settings.model,
            },
            updated_at: self.updated_at,
            version: self.version,
        })
    }
}

impl From<&Document> for UiDocument {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            nodes: doc
                .nodes
                .iter()
                .map(|node| UiNode {
                    id: node.id.clone(),
                    node_type: node.node_type.as_str().to_string(),
                    position: UiPosition {
                        x: node.position.x,
                        y: node.position.y,
                    },
                    data: node
                        .data
                        .iter()
                        .map(|(key, value)| {
                            let value = match value {
                                FieldValue::Text(text) => UiFieldValue::Text(text.clone()),
                                FieldValue::List(items) => UiFieldValue::List(items.clone()),
                            };
                            (key.clone(), value)
                        })
                        .collect(),
                })
                .collect(),
            edges: doc
                .edges
                .iter()
                .map(|edge| UiEdge {
                    id: edge.id.clone(),
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    points: edge.points.as_ref().map(|points| {
                        points.iter().map(|p| UiPosition { x: p.x, y: p.y }).collect()
                    }),
                    condition: edge.condition.clone(),
                })
                .collect(),
            settings: UiSettings {
                language: doc.settings.language.clone(),
                joiner: doc.settings.joiner.clone(),
                model: doc.settings.model.clone(),
            },
            updated_at: doc.updated_at,
            version: doc.version,
        }
    }
}
