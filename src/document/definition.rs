use ahash::AHashMap;

/// Current document schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Joiner placed between top-level rendered fragments when the document
/// does not configure one.
pub const DEFAULT_JOINER: &str = "\n\n";

/// Identifier of a node within a document. Unique per document.
pub type NodeId = String;

/// A 2D canvas position. The compiler only reads it to break ordering ties;
/// it carries no semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The closed set of fragment kinds, plus an explicit carrier for tags the
/// registry does not know. Keeping the unknown case in the type makes registry
/// lookup a total function instead of a panicking or erroring one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Persona,
    Context,
    UserInput,
    System,
    Task,
    IfElse,
    Loop,
    Format,
    Structured,
    Note,
    Unknown(String),
}

impl NodeType {
    /// Parses a wire-format tag (`"userInput"`, `"ifElse"`, ...). Unrecognized
    /// tags are preserved verbatim inside `Unknown`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "persona" => NodeType::Persona,
            "context" => NodeType::Context,
            "userInput" => NodeType::UserInput,
            "system" => NodeType::System,
            "task" => NodeType::Task,
            "ifElse" => NodeType::IfElse,
            "loop" => NodeType::Loop,
            "format" => NodeType::Format,
            "structured" => NodeType::Structured,
            "note" => NodeType::Note,
            other => NodeType::Unknown(other.to_string()),
        }
    }

    /// The wire-format tag. Inverse of [`NodeType::parse`] for known tags.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Persona => "persona",
            NodeType::Context => "context",
            NodeType::UserInput => "userInput",
            NodeType::System => "system",
            NodeType::Task => "task",
            NodeType::IfElse => "ifElse",
            NodeType::Loop => "loop",
            NodeType::Format => "format",
            NodeType::Structured => "structured",
            NodeType::Note => "note",
            NodeType::Unknown(tag) => tag,
        }
    }

    /// The ten known fragment kinds, in registry order.
    pub fn known() -> [NodeType; 10] {
        [
            NodeType::Persona,
            NodeType::Context,
            NodeType::UserInput,
            NodeType::System,
            NodeType::Task,
            NodeType::IfElse,
            NodeType::Loop,
            NodeType::Format,
            NodeType::Structured,
            NodeType::Note,
        ]
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-entered field value: either a scalar string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as "empty" for required-field validation
    /// and template substitution.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// The scalar text form, if this is a non-empty scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// A single typed prompt fragment in the graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub node_type: NodeType,
    pub position: Position,
    pub data: AHashMap<String, FieldValue>,
}

impl Node {
    /// Creates a node with empty data, as the editor does on drop.
    pub fn new(id: impl Into<NodeId>, node_type: NodeType, position: Position) -> Self {
        Self {
            id: id.into(),
            node_type,
            position,
            data: AHashMap::new(),
        }
    }
}

/// A directed relation between two nodes. `points` are cosmetic routing
/// waypoints; `condition` only has compiler meaning (`"if"` / `"else"`) when
/// the source node is an `ifElse`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub points: Option<Vec<Position>>,
    pub condition: Option<String>,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            points: None,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Per-document compilation settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub language: Option<String>,
    pub joiner: Option<String>,
    pub model: Option<String>,
}

impl Settings {
    /// The joiner placed between top-level fragments.
    pub fn joiner(&self) -> &str {
        self.joiner.as_deref().unwrap_or(DEFAULT_JOINER)
    }
}

/// The complete graph-plus-settings unit of compilation. This is the canonical
/// model every custom input format converts into.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub settings: Settings,
    /// Last-modified timestamp, milliseconds since the Unix epoch.
    pub updated_at: u64,
    pub version: u32,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            settings: Settings::default(),
            updated_at: 0,
            version: SCHEMA_VERSION,
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("doc_0001", "Untitled")
    }
}
