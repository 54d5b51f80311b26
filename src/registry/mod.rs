//! The node type registry: a static mapping from fragment kind to its field
//! schema and text template. Pure lookup data consumed by the compiler and by
//! editor front-ends; it carries no behavior of its own.

pub mod definition;

pub use definition::*;

use crate::document::NodeType;
use ahash::AHashMap;
use std::sync::OnceLock;

use definition::FieldKind::{List, Select, Text, TextArea};

/// Looks up the definition for a node type. Total: unknown tags yield `None`
/// rather than an error, and the compiler treats such nodes as empty content.
pub fn lookup(node_type: &NodeType) -> Option<&'static NodeTypeDefinition> {
    registry().get(node_type)
}

/// All ten known definitions, in registry order. For editor palettes.
pub fn all_definitions() -> impl Iterator<Item = &'static NodeTypeDefinition> {
    NodeType::known().into_iter().filter_map(|t| registry().get(&t))
}

fn registry() -> &'static AHashMap<NodeType, NodeTypeDefinition> {
    static REGISTRY: OnceLock<AHashMap<NodeType, NodeTypeDefinition>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = AHashMap::new();
        register_default_definitions(&mut registry);
        registry
    })
}

fn register_default_definitions(registry: &mut AHashMap<NodeType, NodeTypeDefinition>) {
    let mut insert = |def: NodeTypeDefinition| {
        registry.insert(def.node_type.clone(), def);
    };

    insert(NodeTypeDefinition {
        node_type: NodeType::Persona,
        label: "Persona",
        description: "Defines the assistant's role and character",
        fields: vec![
            FieldDefinition::new("name", Text, true, true),
            FieldDefinition::new("goals", List, true, true),
            FieldDefinition::new("tone", Select, true, true).with_options(&[
                "professional",
                "friendly",
                "casual",
                "formal",
                "creative",
            ]),
            FieldDefinition::new("constraints", TextArea, false, true),
        ],
        template: "You are {{name}}. Goals: {{goals}}. Tone: {{tone}}. {{constraints}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::Context,
        label: "Context",
        description: "Background information and scenario framing",
        fields: vec![
            FieldDefinition::new("background", TextArea, true, true),
            FieldDefinition::new("audience", Text, false, true),
            FieldDefinition::new("references", List, false, true),
        ],
        template: "Context: {{background}} Audience: {{audience}} {{references}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::UserInput,
        label: "User Input",
        description: "Content supplied by the end user",
        fields: vec![FieldDefinition::new("prompt", TextArea, true, true)],
        template: "User Input: {{prompt}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::System,
        label: "System Message",
        description: "System-level instructions and constraints",
        fields: vec![FieldDefinition::new("content", TextArea, true, true)],
        template: "[System] {{content}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::Task,
        label: "Task",
        description: "Concrete objective and execution steps",
        fields: vec![
            FieldDefinition::new("objective", Text, true, true),
            FieldDefinition::new("steps", List, true, true),
        ],
        template: "Task: {{objective}} Steps: {{steps}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::IfElse,
        label: "Condition",
        description: "Branch rendered as an IF/ELSE pseudo-code block",
        fields: vec![FieldDefinition::new("conditionExpr", Text, true, true)],
        template: "IF({{conditionExpr}}):\n  <branch-if>\nELSE:\n  <branch-else>",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::Loop,
        label: "Loop",
        description: "Repetition rendered as a LOOP pseudo-code block",
        fields: vec![FieldDefinition::new("times", Text, true, true)],
        template: "LOOP({{times}}):\n  <body>",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::Format,
        label: "Output Format",
        description: "Style and length of the expected output",
        fields: vec![
            FieldDefinition::new("style", Select, true, true).with_options(&[
                "plain", "markdown", "bullets", "essay", "code",
            ]),
            FieldDefinition::new("length", Select, true, true).with_options(&[
                "tight", "medium", "detailed",
            ]),
        ],
        template: "Output as {{style}}, length {{length}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::Structured,
        label: "Structured Output",
        description: "JSON-schema-constrained output",
        fields: vec![FieldDefinition::new("schema", TextArea, true, true)],
        template: "Return ONLY valid JSON matching schema: {{schema}}",
    });

    insert(NodeTypeDefinition {
        node_type: NodeType::Note,
        label: "Note",
        description: "Annotation on the canvas, never compiled",
        fields: vec![FieldDefinition::new("text", TextArea, true, false)],
        template: "",
    });
}
