use crate::document::NodeType;

/// The editing widget / value shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    TextArea,
    /// Ordered list of strings.
    List,
    /// Single selection from [`FieldDefinition::options`].
    Select,
}

/// Schema of one field of a node type. Immutable configuration, loaded once
/// at process start.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub kind: FieldKind,
    /// Missing or empty values of required fields are flagged by validation.
    pub required: bool,
    /// Whether the field's value is substituted into the template. Fields with
    /// `compile == false` never touch the compiled text.
    pub compile: bool,
    /// Allowed values for `Select` fields; empty otherwise.
    pub options: &'static [&'static str],
}

impl FieldDefinition {
    pub const fn new(key: &'static str, kind: FieldKind, required: bool, compile: bool) -> Self {
        Self {
            key,
            kind,
            required,
            compile,
            options: &[],
        }
    }

    pub const fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

/// Static schema + template for one of the ten fragment kinds.
///
/// `label` and `description` are presentation conveniences for an editor
/// front-end; the compiler never reads them.
#[derive(Debug, Clone)]
pub struct NodeTypeDefinition {
    pub node_type: NodeType,
    pub label: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldDefinition>,
    /// Template with `{{fieldKey}}` placeholder slots. A placeholder without a
    /// matching compile-enabled field stays in the output as literal text.
    pub template: &'static str,
}
