//! Per-node rendering. Single-fragment types go through their registry
//! template; ifElse and loop nodes render as indented pseudo-code blocks whose
//! bodies are their edge targets.

use super::PromptCompiler;
use crate::document::{FieldValue, Node, NodeType};
use crate::registry;
use itertools::Itertools;

/// Separator used when a list-kind field is substituted into a template.
const LIST_SEPARATOR: &str = "; ";

/// Renders a node through its type's template: each compile-enabled field
/// replaces the first occurrence of its `{{key}}` placeholder, absent or empty
/// values substitute as empty text, and the result is trimmed. A type the
/// registry does not know renders as empty text.
pub(super) fn render_template(node: &Node) -> String {
    let Some(definition) = registry::lookup(&node.node_type) else {
        return String::new();
    };

    let mut template = definition.template.to_string();
    for field in &definition.fields {
        if !field.compile {
            continue;
        }
        let placeholder = format!("{{{{{}}}}}", field.key);
        let value = match node.data.get(field.key) {
            Some(value) if !value.is_empty() => match value {
                FieldValue::Text(text) => text.clone(),
                FieldValue::List(items) => items.iter().join(LIST_SEPARATOR),
            },
            _ => String::new(),
        };
        // First occurrence only; templates never repeat a placeholder.
        template = template.replacen(&placeholder, &value, 1);
    }
    template.trim().to_string()
}

impl<'d> PromptCompiler<'d> {
    /// Dispatches a node to its renderer. Notes never contribute text.
    pub(super) fn render(&self, node: &Node) -> String {
        match node.node_type {
            NodeType::IfElse => self.render_if_else(node),
            NodeType::Loop => self.render_loop(node),
            NodeType::Note => String::new(),
            _ => render_template(node),
        }
    }

    fn render_if_else(&self, node: &Node) -> String {
        let condition = scalar_or(node, "conditionExpr", "condition");
        let mut block = format!("IF({}):\n", condition);
        self.append_branch_bodies(&mut block, node, Some("if"));
        block.push_str("ELSE:\n");
        self.append_branch_bodies(&mut block, node, Some("else"));
        block
    }

    fn render_loop(&self, node: &Node) -> String {
        let times = scalar_or(node, "times", "until condition");
        let mut block = format!("LOOP({}):\n", times);
        self.append_branch_bodies(&mut block, node, None);
        block
    }

    /// Appends the template-rendered content of every matching edge target as
    /// an indented line. `condition == None` accepts every outgoing edge.
    /// Dangling targets and empty renders contribute nothing.
    fn append_branch_bodies(&self, block: &mut String, node: &Node, condition: Option<&str>) {
        for edge in self.doc.edges.iter().filter(|e| e.source == node.id) {
            if let Some(tag) = condition {
                if edge.condition.as_deref() != Some(tag) {
                    continue;
                }
            }
            let Some(target) = self.nodes.get(edge.target.as_str()) else {
                continue;
            };
            let content = render_template(target);
            if !content.is_empty() {
                block.push_str("  ");
                block.push_str(&content);
                block.push('\n');
            }
        }
    }
}

fn scalar_or<'n>(node: &'n Node, key: &str, fallback: &'n str) -> &'n str {
    node.data
        .get(key)
        .and_then(FieldValue::as_text)
        .unwrap_or(fallback)
}
