//! Structural validation: required-field presence and cycle detection.
//! Independent of topological ordering.

use super::{PromptCompiler, ValidationReport};
use crate::registry;
use ahash::AHashMap;

/// Depth-first visit state local to one `validate` call. The `OnStack` marker
/// is replaced by `Done` when the node's traversal returns, so shared
/// downstream nodes are revisited cheaply and reported once.
enum VisitState {
    OnStack,
    Done(bool),
}

impl<'d> PromptCompiler<'d> {
    /// Checks every node's required fields and searches for cyclic
    /// dependencies. Runs in `O(N + E)`; every node is visited regardless of
    /// which component it sits in.
    pub fn validate(&self) -> ValidationReport {
        let mut missing_required = Vec::new();
        for node in &self.doc.nodes {
            let Some(definition) = registry::lookup(&node.node_type) else {
                continue;
            };
            for field in definition.fields.iter().filter(|f| f.required) {
                let missing = node.data.get(field.key).is_none_or(|value| value.is_empty());
                if missing {
                    // One entry per missing field, not per node.
                    missing_required.push(node.id.clone());
                }
            }
        }

        let mut warnings = Vec::new();
        let mut states: AHashMap<&'d str, VisitState> = AHashMap::new();
        for node in &self.doc.nodes {
            if self.reaches_cycle(node.id.as_str(), &mut states) {
                warnings.push(format!("Cyclic dependency detected at node '{}'", node.id));
            }
        }

        ValidationReport {
            missing_required,
            warnings,
        }
    }

    /// Whether `id` participates in or reaches a cycle. An edge back to a node
    /// still on the recursion stack closes a cycle; finished nodes memoize
    /// their answer so the traversal stays linear in nodes plus edges.
    fn reaches_cycle(&self, id: &'d str, states: &mut AHashMap<&'d str, VisitState>) -> bool {
        match states.get(id) {
            Some(VisitState::OnStack) => return true,
            Some(VisitState::Done(reaches)) => return *reaches,
            None => {}
        }

        states.insert(id, VisitState::OnStack);
        let mut reaches = false;
        if let Some(successors) = self.adjacency.get(id) {
            for &successor in successors {
                if self.reaches_cycle(successor, states) {
                    reaches = true;
                }
            }
        }
        states.insert(id, VisitState::Done(reaches));
        reaches
    }
}
