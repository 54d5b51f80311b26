//! The prompt compiler: builds a graph representation from a [`Document`]
//! snapshot, validates it, orders the nodes deterministically, and renders
//! them into a single linear text.
//!
//! The compiler is a pure, synchronous computation. It never fails: structural
//! problems (missing required fields, cycles, dangling edges, unknown node
//! types) are surfaced through the [`ValidationReport`] while compilation
//! still produces the best text it can.

use crate::document::{Document, Node, NodeId};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

mod render;
mod validate;

/// Structural problems found in a document. Never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// One entry per missing required field, so a node can appear repeatedly.
    pub missing_required: Vec<NodeId>,
    /// One warning per node that is part of or reaches a cyclic dependency.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.missing_required.is_empty() && self.warnings.is_empty()
    }
}

/// The outcome of one compilation run: the joined text and the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileResult {
    pub compiled_text: String,
    pub report: ValidationReport,
}

/// Compiles a node/edge graph into linear prompt text.
///
/// Construction derives the graph structures (node map, adjacency, in-degree
/// counts, branch-consumed targets) from a borrowed document snapshot; they
/// are private to this instance, so independent call sites may compile
/// concurrently as long as each gets its own snapshot.
pub struct PromptCompiler<'d> {
    doc: &'d Document,
    nodes: AHashMap<&'d str, &'d Node>,
    adjacency: AHashMap<&'d str, Vec<&'d str>>,
    in_degree: AHashMap<&'d str, usize>,
    /// Targets of ifElse `"if"`/`"else"` edges and of loop edges. Their content
    /// is emitted inside the owning block only, never at top level.
    branch_targets: AHashSet<&'d str>,
}

impl<'d> PromptCompiler<'d> {
    pub fn new(doc: &'d Document) -> Self {
        let mut nodes: AHashMap<&'d str, &'d Node> = AHashMap::with_capacity(doc.nodes.len());
        let mut adjacency: AHashMap<&'d str, Vec<&'d str>> =
            AHashMap::with_capacity(doc.nodes.len());
        let mut in_degree: AHashMap<&'d str, usize> = AHashMap::with_capacity(doc.nodes.len());

        for node in &doc.nodes {
            nodes.insert(node.id.as_str(), node);
            adjacency.insert(node.id.as_str(), Vec::new());
            in_degree.insert(node.id.as_str(), 0);
        }

        let mut branch_targets = AHashSet::new();
        for edge in &doc.edges {
            let source = edge.source.as_str();
            let target = edge.target.as_str();
            // An edge with a missing endpoint is not an adjacency to a real node.
            let (Some(source_node), true) = (nodes.get(source), nodes.contains_key(target)) else {
                continue;
            };
            if let Some(list) = adjacency.get_mut(source) {
                list.push(target);
            }
            if let Some(degree) = in_degree.get_mut(target) {
                *degree += 1;
            }

            use crate::document::NodeType::{IfElse, Loop};
            match source_node.node_type {
                IfElse if matches!(edge.condition.as_deref(), Some("if") | Some("else")) => {
                    branch_targets.insert(target);
                }
                Loop => {
                    branch_targets.insert(target);
                }
                _ => {}
            }
        }

        Self {
            doc,
            nodes,
            adjacency,
            in_degree,
            branch_targets,
        }
    }

    /// Runs validation, ordering, and rendering, and joins the non-empty
    /// fragments with the document's configured joiner.
    pub fn compile(&self) -> CompileResult {
        let report = self.validate();
        let order = self.topological_order();

        let compiled_text = order
            .iter()
            .filter(|id| !self.branch_targets.contains(*id))
            .filter_map(|id| {
                let content = self.render(self.nodes[id]);
                (!content.is_empty()).then_some(content)
            })
            .join(self.doc.settings.joiner());

        CompileResult {
            compiled_text,
            report,
        }
    }

    /// Kahn's-algorithm ordering over the derived adjacency/in-degree maps.
    ///
    /// The initial frontier is every in-degree-zero node sorted by position
    /// (`y` then `x`, node id as the last resort so equal positions stay
    /// reproducible). Newly-zeroed successors are appended to the back of the
    /// queue in first-in-first-out order, never re-sorted. Nodes trapped in a
    /// cycle are never dequeued and are simply absent from the result.
    pub fn topological_order(&self) -> Vec<&'d str> {
        let mut in_degree = self.in_degree.clone();

        let mut frontier: Vec<&'d str> = in_degree
            .iter()
            .filter_map(|(id, degree)| (*degree == 0).then_some(*id))
            .collect();
        frontier.sort_by(|a, b| {
            let (pa, pb) = (self.nodes[a].position, self.nodes[b].position);
            pa.y.total_cmp(&pb.y)
                .then(pa.x.total_cmp(&pb.x))
                .then_with(|| a.cmp(b))
        });

        let mut queue: VecDeque<&'d str> = frontier.into();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = queue.pop_front() {
            order.push(id);
            if let Some(successors) = self.adjacency.get(id) {
                for &successor in successors {
                    if let Some(degree) = in_degree.get_mut(successor) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(successor);
                        }
                    }
                }
            }
        }
        order
    }
}

/// Compiles a document in one call. Equivalent to constructing a
/// [`PromptCompiler`] and calling [`PromptCompiler::compile`].
pub fn compile_document(doc: &Document) -> CompileResult {
    PromptCompiler::new(doc).compile()
}
