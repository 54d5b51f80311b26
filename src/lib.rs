//! # Promptflow - Prompt Graph Compilation Engine
//!
//! **Promptflow** deterministically compiles a directed graph of typed prompt
//! fragments (persona, context, task, conditional branch, loop, output format,
//! ...) into a single linear text prompt plus a structural validation report.
//! It is the headless core behind a visual prompt-assembly editor: the canvas,
//! forms and persistence live elsewhere and talk to this crate through plain
//! data.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical [`document::Document`]
//! model. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's graph format into your own Rust
//!     structs, or use the bundled [`ui::UiDocument`] JSON shape.
//! 2.  **Convert**: Implement the [`document::IntoDocument`] trait for your structs to
//!     translate into the canonical `Document`.
//! 3.  **Compile**: Call [`compiler::compile_document`]. Validation (missing
//!     required fields, cyclic dependencies) never aborts compilation: the
//!     result always carries a best-effort text plus the report.
//! 4.  **Edit interactively**: Keep the live document in a [`store::DocumentStore`]
//!     and recompile after every mutation; identical documents always produce
//!     byte-identical output.
//!
//! Branch (`ifElse`) and loop nodes are rendered as textual pseudo-code
//! blocks; nothing is ever executed, and no network or model call happens
//! anywhere in this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptflow::prelude::*;
//!
//! fn main() {
//!     let mut store = DocumentStore::default();
//!
//!     let persona = store.add_node(NodeType::Persona, Position::new(0.0, 0.0));
//!     store.update_node_field(&persona, "name", "Senior Copywriter");
//!     store.update_node_field(&persona, "tone", "professional");
//!     store.update_node_field(
//!         &persona,
//!         "goals",
//!         vec!["clarity".to_string(), "brevity".to_string()],
//!     );
//!
//!     let task = store.add_node(NodeType::Task, Position::new(0.0, 160.0));
//!     store.update_node_field(&task, "objective", "Write a product tagline");
//!     store.update_node_field(
//!         &task,
//!         "steps",
//!         vec!["draft three options".to_string(), "pick the best".to_string()],
//!     );
//!
//!     store.add_edge(persona, task, None);
//!
//!     let result = store.compile();
//!     println!("{}", result.compiled_text);
//!     if !result.report.is_clean() {
//!         eprintln!("report: {:?}", result.report);
//!     }
//! }
//! ```

pub mod compiler;
pub mod document;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod store;
pub mod ui;
