//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the promptflow crate so that
//! callers get the core functionality from a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use promptflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/document.json")?;
//! let doc = UiDocument::from_json(&json)?.into_document()?;
//!
//! let result = compile_document(&doc);
//! println!("{}", result.compiled_text);
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{CompileResult, PromptCompiler, ValidationReport, compile_document};

// Canonical document model
pub use crate::document::{
    CompiledPrompt, DEFAULT_JOINER, Document, Edge, FieldValue, IntoDocument, Node, NodeId,
    NodeType, Position, SCHEMA_VERSION, Settings,
};

// Node type registry
pub use crate::registry::{FieldDefinition, FieldKind, NodeTypeDefinition};

// Editor-facing collaborators
pub use crate::store::{DocumentStore, HISTORY_CAPACITY};
pub use crate::ui::UiDocument;

// Error types
pub use crate::error::{ArtifactError, DocumentConversionError, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
