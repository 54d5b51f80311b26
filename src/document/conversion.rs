use super::definition::Document;
use crate::error::DocumentConversionError;

/// A trait for custom data models that can be converted into a promptflow
/// [`Document`].
///
/// This is the primary extension point for making the compiler format-agnostic.
/// By implementing this trait on your own structs, you provide a translation
/// layer that lets the compiler process your editor's native graph format.
///
/// # Example
///
/// ```rust,no_run
/// use promptflow::prelude::*;
/// use promptflow::error::DocumentConversionError;
/// // The prelude's boxed-error `Result` alias takes one parameter; the trait
/// // signature needs the two-parameter form.
/// use std::result::Result;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomNode { id: String, kind: String }
/// struct MyCustomGraph { nodes: Vec<MyCustomNode> }
///
/// // 2. Implement `IntoDocument` for your top-level struct.
/// impl IntoDocument for MyCustomGraph {
///     fn into_document(self) -> Result<Document, DocumentConversionError> {
///         let mut doc = Document::new("my_graph", "My Graph");
///         for node in self.nodes {
///             doc.nodes.push(Node::new(
///                 node.id,
///                 NodeType::parse(&node.kind),
///                 Position::default(),
///             ));
///         }
///         // Convert your edges here as well.
///         Ok(doc)
///     }
/// }
/// ```
pub trait IntoDocument {
    /// Consumes the object and converts it into a compiler-ready document.
    fn into_document(self) -> Result<Document, DocumentConversionError>;
}

impl IntoDocument for Document {
    fn into_document(self) -> Result<Document, DocumentConversionError> {
        Ok(self)
    }
}
