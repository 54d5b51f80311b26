//! Serde view of the external editor's JSON document format, plus the
//! conversion into the canonical [`crate::document::Document`] model. The
//! compiler core owns no wire format; this module is the boundary the
//! editor/export collaborators talk through.

pub mod types;

pub use types::*;
