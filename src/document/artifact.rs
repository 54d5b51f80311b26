use crate::compiler::{CompileResult, ValidationReport};
use crate::document::Document;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A compiled document frozen to disk: the linearized text plus the validation
/// report that accompanied it. Lets an exporter hand the result around without
/// re-running the compiler.
#[derive(Serialize, Deserialize, Debug)]
pub struct CompiledPrompt {
    pub document_id: String,
    pub document_name: String,
    pub compiled_text: String,
    pub report: ValidationReport,
}

impl CompiledPrompt {
    pub fn new(doc: &Document, result: CompileResult) -> Self {
        Self {
            document_id: doc.id.clone(),
            document_name: doc.name.clone(),
            compiled_text: result.compiled_text,
            report: result.report,
        }
    }

    /// Serializes the artifact to bytes using the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Codec(format!("Serialization failed: {}", e)))
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Codec(format!("Deserialization failed: {}", e)))
    }

    /// Saves the artifact to a file.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path)
            .map_err(|e| ArtifactError::Io(format!("Could not create file '{}': {}", path, e)))?;
        file.write_all(&bytes)
            .map_err(|e| ArtifactError::Io(format!("Could not write to file '{}': {}", path, e)))?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Io(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| ArtifactError::Io(format!("Could not read from file '{}': {}", path, e)))?;
        Self::from_bytes(&bytes)
    }
}
