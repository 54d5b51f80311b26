use thiserror::Error;

/// Errors raised at the JSON wire boundary when reading or writing an editor
/// document. Compilation itself never fails; see the validation report for
/// structural problems.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse document JSON: {0}")]
    JsonParse(String),

    #[error("Failed to serialize document JSON: {0}")]
    JsonSerialize(String),
}

/// Errors that can occur when converting a custom user format into a
/// promptflow `Document`.
#[derive(Error, Debug, Clone)]
pub enum DocumentConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a compiled prompt artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact I/O error: {0}")]
    Io(String),

    #[error("Artifact encoding error: {0}")]
    Codec(String),
}
