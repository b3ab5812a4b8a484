//! Error types for loading and querying service definitions.

use thiserror::Error;

/// Errors raised while loading a service description or resolving names in it.
#[derive(Debug, Error)]
pub enum DefineError {
    /// The service description (or its examples document) is not valid JSON
    /// for the expected layout.
    #[error("Failed to parse service description: {0}")]
    Parse(#[from] serde_json::Error),

    /// A shape name was referenced that the definition does not declare.
    ///
    /// Well-formed descriptions never trigger this; it indicates a defect in
    /// whatever produced the description.
    #[error("Unknown shape '{0}'")]
    UnknownShape(String),
}
