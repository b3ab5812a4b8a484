//! Error types for the sdkgen generator.

use sdkgen_define::DefineError;
use thiserror::Error;

/// Errors that can occur during binding generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An operation's HTTP binding contradicts its service's protocol family.
    ///
    /// Raised when a simple-POST service declares anything other than
    /// `POST /`, or when a non-REST service uses `{Param}` placeholders in a
    /// request URI. Generation of the operation is aborted.
    #[error("Schema inconsistency in operation '{operation}': {reason}")]
    SchemaInconsistency {
        /// The offending operation.
        operation: String,
        /// What was expected and what was found.
        reason: String,
    },

    /// Top-level rendering was requested for a shape that is not a structure.
    #[error("Top-level rendering requires a structure, but '{shape}' is a {kind}")]
    RenderAssertion {
        /// Name of the shape passed in.
        shape: String,
        /// Its kind tag.
        kind: String,
    },

    /// The service definition could not be loaded or referenced a missing shape.
    #[error(transparent)]
    Definition(#[from] DefineError),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
