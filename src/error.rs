//! Error types for the graph model and editor configuration.
//!
//! Interaction policy (a disabled operation, a click that hits nothing, a
//! duplicate edge) is never reported through these types; the controller skips
//! such actions silently.

use crate::types::VertexId;
use thiserror::Error;

/// Failures reported by a [`crate::GraphModel`] when a mutation cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The referenced vertex is not part of the graph.
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),
    /// An edge would connect a vertex to itself.
    #[error("cannot connect vertex {0} to itself")]
    SelfLoop(VertexId),
}

/// Failures while loading or validating an [`crate::EditorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value outside its allowed range.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// Human readable explanation
        reason: String,
    },
}
