//! Unified error type for the token-path search engine.
//!
//! The traversal itself never fails on "no match"; those are empty results.
//! Errors only come from collaborators: index implementations supplied by the
//! host, and loading a graph snapshot from disk.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// All errors that can occur in search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// I/O error (snapshot read)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to load a graph snapshot from disk
    #[error("Failed to load graph from {path}: {message}")]
    GraphLoad { path: String, message: String },

    /// A child reference names a node the snapshot does not define
    #[error("Unknown node '{node}' referenced from '{referenced_from}'")]
    UnknownNode { node: String, referenced_from: String },

    /// The snapshot's root node is not defined
    #[error("Root node '{0}' is not defined in the graph")]
    MissingRoot(String),

    /// A host-supplied index or collection failed while answering a query.
    /// Propagated as-is; the engine never masks these.
    #[error("Search index failure: {0}")]
    Collaborator(String),
}
