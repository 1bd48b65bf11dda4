//! Error types for taxograph.

use thiserror::Error;

/// Top-level error type for taxograph operations.
#[derive(Debug, Error)]
pub enum TaxoError {
    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Corpus ingestion errors.
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Graph construction or query errors.
    #[error("graph error: {0}")]
    Graph(String),

    /// Pruning failed to reach a fixed point within the iteration cap.
    /// Signals a logic error in the edge-removal/collapse invariants.
    #[error("pruning did not converge after {iterations} iterations")]
    PruneDivergence {
        /// Number of iterations attempted.
        iterations: usize,
    },

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for taxograph operations.
pub type Result<T> = std::result::Result<T, TaxoError>;
