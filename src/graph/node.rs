//! Label node definition.

use serde::{Deserialize, Serialize};

use crate::types::WordTuple;

/// A node in the label hierarchy graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelNode {
    /// Canonical word tuple; the node's identity.
    pub tuple: WordTuple,
    /// Whether this tuple equals some observed label's canonical tuple.
    pub real_label: bool,
    /// Number of times this n-gram was produced while decomposing the label
    /// vocabulary.
    pub weight: u64,
    /// The original label string the tuple was derived from. Only present on
    /// real-label nodes; when two labels normalize to the same tuple, one of
    /// them is kept.
    pub original_label: Option<String>,
}

impl LabelNode {
    /// Create a node for an observed label.
    pub fn real(tuple: WordTuple, weight: u64, original_label: String) -> Self {
        Self {
            tuple,
            real_label: true,
            weight,
            original_label: Some(original_label),
        }
    }

    /// Create a node for a word combination never observed verbatim as a label.
    pub fn synthetic(tuple: WordTuple, weight: u64) -> Self {
        Self {
            tuple,
            real_label: false,
            weight,
            original_label: None,
        }
    }
}
