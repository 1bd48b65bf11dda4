//! Corpus ingestion: the external collaborator supplying (text, label-set)
//! pairs to the hierarchy engine.

/// JSONL corpus loader.
pub mod loader;

pub use loader::{JsonlCorpus, LabeledDoc};
