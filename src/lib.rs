#![forbid(unsafe_code)]
#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

//! # taxograph
//!
//! Label hierarchy graph engine: infers a directed hypernym/hyponym graph
//! over free-text document labels, purely from their surface word content.
//! - Sorted word-tuple node identity with contiguous n-gram decomposition
//! - Superset-containment edge inference (more specific -> more general)
//! - Fixed-point pruning: shortcut-edge removal + synthetic-node collapsing
//!
//! This crate is designed to be deterministic, testable, and training-free.

pub mod config;
pub mod corpus;
pub mod errors;
/// Graph export: GEXF and JSON node-link dumps.
pub mod export;
pub mod graph;
/// High-level pipelines.
pub mod pipeline;
pub mod types;

pub use config::TaxoConfig;
pub use errors::{Result, TaxoError};
pub use export::{write_gexf, GraphDump};
pub use graph::{GraphMetrics, GraphPruner, HierarchyBuilder, LabelGraph, LabelNode, NgramCounter};
pub use pipeline::BuildPipeline;
pub use types::WordTuple;
