//! High-level pipelines.

pub mod build_graph;

pub use build_graph::BuildPipeline;
