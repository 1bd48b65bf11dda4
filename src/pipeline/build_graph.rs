//! Orchestrates: corpus -> label sets -> raw hierarchy -> pruned graph.

use tracing::info;

use crate::config::TaxoConfig;
use crate::corpus::JsonlCorpus;
use crate::errors::Result;
use crate::graph::{GraphPruner, HierarchyBuilder, LabelGraph};

/// High-level pipeline: corpus label sets to a pruned hierarchy graph.
#[derive(Debug, Clone)]
pub struct BuildPipeline {
    config: TaxoConfig,
}

impl BuildPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: TaxoConfig) -> Self {
        Self { config }
    }

    /// Build the pruned graph from a JSONL corpus.
    pub fn build_from_jsonl(&self, corpus: &JsonlCorpus) -> Result<LabelGraph> {
        let label_sets = corpus.label_sets()?;
        info!(documents = label_sets.len(), "loaded corpus label sets");
        self.build_from_label_sets(&label_sets)
    }

    /// Build the pruned graph from in-memory label sets.
    pub fn build_from_label_sets(&self, label_sets: &[Vec<String>]) -> Result<LabelGraph> {
        let mut builder = HierarchyBuilder::new(self.config.clone());
        builder.ingest_label_sets(label_sets);
        let mut graph = builder.finalize()?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built raw label hierarchy"
        );

        GraphPruner::prune(&mut graph, &self.config)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "pruned label hierarchy"
        );
        Ok(graph)
    }
}
