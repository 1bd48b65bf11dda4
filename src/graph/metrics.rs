//! Graph-level metrics for health-checking a built or pruned hierarchy.

use crate::graph::LabelGraph;

/// Summary metrics for the label hierarchy graph.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GraphMetrics {
    /// Total number of nodes.
    pub num_nodes: usize,
    /// Total number of directed edges.
    pub num_edges: usize,
    /// Nodes corresponding to observed labels.
    pub num_real: usize,
    /// Synthetic intermediate nodes.
    pub num_synthetic: usize,
    /// Nodes without a more-general parent.
    pub num_roots: usize,
    /// Average out-degree (edges per node).
    pub avg_out_degree: f32,
}

impl GraphMetrics {
    /// Compute metrics for the given graph.
    pub fn compute(graph: &LabelGraph) -> Self {
        let num_nodes = graph.node_count();
        let num_edges = graph.edge_count();
        let num_real = graph.nodes().iter().filter(|n| n.real_label).count();

        let avg_out_degree = if num_nodes > 0 {
            num_edges as f32 / num_nodes as f32
        } else {
            0.0
        };

        Self {
            num_nodes,
            num_edges,
            num_real,
            num_synthetic: num_nodes - num_real,
            num_roots: graph.roots().len(),
            avg_out_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxoConfig;
    use crate::graph::{GraphPruner, HierarchyBuilder};

    #[test]
    fn metrics_on_empty_graph_are_zero() {
        let metrics = GraphMetrics::compute(&LabelGraph::new());
        assert_eq!(metrics, GraphMetrics::default());
    }

    #[test]
    fn metrics_reflect_pruned_chain() {
        let config = TaxoConfig::default();
        let sets = vec![vec![
            "violation of environmental laws".to_string(),
            "environmental laws".to_string(),
            "laws".to_string(),
        ]];
        let mut graph = HierarchyBuilder::build(config.clone(), &sets).unwrap();
        GraphPruner::prune(&mut graph, &config).unwrap();

        let metrics = GraphMetrics::compute(&graph);
        assert_eq!(metrics.num_nodes, 3);
        assert_eq!(metrics.num_edges, 2);
        assert_eq!(metrics.num_real, 3);
        assert_eq!(metrics.num_synthetic, 0);
        assert_eq!(metrics.num_roots, 1);
    }
}
