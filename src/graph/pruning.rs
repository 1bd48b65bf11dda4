//! Pruning: shortcut-edge removal and synthetic-node collapsing to a fixed point.

use petgraph::stable_graph::NodeIndex;
use tracing::debug;

use crate::config::TaxoConfig;
use crate::errors::{Result, TaxoError};
use crate::graph::LabelGraph;

/// Iterative graph simplification.
///
/// Runs two passes until neither the node count nor the edge count changes:
///
/// - **shortcut removal**: an edge to a grandparent that is also reachable
///   through a direct parent is redundant and gets dropped;
/// - **synthetic collapse**: a non-real-label node with exactly one
///   predecessor is spliced out, its predecessor re-pointed at its
///   successors. Real-label nodes are never collapsed.
///
/// Each productive iteration strictly shrinks the (node, edge) count pair, so
/// the loop terminates; the configured iteration cap guards against invariant
/// bugs and surfaces them as [`TaxoError::PruneDivergence`].
#[derive(Debug)]
pub struct GraphPruner;

impl GraphPruner {
    /// Prune the graph in place to its fixed point.
    pub fn prune(graph: &mut LabelGraph, config: &TaxoConfig) -> Result<()> {
        for iteration in 0..config.max_prune_iterations {
            let nodes_before = graph.node_count();
            let edges_before = graph.edge_count();

            Self::remove_shortcut_edges(graph);
            Self::collapse_synthetic_nodes(graph);

            if graph.node_count() == nodes_before && graph.edge_count() == edges_before {
                debug!(
                    iteration,
                    nodes = nodes_before,
                    edges = edges_before,
                    "pruning reached fixed point"
                );
                return Ok(());
            }
        }
        Err(TaxoError::PruneDivergence {
            iterations: config.max_prune_iterations,
        })
    }

    /// Remove edges that bypass an intermediate parent.
    ///
    /// For each node, any direct successor that is also a successor of
    /// another direct successor is a grandparent shortcut. Deletions are
    /// collected during the scan and applied afterwards.
    fn remove_shortcut_edges(graph: &mut LabelGraph) {
        let mut deletions: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        for node in graph.node_indices() {
            let successors = graph.successors(node);
            for &parent in &successors {
                for grandparent in graph.successors(parent) {
                    if successors.contains(&grandparent) {
                        deletions.push((node, grandparent));
                    }
                }
            }
        }
        deletions.sort_unstable();
        deletions.dedup();
        for (from, to) in deletions {
            graph.remove_edge(from, to);
        }
    }

    /// Splice out synthetic nodes that have exactly one predecessor.
    ///
    /// Candidates are collected up front; conditions are re-checked when a
    /// candidate is processed because earlier splices can change degrees. A
    /// candidate that gained a second predecessor is left for the next
    /// fixed-point iteration.
    fn collapse_synthetic_nodes(graph: &mut LabelGraph) {
        let candidates: Vec<NodeIndex> = graph
            .node_indices()
            .into_iter()
            .filter(|&idx| !graph.is_real(idx) && graph.predecessors(idx).len() == 1)
            .collect();

        for node in candidates {
            if !graph.contains_node(node) {
                continue;
            }
            let predecessors = graph.predecessors(node);
            if predecessors.len() != 1 {
                continue;
            }
            let child = predecessors[0];
            for parent in graph.successors(node) {
                graph.add_edge(child, parent);
            }
            graph.remove_node(node);
        }
    }
}
