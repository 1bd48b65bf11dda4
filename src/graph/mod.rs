//! Label hierarchy graph: nodes, edges, building, pruning, and metrics.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;

use crate::types::WordTuple;

pub mod builder;
pub mod metrics;
pub mod node;
pub mod pruning;
/// N-gram frequency accumulation.
pub mod stats;

pub use builder::HierarchyBuilder;
pub use metrics::GraphMetrics;
pub use node::LabelNode;
pub use pruning::GraphPruner;
pub use stats::NgramCounter;

/// The label hierarchy graph.
///
/// Edges run from the longer (more specific) word tuple to the shorter (more
/// general) one, so a node's *successors* are its inferred parents and its
/// *predecessors* are its children. Backed by a stable petgraph so node
/// indices survive removals during pruning; a tuple-to-index map supports
/// lookups by node identity. All mutation goes through the wrapper methods,
/// which keep the map in sync.
#[derive(Debug)]
pub struct LabelGraph {
    inner: StableDiGraph<LabelNode, ()>,
    index: HashMap<WordTuple, NodeIndex>,
}

impl LabelGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Access the underlying petgraph graph (for advanced read-only operations).
    pub fn inner(&self) -> &StableDiGraph<LabelNode, ()> {
        &self.inner
    }

    /// Add a node, registering its tuple in the identity map.
    pub fn add_node(&mut self, node: LabelNode) -> NodeIndex {
        let tuple = node.tuple.clone();
        let idx = self.inner.add_node(node);
        self.index.insert(tuple, idx);
        idx
    }

    /// Add a directed edge. Idempotent: an existing edge is left in place.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.inner.update_edge(from, to, ());
    }

    /// Remove the edge between two nodes, if present.
    pub fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if let Some(edge) = self.inner.find_edge(from, to) {
            self.inner.remove_edge(edge);
        }
    }

    /// Remove a node and all its incident edges.
    pub fn remove_node(&mut self, idx: NodeIndex) {
        if let Some(node) = self.inner.remove_node(idx) {
            self.index.remove(&node.tuple);
        }
    }

    /// Whether the node index is still present.
    pub fn contains_node(&self, idx: NodeIndex) -> bool {
        self.inner.contains_node(idx)
    }

    /// Whether a direct edge exists between two nodes.
    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.inner.find_edge(from, to).is_some()
    }

    /// Look up a node index by tuple identity.
    pub fn node_index(&self, tuple: &WordTuple) -> Option<NodeIndex> {
        self.index.get(tuple).copied()
    }

    /// Look up a node by tuple identity.
    pub fn node(&self, tuple: &WordTuple) -> Option<&LabelNode> {
        self.node_index(tuple).and_then(|idx| self.inner.node_weight(idx))
    }

    /// The node payload at an index, if present.
    pub fn node_at(&self, idx: NodeIndex) -> Option<&LabelNode> {
        self.inner.node_weight(idx)
    }

    /// Whether the node at `idx` corresponds to an observed label.
    pub fn is_real(&self, idx: NodeIndex) -> bool {
        self.inner.node_weight(idx).map(|n| n.real_label).unwrap_or(false)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Snapshot of all node indices, safe to iterate while mutating.
    pub fn node_indices(&self) -> Vec<NodeIndex> {
        self.inner.node_indices().collect()
    }

    /// Direct successors (inferred parents, more general tuples) of a node.
    pub fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.inner.neighbors_directed(idx, Direction::Outgoing).collect()
    }

    /// Direct predecessors (children, more specific tuples) of a node.
    pub fn predecessors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.inner.neighbors_directed(idx, Direction::Incoming).collect()
    }

    /// All nodes, sorted by tuple for deterministic output.
    pub fn nodes(&self) -> Vec<&LabelNode> {
        let mut out: Vec<&LabelNode> = self
            .inner
            .node_indices()
            .filter_map(|idx| self.inner.node_weight(idx))
            .collect();
        out.sort_by(|a, b| a.tuple.cmp(&b.tuple));
        out
    }

    /// All directed edges as (source, target) node pairs.
    pub fn edges(&self) -> Vec<(&LabelNode, &LabelNode)> {
        self.inner
            .edge_references()
            .filter_map(|e| {
                let src = self.inner.node_weight(e.source())?;
                let dst = self.inner.node_weight(e.target())?;
                Some((src, dst))
            })
            .collect()
    }

    /// Roots: nodes with no outgoing edge, i.e. no inferred more-general
    /// parent. Sorted by tuple.
    pub fn roots(&self) -> Vec<&LabelNode> {
        let mut out: Vec<&LabelNode> = self
            .inner
            .node_indices()
            .filter(|&idx| {
                self.inner
                    .neighbors_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .filter_map(|idx| self.inner.node_weight(idx))
            .collect();
        out.sort_by(|a, b| a.tuple.cmp(&b.tuple));
        out
    }

    /// Roots that correspond to observed labels.
    pub fn real_roots(&self) -> Vec<&LabelNode> {
        self.roots().into_iter().filter(|n| n.real_label).collect()
    }

    /// Direct parents (more general nodes) of the node identified by `tuple`.
    pub fn parents_of(&self, tuple: &WordTuple) -> Vec<&LabelNode> {
        self.neighbors_of(tuple, Direction::Outgoing)
    }

    /// Direct children (more specific nodes) of the node identified by `tuple`.
    pub fn children_of(&self, tuple: &WordTuple) -> Vec<&LabelNode> {
        self.neighbors_of(tuple, Direction::Incoming)
    }

    fn neighbors_of(&self, tuple: &WordTuple, dir: Direction) -> Vec<&LabelNode> {
        let mut out: Vec<&LabelNode> = match self.index.get(tuple) {
            Some(&idx) => self
                .inner
                .neighbors_directed(idx, dir)
                .filter_map(|n| self.inner.node_weight(n))
                .collect(),
            None => Vec::new(),
        };
        out.sort_by(|a, b| a.tuple.cmp(&b.tuple));
        out
    }
}

impl Default for LabelGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(words: &[&str]) -> WordTuple {
        WordTuple::from_words(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn node_identity_map_survives_removal() {
        let mut g = LabelGraph::new();
        let a = g.add_node(LabelNode::real(tuple(&["laws"]), 1, "laws".to_string()));
        let b = g.add_node(LabelNode::synthetic(tuple(&["tax"]), 1));
        g.add_edge(a, b);
        assert_eq!(g.node_count(), 2);
        assert!(g.node(&tuple(&["tax"])).is_some());

        g.remove_node(b);
        assert_eq!(g.node_count(), 1);
        assert!(g.node(&tuple(&["tax"])).is_none());
        assert!(g.node(&tuple(&["laws"])).is_some());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = LabelGraph::new();
        let a = g.add_node(LabelNode::synthetic(tuple(&["a", "b"]), 1));
        let b = g.add_node(LabelNode::synthetic(tuple(&["a"]), 1));
        g.add_edge(a, b);
        g.add_edge(a, b);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn parent_and_child_queries_follow_edge_direction() {
        let mut g = LabelGraph::new();
        let specific = g.add_node(LabelNode::synthetic(tuple(&["environmental", "laws"]), 1));
        let general = g.add_node(LabelNode::synthetic(tuple(&["laws"]), 1));
        g.add_edge(specific, general);

        let parents = g.parents_of(&tuple(&["environmental", "laws"]));
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].tuple, tuple(&["laws"]));

        let children = g.children_of(&tuple(&["laws"]));
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tuple, tuple(&["environmental", "laws"]));

        let roots = g.roots();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].tuple, tuple(&["laws"]));
    }
}
