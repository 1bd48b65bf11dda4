//! Graph construction: from label sets to the raw hierarchy graph.

use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;
use tracing::debug;

use crate::config::TaxoConfig;
use crate::errors::Result;
use crate::graph::{LabelGraph, LabelNode, NgramCounter};
use crate::types::WordTuple;

/// Builder for the raw label hierarchy graph.
///
/// Canonicalizes the distinct label vocabulary into word tuples, counts every
/// contiguous n-gram, then materializes one node per distinct n-gram and one
/// edge per strict word-set containment between tuples of different length.
#[derive(Debug)]
pub struct HierarchyBuilder {
    config: TaxoConfig,
    counter: NgramCounter,
    label_map: HashMap<WordTuple, String>,
}

impl HierarchyBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: TaxoConfig) -> Self {
        Self {
            config,
            counter: NgramCounter::new(),
            label_map: HashMap::new(),
        }
    }

    /// Convenience: ingest label sets and finalize in one call.
    pub fn build(config: TaxoConfig, label_sets: &[Vec<String>]) -> Result<LabelGraph> {
        let mut builder = Self::new(config);
        builder.ingest_label_sets(label_sets);
        builder.finalize()
    }

    /// Ingest the label sets of a corpus.
    ///
    /// The label sets are flattened into the distinct label vocabulary;
    /// duplicate labels across documents are counted once. Labels that reduce
    /// to an empty word tuple are skipped. When two distinct labels
    /// canonicalize to the same tuple, the later one in sorted label order is
    /// kept as the tuple's original label (accepted information loss).
    pub fn ingest_label_sets(&mut self, label_sets: &[Vec<String>]) {
        let vocabulary: BTreeSet<&str> = label_sets
            .iter()
            .flat_map(|labels| labels.iter().map(String::as_str))
            .collect();

        let mut tuples = Vec::with_capacity(vocabulary.len());
        for label in vocabulary {
            match WordTuple::from_label(label, &self.config.stopwords) {
                Some(tuple) => {
                    self.label_map.insert(tuple.clone(), label.to_string());
                    tuples.push(tuple);
                }
                None => {
                    debug!(label, "label reduced to empty tuple, skipped");
                }
            }
        }

        let counted = tuples
            .par_iter()
            .fold(NgramCounter::new, |mut acc, tuple| {
                acc.add_label_tuple(tuple);
                acc
            })
            .reduce(NgramCounter::new, |mut a, b| {
                a.merge(b);
                a
            });
        self.counter.merge(counted);
    }

    /// Finalize the graph construction.
    ///
    /// Distinct n-grams are processed in length-descending order, with ties
    /// broken by lexicographic tuple order so edge construction is
    /// deterministic. An edge runs from each tuple to every strictly shorter
    /// tuple whose words it fully contains. An empty vocabulary yields an
    /// empty graph.
    pub fn finalize(self) -> Result<LabelGraph> {
        let counts = self.counter.into_counts();

        let mut tuples: Vec<WordTuple> = counts.keys().cloned().collect();
        tuples.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut graph = LabelGraph::new();
        let mut indices = Vec::with_capacity(tuples.len());
        for tuple in &tuples {
            let weight = counts.get(tuple).copied().unwrap_or(0);
            let node = match self.label_map.get(tuple) {
                Some(original) => LabelNode::real(tuple.clone(), weight, original.clone()),
                None => LabelNode::synthetic(tuple.clone(), weight),
            };
            indices.push(graph.add_node(node));
        }

        // Longer tuples first; a parent cannot have a longer name than its child.
        for i in 0..tuples.len() {
            for j in (i + 1)..tuples.len() {
                if tuples[j].len() < tuples[i].len() && tuples[i].contains_words(&tuples[j]) {
                    graph.add_edge(indices[i], indices[j]);
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            real_labels = self.label_map.len(),
            "raw hierarchy graph built"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(words: &[&str]) -> WordTuple {
        WordTuple::from_words(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    fn label_sets(sets: &[&[&str]]) -> Vec<Vec<String>> {
        sets.iter()
            .map(|s| s.iter().map(|l| l.to_string()).collect())
            .collect()
    }

    fn build(sets: &[&[&str]]) -> LabelGraph {
        HierarchyBuilder::build(TaxoConfig::default(), &label_sets(sets)).unwrap()
    }

    #[test]
    fn empty_corpus_yields_empty_graph() {
        let graph = build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.roots().is_empty());
    }

    #[test]
    fn single_word_label_is_isolated_real_root() {
        let graph = build(&[&["fraud"]]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        let node = graph.node(&tuple(&["fraud"])).unwrap();
        assert!(node.real_label);
        assert_eq!(node.weight, 1);
        assert_eq!(graph.roots().len(), 1);
        assert_eq!(graph.real_roots().len(), 1);
    }

    #[test]
    fn environmental_laws_chain_with_shortcut() {
        let graph = build(&[&["violation of environmental laws", "environmental laws", "laws"]]);

        let elv = tuple(&["environmental", "laws", "violation"]);
        let el = tuple(&["environmental", "laws"]);
        let l = tuple(&["laws"]);

        for t in [&elv, &el, &l] {
            assert!(graph.node(t).unwrap().real_label, "{t} should be real");
        }

        let i_elv = graph.node_index(&elv).unwrap();
        let i_el = graph.node_index(&el).unwrap();
        let i_l = graph.node_index(&l).unwrap();
        assert!(graph.has_edge(i_elv, i_el));
        assert!(graph.has_edge(i_el, i_l));
        // The raw graph carries the grandparent shortcut; pruning removes it.
        assert!(graph.has_edge(i_elv, i_l));
    }

    #[test]
    fn raw_edges_satisfy_length_and_subset_invariant() {
        let graph = build(&[
            &["violation of environmental laws", "environmental laws"],
            &["laws", "tax laws"],
        ]);
        assert!(graph.edge_count() > 0);
        for (src, dst) in graph.edges() {
            assert!(dst.tuple.len() < src.tuple.len());
            assert!(src.tuple.contains_words(&dst.tuple));
        }
    }

    #[test]
    fn weights_count_ngram_productions() {
        let graph = build(&[&["violation of environmental laws", "environmental laws", "laws"]]);
        assert_eq!(graph.node(&tuple(&["laws"])).unwrap().weight, 3);
        assert_eq!(graph.node(&tuple(&["environmental", "laws"])).unwrap().weight, 2);
        assert_eq!(graph.node(&tuple(&["laws", "violation"])).unwrap().weight, 1);
    }

    #[test]
    fn synthetic_nodes_are_tagged() {
        let graph = build(&[&["violation of environmental laws"]]);
        // "laws violation" is a contiguous slice of the sorted tuple but was
        // never observed as a label.
        let node = graph.node(&tuple(&["laws", "violation"])).unwrap();
        assert!(!node.real_label);
        assert!(node.original_label.is_none());
    }

    #[test]
    fn duplicate_labels_across_documents_merge() {
        let graph = build(&[&["fraud"], &["fraud"], &["fraud"]]);
        assert_eq!(graph.node_count(), 1);
        // Vocabulary is distinct labels, so the weight stays 1.
        assert_eq!(graph.node(&tuple(&["fraud"])).unwrap().weight, 1);
    }

    #[test]
    fn colliding_labels_keep_last_in_sorted_order() {
        let graph = build(&[&["laws environmental", "environmental laws"]]);
        assert_eq!(graph.node_count(), 3); // el, e, l
        let node = graph.node(&tuple(&["environmental", "laws"])).unwrap();
        assert!(node.real_label);
        assert_eq!(node.original_label.as_deref(), Some("laws environmental"));
    }

    #[test]
    fn degenerate_labels_are_skipped() {
        let graph = build(&[&["of the", "", "fraud"]]);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.node(&tuple(&["fraud"])).is_some());
    }
}
