//! Core value types used across the taxograph engine.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical node identity: a label's words, stopword-filtered and sorted
/// alphabetically.
///
/// Two labels that reduce to the same tuple map to the same graph node.
/// Equality, ordering, and hashing are structural over the word sequence.
/// Duplicate words are kept; the tuple is a sorted sequence, not a set.
/// The empty tuple is unrepresentable: both constructors reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordTuple(Vec<String>);

impl WordTuple {
    /// Canonicalize a raw label: split on whitespace, drop stopwords, sort.
    ///
    /// Returns `None` when the label reduces to an empty tuple (empty string,
    /// or stopwords only); such labels are skipped by the builder.
    pub fn from_label(label: &str, stopwords: &BTreeSet<String>) -> Option<Self> {
        let words: Vec<String> = label
            .split_whitespace()
            .filter(|w| !stopwords.contains(*w))
            .map(|w| w.to_string())
            .collect();
        Self::from_words(words)
    }

    /// Build a tuple from pre-split words, sorting them into canonical order.
    ///
    /// Returns `None` for an empty word list.
    pub fn from_words(mut words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        words.sort();
        Some(Self(words))
    }

    /// Number of words in the tuple.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tuple has no words. Always false for constructed tuples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The words in canonical (sorted) order.
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// All contiguous non-empty sub-tuples of this tuple, including itself.
    ///
    /// Slices of a sorted sequence are themselves sorted, so each n-gram is
    /// already in canonical form. A tuple of length `n` yields `n * (n+1) / 2`
    /// n-grams.
    pub fn ngrams(&self) -> impl Iterator<Item = WordTuple> + '_ {
        let n = self.0.len();
        (0..n).flat_map(move |i| (i + 1..=n).map(move |j| WordTuple(self.0[i..j].to_vec())))
    }

    /// Whether every word of `other` also occurs in this tuple.
    pub fn contains_words(&self, other: &WordTuple) -> bool {
        other.0.iter().all(|w| self.0.binary_search(w).is_ok())
    }

    /// Render the tuple as a stable space-joined string, usable as a node id
    /// in graph-interchange formats.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WordTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_stopwords;

    fn tuple(words: &[&str]) -> WordTuple {
        WordTuple::from_words(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn from_label_filters_stopwords_and_sorts() {
        let stops = default_stopwords();
        let t = WordTuple::from_label("violation of environmental laws", &stops).unwrap();
        assert_eq!(t.words(), ["environmental", "laws", "violation"]);
    }

    #[test]
    fn from_label_rejects_degenerate_labels() {
        let stops = default_stopwords();
        assert!(WordTuple::from_label("", &stops).is_none());
        assert!(WordTuple::from_label("of the", &stops).is_none());
        assert!(WordTuple::from_label("   ", &stops).is_none());
    }

    #[test]
    fn equal_tuples_regardless_of_word_order() {
        assert_eq!(tuple(&["laws", "environmental"]), tuple(&["environmental", "laws"]));
    }

    #[test]
    fn ngrams_enumerates_all_contiguous_slices() {
        let t = tuple(&["environmental", "laws", "violation"]);
        let grams: Vec<String> = t.ngrams().map(|g| g.key()).collect();
        assert_eq!(grams.len(), 6);
        assert!(grams.contains(&"environmental laws violation".to_string()));
        assert!(grams.contains(&"environmental laws".to_string()));
        assert!(grams.contains(&"laws violation".to_string()));
        assert!(grams.contains(&"environmental".to_string()));
        assert!(grams.contains(&"laws".to_string()));
        assert!(grams.contains(&"violation".to_string()));
        // Non-adjacent combination is not a slice.
        assert!(!grams.contains(&"environmental violation".to_string()));
    }

    #[test]
    fn single_word_tuple_has_one_ngram() {
        let t = tuple(&["fraud"]);
        let grams: Vec<WordTuple> = t.ngrams().collect();
        assert_eq!(grams, vec![t]);
    }

    #[test]
    fn containment_is_word_set_inclusion() {
        let big = tuple(&["environmental", "laws", "violation"]);
        let small = tuple(&["environmental", "laws"]);
        let other = tuple(&["tax", "laws"]);
        assert!(big.contains_words(&small));
        assert!(big.contains_words(&big));
        assert!(!big.contains_words(&other));
        assert!(!small.contains_words(&big));
    }
}
