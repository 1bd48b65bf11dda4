//! N-gram frequency accumulation over the label vocabulary.

use std::collections::HashMap;

use crate::types::WordTuple;

/// Frequency counter for n-grams produced while decomposing label tuples.
///
/// Counters from parallel workers merge commutatively, so accumulation over
/// a partitioned vocabulary is deterministic.
#[derive(Debug, Default)]
pub struct NgramCounter {
    counts: HashMap<WordTuple, u64>,
}

impl NgramCounter {
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose one label tuple and count each of its contiguous n-grams,
    /// including the full tuple itself.
    pub fn add_label_tuple(&mut self, tuple: &WordTuple) {
        for ngram in tuple.ngrams() {
            *self.counts.entry(ngram).or_insert(0) += 1;
        }
    }

    /// Merge another counter into this one.
    pub fn merge(&mut self, other: NgramCounter) {
        for (ngram, count) in other.counts {
            *self.counts.entry(ngram).or_insert(0) += count;
        }
    }

    /// Frequency of a specific n-gram.
    pub fn count(&self, tuple: &WordTuple) -> u64 {
        self.counts.get(tuple).copied().unwrap_or(0)
    }

    /// Number of distinct n-grams seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no n-grams have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Consume the counter, yielding the raw count map.
    pub fn into_counts(self) -> HashMap<WordTuple, u64> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(words: &[&str]) -> WordTuple {
        WordTuple::from_words(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn counts_every_contiguous_ngram_once_per_label() {
        let mut counter = NgramCounter::new();
        counter.add_label_tuple(&tuple(&["environmental", "laws", "violation"]));
        counter.add_label_tuple(&tuple(&["environmental", "laws"]));
        counter.add_label_tuple(&tuple(&["laws"]));

        // "laws" occurs as a slice of all three tuples.
        assert_eq!(counter.count(&tuple(&["laws"])), 3);
        // "environmental laws" is a slice of the first two.
        assert_eq!(counter.count(&tuple(&["environmental", "laws"])), 2);
        assert_eq!(counter.count(&tuple(&["environmental", "laws", "violation"])), 1);
        // "laws violation" is contiguous in the sorted 3-tuple.
        assert_eq!(counter.count(&tuple(&["laws", "violation"])), 1);
        // Non-adjacent pair never produced.
        assert_eq!(counter.count(&tuple(&["environmental", "violation"])), 0);
    }

    #[test]
    fn merge_sums_counts() {
        let mut a = NgramCounter::new();
        let mut b = NgramCounter::new();
        a.add_label_tuple(&tuple(&["fraud"]));
        b.add_label_tuple(&tuple(&["fraud"]));
        a.merge(b);
        assert_eq!(a.count(&tuple(&["fraud"])), 2);
        assert_eq!(a.len(), 1);
    }
}
