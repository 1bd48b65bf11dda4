//! Global configuration for hierarchy building and pruning.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The standard English stopword list used when no custom list is supplied.
///
/// Matches the usual NLP toolkit list (articles, prepositions, pronouns,
/// auxiliaries). Lookup is exact-match on the raw token.
const DEFAULT_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Configuration for label canonicalization and graph pruning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxoConfig {
    /// Tokens dropped from labels before forming word tuples.
    pub stopwords: BTreeSet<String>,
    /// Safety cap on the pruning fixed-point loop. Each productive iteration
    /// strictly shrinks the (node, edge) count pair, so hitting this cap
    /// indicates a logic error rather than a large input.
    pub max_prune_iterations: usize,
}

impl Default for TaxoConfig {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
            max_prune_iterations: 64,
        }
    }
}

/// Build the default English stopword set.
pub fn default_stopwords() -> BTreeSet<String> {
    DEFAULT_STOPWORDS.iter().map(|s| (*s).to_string()).collect()
}
