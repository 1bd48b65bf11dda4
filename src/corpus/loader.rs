//! Loader for line-delimited JSON corpora of labeled provisions.

use std::fs::File;
use std::io::{BufRead, BufReader};

use serde::Deserialize;

use crate::errors::Result;

/// A single document from the JSONL corpus.
///
/// The three fields below are the whole contract the hierarchy core needs;
/// only the label sets actually feed the graph.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledDoc {
    /// Document identifier.
    pub source: String,
    /// Raw text of the provision.
    pub provision: String,
    /// Free-text labels attached to the document.
    pub label: Vec<String>,
}

/// A corpus reader for line-delimited JSON files.
#[derive(Debug)]
pub struct JsonlCorpus {
    path: String,
}

impl JsonlCorpus {
    /// Create a new corpus reader for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Iterate over documents in the corpus.
    pub fn iter(&self) -> Result<impl Iterator<Item = Result<LabeledDoc>>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        Ok(reader.lines().map(|line| {
            let line = line?;
            let doc: LabeledDoc = serde_json::from_str(&line)?;
            Ok(doc)
        }))
    }

    /// Collect all per-document label sets.
    pub fn label_sets(&self) -> Result<Vec<Vec<String>>> {
        self.iter()?.map(|doc| doc.map(|d| d.label)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_jsonl_documents_and_label_sets() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"source": "doc1", "provision": "text one", "label": ["laws", "fraud"]}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"source": "doc2", "provision": "text two", "label": ["environmental laws"]}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let corpus = JsonlCorpus::new(file.path().to_string_lossy().into_owned());
        let docs: Vec<LabeledDoc> = corpus.iter().unwrap().map(|d| d.unwrap()).collect();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].source, "doc1");
        assert_eq!(docs[0].label, ["laws", "fraud"]);

        let sets = corpus.label_sets().unwrap();
        assert_eq!(sets, vec![
            vec!["laws".to_string(), "fraud".to_string()],
            vec!["environmental laws".to_string()],
        ]);
    }

    #[test]
    fn malformed_line_surfaces_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"source": "doc1""#).unwrap();
        file.flush().unwrap();

        let corpus = JsonlCorpus::new(file.path().to_string_lossy().into_owned());
        let results: Vec<_> = corpus.iter().unwrap().collect();
        assert!(results[0].is_err());
    }
}
