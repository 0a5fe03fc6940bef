use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Document frequencies of a candidate corpus.
/// Only counts documents and, per term, how many documents contain it.
/// Built fresh for every query and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term -> number of documents containing it
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from one token sequence per document
    pub fn from_documents<I, D, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut corpus = Self::new();
        for doc in documents {
            corpus.add_set(doc.as_ref());
        }
        corpus
    }

    /// Add a document's terms to the corpus
    /// Repeated terms within the document count once.
    pub fn add_set<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let distinct: IndexSet<&str> = terms.iter().map(AsRef::as_ref).collect();
        for term in distinct {
            self.bump(term);
        }
        self
    }

    /// Add a document from its term counts
    pub fn add_freq(&mut self, freq: &TermFrequency) -> &mut Self {
        self.doc_num += 1;
        for term in freq.term_set() {
            self.bump(term);
        }
        self
    }

    #[inline]
    fn bump(&mut self, term: &str) {
        *self.term_counts.entry(term.into()).or_insert(0) += 1;
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing the term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_num == 0
    }

    /// (term, document frequency) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.term_counts.iter().map(|(term, &count)| (term.as_ref(), count))
    }
}
