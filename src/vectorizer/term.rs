use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::TermVector;

/// TermFrequency struct
/// Counts how many times each term appears in one document.
///
/// # Examples
/// ```
/// use gap_similarity::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("refund");
/// term_freq.add_term("email");
/// term_freq.add_term("refund");
///
/// assert_eq!(term_freq.term_count("refund"), 2);
/// assert_eq!(term_freq.tf_vector().weight("refund"), 2.0 / 3.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every term of a token sequence
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        freq.add_terms(terms);
        freq
    }

    /// Add a term
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrences of a term, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms added (with repetition)
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }

    /// Distinct terms in first-seen order
    pub fn term_set(&self) -> impl Iterator<Item = &str> + '_ {
        self.term_count.keys().map(String::as_str)
    }

    /// TF of a term: count / total
    #[inline]
    pub fn tf_term(&self, term: &str) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.term_count(term) as f64 / self.total_term_count as f64
    }

    /// TF vector of the document
    /// An empty document yields an empty vector.
    pub fn tf_vector(&self) -> TermVector {
        if self.is_empty() {
            return TermVector::new();
        }
        let total = self.total_term_count as f64;
        let mut vector = TermVector::with_capacity(self.term_count.len());
        for (term, &count) in &self.term_count {
            vector.insert(term, count as f64 / total);
        }
        vector
    }
}
