pub mod compare;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod tokenizer;

use indexmap::IndexMap;
use num::Float;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

/// A gap record reduced to one text blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub text: String,
}

impl Document {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    /// Build the searchable text of a gap from its title and description.
    /// Either field may be absent, but not both.
    pub fn from_gap(id: u64, title: Option<&str>, description: Option<&str>) -> Result<Self> {
        let text = match (title, description) {
            (Some(title), Some(description)) => format!("{title} {description}"),
            (Some(title), None) => title.to_string(),
            (None, Some(description)) => description.to_string(),
            (None, None) => return Err(SimilarityError::MissingText { id }),
        };
        Ok(Self { id, text })
    }
}

/// Sparse term -> weight vector
/// Absent terms have weight zero and are never stored.
/// Iteration follows insertion order, so a vector built from the same
/// tokens always iterates (and sums) the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermVector<N = f64> {
    weights: IndexMap<Box<str>, N>,
}

impl<N> TermVector<N>
where
    N: Float,
{
    pub fn new() -> Self {
        Self { weights: IndexMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { weights: IndexMap::with_capacity(capacity) }
    }

    /// Set a term weight, replacing any previous value
    #[inline]
    pub fn insert(&mut self, term: &str, weight: N) -> &mut Self {
        self.weights.insert(term.into(), weight);
        self
    }

    /// Weight of a term, zero when absent
    #[inline]
    pub fn weight(&self, term: &str) -> N {
        self.get(term).unwrap_or_else(N::zero)
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.weights.get(term).copied()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> + '_ {
        self.weights.iter().map(|(term, &weight)| (term.as_ref(), weight))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.weights.keys().map(|term| term.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights
    pub fn sum(&self) -> N {
        self.weights.values().fold(N::zero(), |acc, &w| acc + w)
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> N {
        self.weights
            .values()
            .fold(N::zero(), |acc, &w| acc + w * w)
            .sqrt()
    }
}

impl<N> Default for TermVector<N>
where
    N: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S> FromIterator<(S, N)> for TermVector<N>
where
    N: Float,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        let mut vector = Self::new();
        for (term, weight) in iter {
            vector.insert(term.as_ref(), weight);
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_terms_read_as_zero() {
        let vector: TermVector = [("refund", 0.5), ("email", 0.25)].into_iter().collect();
        assert_eq!(vector.weight("refund"), 0.5);
        assert_eq!(vector.weight("login"), 0.0);
        assert_eq!(vector.get("login"), None);
        assert!(!vector.contains_term("login"));
    }

    #[test]
    fn magnitude_is_euclidean_norm() {
        let vector: TermVector = [("a", 3.0), ("b", 4.0)].into_iter().collect();
        assert_eq!(vector.magnitude(), 5.0);
        assert_eq!(TermVector::<f64>::new().magnitude(), 0.0);
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let vector: TermVector<f32> = [("zeta", 1.0), ("alpha", 2.0), ("mid", 3.0)]
            .into_iter()
            .collect();
        let terms: Vec<&str> = vector.terms().collect();
        assert_eq!(terms, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn gap_text_joins_title_and_description() {
        let doc = Document::from_gap(7, Some("Refund email"), Some("not sent")).unwrap();
        assert_eq!(doc, Document::new(7, "Refund email not sent"));

        let title_only = Document::from_gap(8, Some("Login broken"), None).unwrap();
        assert_eq!(title_only.text, "Login broken");

        let description_only = Document::from_gap(9, None, Some("Page hangs")).unwrap();
        assert_eq!(description_only.text, "Page hangs");
    }

    #[test]
    fn gap_without_any_text_is_rejected() {
        assert_eq!(
            Document::from_gap(3, None, None),
            Err(SimilarityError::MissingText { id: 3 })
        );
    }
}
