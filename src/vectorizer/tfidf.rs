use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{corpus::Corpus, term::TermFrequency, TermVector};

/// IDF weights of one corpus
/// Terms outside the corpus have no entry; they weigh nothing downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfVector {
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<Box<str>, f64>,
    /// document count the weights were computed from
    pub doc_num: u64,
}

impl IdfVector {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.idf.iter().map(|(term, &w)| (term.as_ref(), w))
    }
}

/// Weighting scheme used to turn term counts into vectors
pub trait TfIdfEngine {
    /// TF vector of one document
    fn tf_vec(freq: &TermFrequency) -> TermVector;
    /// IDF weight of every term in the corpus
    fn idf_vec(corpus: &Corpus) -> IdfVector;
    /// Element-wise TF x IDF
    fn tfidf_vec(tf: &TermVector, idf: &IdfVector) -> TermVector;
}

/// Textbook weighting
/// - tf = count / total
/// - idf = ln(N / (1 + df))
///
/// The `+1` smoothing gives a negative idf to any term present in every
/// document of a small corpus (N = 1, df = 1 gives ln(1/2)). That value is
/// kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl DefaultTfIdfEngine {
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (1.0 + doc_freq as f64)).ln()
    }
}

impl TfIdfEngine for DefaultTfIdfEngine {
    fn tf_vec(freq: &TermFrequency) -> TermVector {
        freq.tf_vector()
    }

    fn idf_vec(corpus: &Corpus) -> IdfVector {
        let doc_num = corpus.get_doc_num();
        let mut idf: IndexMap<Box<str>, f64> = IndexMap::with_capacity(corpus.vocab_size());
        if doc_num > 0 {
            for (term, doc_freq) in corpus.iter() {
                idf.insert(term.into(), Self::idf_calc(doc_num, doc_freq));
            }
        }
        IdfVector { idf, doc_num }
    }

    fn tfidf_vec(tf: &TermVector, idf: &IdfVector) -> TermVector {
        tf.iter()
            .filter_map(|(term, weight)| idf.get(term).map(|w| (term, weight * w)))
            .collect()
    }
}
