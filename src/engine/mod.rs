use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    config::SimilarityConfig,
    error::{Result, SimilarityError},
    vectorizer::{
        compare::cosine_similarity,
        corpus::Corpus,
        evaluate::scoring::{HitEntry, Hits, SimilarityResult},
        term::TermFrequency,
        tfidf::{DefaultTfIdfEngine, IdfVector, TfIdfEngine},
        tokenizer::Tokenizer,
        Document, TermVector,
    },
};

/// Finds previously submitted gaps that read like a target gap.
///
/// Holds configuration only. Every call tokenizes the candidates, builds the
/// IDF table from them, scores each candidate against the target and ranks
/// the result; nothing is carried over to the next call.
///
/// `E` is the weighting scheme, `DefaultTfIdfEngine` unless overridden.
#[derive(Debug, Clone)]
pub struct SimilarityEngine<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine + Send + Sync,
{
    config: SimilarityConfig,
    tokenizer: Tokenizer,
    _marker: PhantomData<E>,
}

impl<E> SimilarityEngine<E>
where
    E: TfIdfEngine + Send + Sync,
{
    /// Create an engine, validating the configuration first
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.min_term_len),
            config,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Rank candidates using the configured threshold
    pub fn find_similar(&self, target: &Document, candidates: &[Document]) -> Result<Vec<SimilarityResult>> {
        self.find_similar_with_threshold(target, candidates, self.config.threshold)
    }

    /// Rank candidates against the target
    ///
    /// `candidates` must not contain the target itself. Returns at most
    /// `max_results` entries, highest score first, each scoring at least
    /// `threshold * 100`.
    pub fn find_similar_with_threshold(
        &self,
        target: &Document,
        candidates: &[Document],
        threshold: f64,
    ) -> Result<Vec<SimilarityResult>> {
        if !threshold.is_finite() {
            return Err(SimilarityError::InvalidThreshold(threshold));
        }
        debug!(
            gap = target.id,
            candidates = candidates.len(),
            threshold,
            "finding similar gaps"
        );

        let mut hits = self.score_candidates(target, candidates);
        let scored = hits.len();
        hits.retain_threshold(threshold)
            .sort_by_score_desc()
            .truncate(self.config.max_results);

        debug!(gap = target.id, scored, returned = hits.len(), "similar gaps ranked");
        Ok(hits.into_results())
    }

    /// Score every candidate against the target, in corpus order, without
    /// filtering or sorting
    pub fn score_candidates(&self, target: &Document, candidates: &[Document]) -> Hits {
        if candidates.is_empty() {
            return Hits::default();
        }
        let candidate_terms: Vec<Vec<String>> = candidates
            .par_iter()
            .map(|doc| self.tokenizer.tokenize(&doc.text))
            .collect();
        let idf = E::idf_vec(&Corpus::from_documents(&candidate_terms));
        let target_vec = self.vectorize(&self.tokenizer.tokenize(&target.text), &idf);

        let list = candidates
            .par_iter()
            .zip(candidate_terms.par_iter())
            .map(|(doc, terms)| {
                let similarity = cosine_similarity(&target_vec, &self.vectorize(terms, &idf));
                trace!(gap = target.id, candidate = doc.id, similarity, "scored");
                HitEntry::new(doc.id, similarity)
            })
            .collect();
        Hits::new(list)
    }

    /// Raw cosine similarity of two documents, weighted by the IDF of `corpus`
    pub fn score_pair(&self, a: &Document, b: &Document, corpus: &[Document]) -> f64 {
        let corpus_terms: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| self.tokenizer.tokenize(&doc.text))
            .collect();
        let idf = E::idf_vec(&Corpus::from_documents(&corpus_terms));
        let a_vec = self.vectorize(&self.tokenizer.tokenize(&a.text), &idf);
        let b_vec = self.vectorize(&self.tokenizer.tokenize(&b.text), &idf);
        cosine_similarity(&a_vec, &b_vec)
    }

    fn vectorize(&self, terms: &[String], idf: &IdfVector) -> TermVector {
        let freq = TermFrequency::from_terms(terms);
        E::tfidf_vec(&E::tf_vec(&freq), idf)
    }
}

impl Default for SimilarityEngine<DefaultTfIdfEngine> {
    fn default() -> Self {
        let config = SimilarityConfig::default();
        Self {
            tokenizer: Tokenizer::new(config.min_term_len),
            config,
            _marker: PhantomData,
        }
    }
}

/// Rank `candidates` by similarity to `target` with the default engine
///
/// `threshold` is a fraction (0.6 keeps candidates scoring 60 or more).
pub fn find_similar(target: &Document, candidates: &[Document], threshold: f64) -> Result<Vec<SimilarityResult>> {
    SimilarityEngine::<DefaultTfIdfEngine>::default().find_similar_with_threshold(target, candidates, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THRESHOLD;

    fn docs(texts: &[&str]) -> Vec<Document> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document::new(i as u64 + 1, *text))
            .collect()
    }

    #[test]
    fn empty_corpus_returns_nothing() {
        let target = Document::new(0, "refund email missing");
        for threshold in [0.0, 0.6, 1.0, -5.0] {
            assert!(find_similar(&target, &[], threshold).unwrap().is_empty());
        }
    }

    #[test]
    fn rejects_non_finite_threshold() {
        let target = Document::new(0, "refund email missing");
        let candidates = docs(&["refund email missing"]);
        assert_eq!(
            find_similar(&target, &candidates, f64::INFINITY),
            Err(SimilarityError::InvalidThreshold(f64::INFINITY))
        );
        assert!(matches!(
            find_similar(&target, &candidates, f64::NAN),
            Err(SimilarityError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn engine_rejects_invalid_config() {
        let config = SimilarityConfig { max_results: 0, ..SimilarityConfig::default() };
        assert!(SimilarityEngine::<DefaultTfIdfEngine>::new(config).is_err());
    }

    #[test]
    fn empty_target_scores_zero() {
        let target = Document::new(0, "?? to be");
        let candidates = docs(&["refund email", "login error", "invoice duplicate"]);
        let hits = SimilarityEngine::<DefaultTfIdfEngine>::default().score_candidates(&target, &candidates);
        assert_eq!(hits.len(), 3);
        assert!(hits.list.iter().all(|h| h.similarity == 0.0 && h.percentage == 0));
    }

    #[test]
    fn empty_candidate_scores_zero() {
        let target = Document::new(0, "refund email missing");
        let candidates = docs(&["", "refund email", "login error", "invoice duplicate"]);
        let hits = SimilarityEngine::<DefaultTfIdfEngine>::default().score_candidates(&target, &candidates);
        assert_eq!(hits.list[0].similarity, 0.0);
    }

    #[test]
    fn shared_rare_terms_rank_first() {
        let candidates = docs(&[
            "Refund email confirmation missing for customers",
            "Login page throws error on submit",
            "Warehouse pallet count mismatch",
            "Invoice totals rounded incorrectly",
            "Password reset link expired",
        ]);
        let target = Document::new(99, "Refund confirmation email not sent to customer");
        let results = find_similar(&target, &candidates, 0.1).unwrap();
        assert_eq!(results.first().map(|r| r.id), Some(1));
        assert!(results.iter().all(|r| r.score >= 10 && r.score <= 100));
    }

    #[test]
    fn configured_threshold_and_cap_apply() {
        let candidates = docs(&[
            "alpha", "alpha", "alpha", "alpha", "beta", "gamma", "delta", "epsilon",
        ]);
        let target = Document::new(0, "alpha");
        let config = SimilarityConfig { max_results: 2, ..SimilarityConfig::default() };
        let engine = SimilarityEngine::<DefaultTfIdfEngine>::new(config).unwrap();
        assert_eq!(engine.config().threshold, DEFAULT_THRESHOLD);
        let results = engine.find_similar(&target, &candidates).unwrap();
        assert_eq!(
            results,
            vec![
                SimilarityResult { id: 1, score: 100 },
                SimilarityResult { id: 2, score: 100 },
            ]
        );
    }

    #[test]
    fn score_pair_is_symmetric() {
        let corpus = docs(&[
            "refund email missing",
            "refund amount wrong",
            "login error on submit",
            "email bounce for customers",
        ]);
        let a = Document::new(10, "refund email not sent to customers");
        let b = Document::new(11, "customers report missing refund email");
        let engine = SimilarityEngine::<DefaultTfIdfEngine>::default();
        assert_eq!(engine.score_pair(&a, &b, &corpus), engine.score_pair(&b, &a, &corpus));
    }
}
