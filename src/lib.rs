/// This crate scores how similar a newly reported process gap is to gaps
/// reported before, using TF-IDF weighted term vectors and cosine similarity.
pub mod config;
pub mod engine;
pub mod error;
pub mod vectorizer;

/// Similarity Engine
/// The top-level entry point. Given a target gap and the candidate gaps to
/// compare it with, it returns the closest candidates with a percentage score.
///
/// The engine is stateless between calls: tokens, IDF weights and vectors are
/// all rebuilt from the supplied candidates on every call, so concurrent
/// queries over different corpora never interfere.
///
/// `SimilarityEngine<E>` is generic over the weighting scheme `E`
/// (`DefaultTfIdfEngine` by default).
pub use engine::{find_similar, SimilarityEngine};

/// Engine configuration (threshold, result cap, minimum term length)
/// Loadable from `similarity.toml` and `GAP_SIMILARITY_*` environment variables.
pub use config::SimilarityConfig;

/// Error type and result alias
pub use error::{Result, SimilarityError};

/// Input document: gap id plus its searchable text
pub use vectorizer::Document;

/// Sparse term -> weight vector
pub use vectorizer::TermVector;

/// Tokenizer
/// Lower-cases, splits on anything that is not a letter, digit or `_`, and
/// drops very short terms.
pub use vectorizer::tokenizer::{tokenize, Tokenizer};

/// Term Frequency structure
/// Counts term occurrences within one document; base data for TF.
pub use vectorizer::term::TermFrequency;

/// Corpus for IDF
/// Holds the number of documents and, per term, how many documents contain it.
pub use vectorizer::corpus::Corpus;

/// TF-IDF Calculation Engine Trait
/// Implement it to plug a different weighting scheme into `SimilarityEngine<E>`.
/// `DefaultTfIdfEngine` uses `count / total` and `ln(N / (1 + df))`.
pub use vectorizer::tfidf::{DefaultTfIdfEngine, IdfVector, TfIdfEngine};

/// Cosine similarity over sparse term vectors
pub use vectorizer::compare::cosine_similarity;

/// Search Hits and ranked results
/// - `Hits`: scored candidates with threshold, sort and truncate steps
/// - `HitEntry`: one scored candidate
/// - `SimilarityResult`: what callers receive, `{ id, score }`
pub use vectorizer::evaluate::scoring::{HitEntry, Hits, SimilarityResult};
