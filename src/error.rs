use thiserror::Error;

/// Errors raised by the similarity engine.
///
/// Only caller contract violations end up here; any well-formed input set
/// (empty texts, an empty corpus, a single-document corpus) yields a result.
#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("gap {id} has neither a title nor a description")]
    MissingText { id: u64 },

    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
