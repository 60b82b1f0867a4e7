//! Errors surfaced by the retrieval core and its loaders.
//!
//! Malformed queries, empty corpora and queries without known terms are not
//! errors; they degrade to `false` or to an empty result set.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[derive(Error, Debug)]
pub enum RetrievalError {
    /// `search` was called on a ranker that has never been indexed.
    #[error("vector ranker is not indexed, call index() before search()")]
    NotIndexed,

    #[error("invalid search mode: {0}")]
    InvalidMode(String),

    #[error("engine lock poisoned by a panicking writer")]
    LockPoisoned,

    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RetrievalError {
    /// True for caller sequencing bugs rather than bad input.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, RetrievalError::NotIndexed | RetrievalError::LockPoisoned)
    }
}
