pub mod config;
pub mod doc;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod ranking;
pub mod token;
pub mod utils;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use error::RetrievalError;

pub type TermId = u32;
/// Position of a document in the current corpus snapshot.
pub type DocId = usize;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Boolean filter only, corpus order.
    #[serde(alias = "syntax")]
    Boolean,
    /// TF-IDF cosine ranking only.
    #[serde(alias = "semantic")]
    Vector,
    /// Boolean first, vector ranking when nothing matches.
    #[default]
    #[serde(alias = "combined")]
    Auto,
}

impl FromStr for SearchMode {
    type Err = RetrievalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boolean" | "syntax" => Ok(SearchMode::Boolean),
            "vector" | "semantic" => Ok(SearchMode::Vector),
            "auto" | "combined" => Ok(SearchMode::Auto),
            _ => Err(RetrievalError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Boolean => "boolean",
            SearchMode::Vector => "vector",
            SearchMode::Auto => "auto",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("boolean".parse::<SearchMode>().unwrap(), SearchMode::Boolean);
        assert_eq!("Syntax".parse::<SearchMode>().unwrap(), SearchMode::Boolean);
        assert_eq!("semantic".parse::<SearchMode>().unwrap(), SearchMode::Vector);
        assert_eq!(" AUTO ".parse::<SearchMode>().unwrap(), SearchMode::Auto);
        assert_eq!("combined".parse::<SearchMode>().unwrap(), SearchMode::Auto);
        assert!(matches!(
            "fuzzy".parse::<SearchMode>(),
            Err(RetrievalError::InvalidMode(m)) if m == "fuzzy"
        ));
    }

    #[test]
    fn test_search_mode_default_and_display() {
        assert_eq!(SearchMode::default(), SearchMode::Auto);
        assert_eq!(SearchMode::Vector.to_string(), "vector");
        assert_eq!(SearchMode::Boolean.to_string().parse::<SearchMode>().unwrap(), SearchMode::Boolean);
    }
}
