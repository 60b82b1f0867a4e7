//! YAML configuration: how to read a knowledge-base export and which
//! search defaults to apply.
//!
//! ```yaml
//! corpus:
//!   file_type: jsonlines
//!   fields:
//!     title: name
//! search:
//!   mode: vector
//!   top_k: 20
//!   tier: full
//! ```
//!
//! Every key is optional.

use crate::kbcore::error::Result;
use crate::kbcore::token::tokenizer::NormalizationTier;
use crate::kbcore::SearchMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CFG_NAME: &str = ".kbsearch.yml";

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub search: SearchConfig,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// One JSON array of entries.
    #[default]
    Json,
    /// One JSON object per line.
    JsonLines,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    pub file_type: FileType,
    pub fields: FieldMap,
}

/// Names of the entry keys that map onto `Document` fields.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct FieldMap {
    pub id: String,
    pub title: String,
    pub content: String,
    pub topic: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        FieldMap {
            id: "id".to_string(),
            title: "title".to_string(),
            content: "content".to_string(),
            topic: "topic".to_string(),
            author: "author".to_string(),
            created_at: "created_at".to_string(),
            updated_at: "updated_at".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub top_k: usize,
    pub tier: NormalizationTier,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            mode: SearchMode::Auto,
            top_k: 10,
            tier: NormalizationTier::Light,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read `path`; a missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("{} not found, using default configuration", path.display());
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_syntax() {
        let cfg_str = "
corpus:
  file_type: jsonlines
  fields:
    title: name
    content: text
search:
  mode: semantic
  top_k: 20
  tier: full
";
        let cfg = Config::from_yaml(cfg_str).unwrap();
        assert_eq!(cfg.corpus.file_type, FileType::JsonLines);
        assert_eq!(cfg.corpus.fields.title, "name");
        assert_eq!(cfg.corpus.fields.content, "text");
        assert_eq!(cfg.corpus.fields.id, "id");
        assert_eq!(cfg.search.mode, SearchMode::Vector);
        assert_eq!(cfg.search.top_k, 20);
        assert_eq!(cfg.search.tier, NormalizationTier::Full);
    }

    #[test]
    fn test_partial_and_empty_yaml() {
        let cfg = Config::from_yaml("search:\n  top_k: 3\n").unwrap();
        assert_eq!(cfg.search.top_k, 3);
        assert_eq!(cfg.search.mode, SearchMode::Auto);
        assert_eq!(cfg.corpus, CorpusConfig::default());
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(Config::from_yaml("search:\n  mode: fuzzy\n").is_err());
        assert!(Config::from_yaml("corpus: [1, 2").is_err());
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CFG_NAME);
        assert_eq!(Config::load(&missing).unwrap(), Config::default());

        let mut file = std::fs::File::create(&missing).unwrap();
        writeln!(file, "search:\n  mode: boolean").unwrap();
        let cfg = Config::load(&missing).unwrap();
        assert_eq!(cfg.search.mode, SearchMode::Boolean);
    }
}
