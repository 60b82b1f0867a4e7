use crate::kbcore::config::CorpusConfig;
use crate::kbcore::doc::json::parse_entry;
use crate::kbcore::doc::Document;
use crate::kbcore::error::Result;
use serde_json::Value;

pub fn parse_jsonlines(source: &str, text: &str, cfg: &CorpusConfig) -> Result<Vec<Document>> {
    let mut docs = vec![];
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(value) => match parse_entry(&value, docs.len(), &cfg.fields) {
                Some(doc) => docs.push(doc),
                None => log::warn!("{}:{}: entry is not an object, skipped", source, n + 1),
            },
            Err(e) => log::warn!("{}:{}: {}", source, n + 1, e),
        }
    }
    Ok(docs)
}
