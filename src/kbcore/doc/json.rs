use crate::kbcore::config::{CorpusConfig, FieldMap};
use crate::kbcore::doc::{DocMeta, Document};
use crate::kbcore::error::{Result, RetrievalError};
use serde_json::Value;

/// A knowledge-base export: one JSON array of entry objects.
pub fn parse_json(source: &str, text: &str, cfg: &CorpusConfig) -> Result<Vec<Document>> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        _ => {
            return Err(RetrievalError::InvalidCorpus(format!(
                "{}: expected a JSON array of entries",
                source
            )))
        }
    };
    let mut docs = vec![];
    for (n, entry) in entries.iter().enumerate() {
        match parse_entry(entry, docs.len(), &cfg.fields) {
            Some(doc) => docs.push(doc),
            None => log::warn!("{}[{}]: entry is not an object, skipped", source, n),
        }
    }
    Ok(docs)
}

/// Map one entry object onto a `Document`. Missing title or content read as
/// empty text; a missing id falls back to `position` in the loaded corpus.
pub fn parse_entry(entry: &Value, position: usize, fields: &FieldMap) -> Option<Document> {
    let object = entry.as_object()?;
    let text_field = |name: &str| -> Option<String> {
        match object.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    };
    let id = text_field(&fields.id).unwrap_or_else(|| position.to_string());
    let title = text_field(&fields.title).unwrap_or_default();
    let content = text_field(&fields.content).unwrap_or_default();
    let meta = DocMeta {
        topic: text_field(&fields.topic),
        author: text_field(&fields.author),
        created_at: text_field(&fields.created_at),
        updated_at: text_field(&fields.updated_at),
    };
    Some(Document::new(id, title, content).with_meta(meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let text = r#"[
            {"id": "a1", "title": "Fox", "content": "The quick brown fox.", "topic": "animals", "author": "system"},
            {"title": "Untitled", "content": "No id here"},
            42,
            {"id": 7, "title": "Numbers", "created_at": "2025-06-12T10:00:00"}
        ]"#;
        let docs = parse_json("kb.json", text, &CorpusConfig::default()).unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].get_id(), "a1");
        assert_eq!(docs[0].get_topic(), Some("animals"));
        assert_eq!(docs[0].get_meta().author.as_deref(), Some("system"));
        assert_eq!(docs[1].get_id(), "1");
        assert_eq!(docs[2].get_id(), "7");
        assert_eq!(docs[2].get_content(), "");
        assert_eq!(docs[2].get_meta().created_at.as_deref(), Some("2025-06-12T10:00:00"));
    }

    #[test]
    fn test_custom_fields() {
        let mut cfg = CorpusConfig::default();
        cfg.fields.title = "name".to_string();
        cfg.fields.content = "body".to_string();
        let text = r#"[{"name": "Python", "body": "A programming language", "title": "ignored"}]"#;
        let docs = parse_json("kb.json", text, &cfg).unwrap();
        assert_eq!(docs[0].get_title(), "Python");
        assert_eq!(docs[0].get_content(), "A programming language");
    }

    #[test]
    fn test_not_an_array() {
        let res = parse_json("kb.json", r#"{"title": "x"}"#, &CorpusConfig::default());
        assert!(matches!(res, Err(RetrievalError::InvalidCorpus(_))));
        let res = parse_json("kb.json", "[{", &CorpusConfig::default());
        assert!(matches!(res, Err(RetrievalError::Json(_))));
    }
}
