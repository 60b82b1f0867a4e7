pub mod json;
pub mod jsonlines;
pub mod loader;

pub use loader::load_documents;

use serde::{Deserialize, Serialize};

/// Knowledge-base metadata carried along with a document. Retrieval only
/// looks at `topic`, for filtering.
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: String,
    title: String,
    content: String,
    #[serde(flatten)]
    meta: DocMeta,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            meta: DocMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: DocMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.meta.topic = Some(topic.into());
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }
    pub fn get_title(&self) -> &str {
        &self.title
    }
    pub fn get_content(&self) -> &str {
        &self.content
    }
    pub fn get_meta(&self) -> &DocMeta {
        &self.meta
    }
    pub fn get_topic(&self) -> Option<&str> {
        self.meta.topic.as_deref()
    }

    /// Title and body as one text, the unit the vector ranker indexes.
    pub fn get_indexed_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}
