use crate::kbcore::config::SearchConfig;
use crate::kbcore::doc::Document;
use crate::kbcore::error::{Result, RetrievalError};
use crate::kbcore::index::IndexStats;
use crate::kbcore::query::BooleanQuery;
use crate::kbcore::ranking::VectorRanker;
use crate::kbcore::token::tokenizer::NormalizationTier;
use crate::kbcore::{DocId, SearchMode};
use serde::Serialize;
use std::sync::{Arc, RwLock};

pub const DEFAULT_TOP_K: usize = 10;
const STATS_TOP_TERMS: usize = 10;

/// One result document. `score` is set only for hits that come from the
/// vector ranker; boolean hits are unranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub document: Document,
    #[serde(rename = "relevance_score", skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub mode: SearchMode,
    /// Vector results only; boolean mode returns every match.
    pub top_k: usize,
    /// Restrict the search to documents of this topic.
    pub topic: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            mode: SearchMode::default(),
            top_k: DEFAULT_TOP_K,
            topic: None,
        }
    }

    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn topic(mut self, topic: Option<String>) -> Self {
        self.topic = topic;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub document_count: usize,
    pub index: IndexStats,
}

/// Search orchestrator over one in-memory document snapshot.
///
/// The corpus and the vector space built from it are replaced together by
/// [`Engine::reindex`], so a ranked doc id always points into the corpus it
/// was computed from.
#[derive(Debug, Clone)]
pub struct Engine {
    documents: Vec<Document>,
    ranker: VectorRanker,
}

impl Engine {
    /// An engine with no snapshot yet. Vector searches fail with
    /// `NotIndexed` until the first `reindex`.
    pub fn new(tier: NormalizationTier) -> Self {
        Engine {
            documents: vec![],
            ranker: VectorRanker::new(tier),
        }
    }

    pub fn from_config(cfg: &SearchConfig) -> Self {
        Self::new(cfg.tier)
    }

    pub fn with_documents(tier: NormalizationTier, documents: Vec<Document>) -> Self {
        let mut engine = Self::new(tier);
        engine.reindex(documents);
        engine
    }

    /// Replace the snapshot. The only way the engine learns about changes.
    pub fn reindex(&mut self, documents: Vec<Document>) {
        self.ranker.index(&documents);
        self.documents = documents;
    }

    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_indexed(&self) -> bool {
        self.ranker.is_indexed()
    }

    pub fn document(&self, idx: DocId) -> Option<&Document> {
        self.documents.get(idx)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn search(&self, query: &str, mode: SearchMode, top_k: usize) -> Result<Vec<SearchHit>> {
        self.execute(&SearchRequest::new(query).mode(mode).top_k(top_k))
    }

    pub fn execute(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let topic = request.topic.as_deref();
        let hits = match request.mode {
            SearchMode::Boolean => self.search_boolean(&request.query, topic),
            SearchMode::Vector => self.search_vector(&request.query, request.top_k, topic)?,
            SearchMode::Auto => {
                let hits = self.search_boolean(&request.query, topic);
                if hits.is_empty() {
                    log::debug!("no boolean match for {:?}, ranking by vector", request.query);
                    self.search_vector(&request.query, request.top_k, topic)?
                } else {
                    hits
                }
            }
        };
        log::debug!("{} search {:?}: {} hits", request.mode, request.query, hits.len());
        Ok(hits)
    }

    // Title and content are matched independently: a hit needs the whole
    // query to hold on one of them.
    fn search_boolean(&self, query: &str, topic: Option<&str>) -> Vec<SearchHit> {
        let parsed = BooleanQuery::parse(query);
        self.documents
            .iter()
            .filter(|doc| topic_matches(doc, topic))
            .filter(|doc| parsed.matches(doc.get_title()) || parsed.matches(doc.get_content()))
            .map(|doc| SearchHit {
                document: doc.clone(),
                score: None,
            })
            .collect()
    }

    fn search_vector(&self, query: &str, top_k: usize, topic: Option<&str>) -> Result<Vec<SearchHit>> {
        // with a filter, rank everything so filtering happens before truncation
        let scores = match topic {
            None => self.ranker.search(query, top_k)?,
            Some(_) => self.ranker.rank(query)?,
        };
        Ok(scores
            .into_iter()
            .filter_map(|ds| self.documents.get(ds.docid).map(|doc| (doc, ds.score)))
            .filter(|(doc, _)| topic_matches(doc, topic))
            .take(top_k)
            .map(|(doc, score)| SearchHit {
                document: doc.clone(),
                score: Some(score),
            })
            .collect())
    }

    pub fn stats(&self) -> Result<Stats> {
        Ok(Stats {
            document_count: self.documents.len(),
            index: self.ranker.stats(STATS_TOP_TERMS)?,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(NormalizationTier::default())
    }
}

fn topic_matches(doc: &Document, topic: Option<&str>) -> bool {
    topic.map_or(true, |t| doc.get_topic() == Some(t))
}

/// Engine handle shared between request handlers. Construct once at startup
/// and clone into each handler; `reindex` waits for in-flight searches and
/// every search started after it returns sees the new snapshot.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        SharedEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn reindex(&self, documents: Vec<Document>) -> Result<()> {
        let mut engine = self.inner.write().map_err(|_| RetrievalError::LockPoisoned)?;
        engine.reindex(documents);
        Ok(())
    }

    pub fn execute(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let engine = self.inner.read().map_err(|_| RetrievalError::LockPoisoned)?;
        engine.execute(request)
    }

    pub fn search(&self, query: &str, mode: SearchMode, top_k: usize) -> Result<Vec<SearchHit>> {
        self.execute(&SearchRequest::new(query).mode(mode).top_k(top_k))
    }

    pub fn doc_count(&self) -> Result<usize> {
        let engine = self.inner.read().map_err(|_| RetrievalError::LockPoisoned)?;
        Ok(engine.doc_count())
    }

    pub fn stats(&self) -> Result<Stats> {
        let engine = self.inner.read().map_err(|_| RetrievalError::LockPoisoned)?;
        engine.stats()
    }
}
