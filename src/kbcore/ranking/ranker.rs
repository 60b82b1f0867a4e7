use crate::kbcore::doc::Document;
use crate::kbcore::error::{Result, RetrievalError};
use crate::kbcore::index::{IndexStats, TermSpace};
use crate::kbcore::ranking::vsm::VectorSpaceModel;
use crate::kbcore::ranking::DocScore;
use crate::kbcore::token::analyzer::Analyzer;
use crate::kbcore::token::tokenizer::NormalizationTier;
use crate::kbcore::TermId;

// The vocabulary and the matrix come from the same corpus and are only ever
// replaced together.
#[derive(Debug, Clone)]
struct Indexed {
    analyzer: Analyzer,
    space: TermSpace,
}

/// TF-IDF cosine ranker over one document snapshot.
///
/// `index` takes `&mut self` and fully replaces prior state; `search` is
/// read-only and may run concurrently against a stable ranker.
#[derive(Debug, Clone)]
pub struct VectorRanker {
    tier: NormalizationTier,
    indexed: Option<Indexed>,
}

impl VectorRanker {
    pub fn new(tier: NormalizationTier) -> Self {
        VectorRanker {
            tier,
            indexed: None,
        }
    }

    pub fn get_tier(&self) -> NormalizationTier {
        self.tier
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed.is_some()
    }

    /// Build the vector space over `title + content` of every document.
    /// Document `i` of the slice becomes `DocScore::docid == i`.
    pub fn index(&mut self, documents: &[Document]) {
        let mut analyzer = Analyzer::new(self.tier);
        let docs_terms: Vec<Vec<TermId>> = documents
            .iter()
            .map(|doc| analyzer.analyze(&doc.get_indexed_text()))
            .collect();
        let space = TermSpace::build(&docs_terms, analyzer.get_dictionary().get_term_count());
        log::info!(
            "vector space built: {} documents, {} terms",
            space.get_document_count(),
            space.get_vocabulary_size()
        );
        self.indexed = Some(Indexed { analyzer, space });
    }

    /// At most `top_k` documents with positive similarity, best first.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<DocScore>> {
        let mut scores = self.rank(query)?;
        scores.truncate(top_k);
        Ok(scores)
    }

    /// Every document with positive similarity, best first.
    pub fn rank(&self, query: &str) -> Result<Vec<DocScore>> {
        let indexed = self.indexed.as_ref().ok_or(RetrievalError::NotIndexed)?;
        let (term_ids, unknown_terms) = indexed.analyzer.parse(query);
        if !unknown_terms.is_empty() {
            log::debug!("query terms outside vocabulary: {:?}", unknown_terms);
        }
        Ok(indexed.space.rank_vsm(&term_ids))
    }

    pub fn stats(&self, top_terms: usize) -> Result<IndexStats> {
        let indexed = self.indexed.as_ref().ok_or(RetrievalError::NotIndexed)?;
        Ok(indexed.space.stats(indexed.analyzer.get_dictionary(), top_terms))
    }
}

impl Default for VectorRanker {
    fn default() -> Self {
        VectorRanker::new(NormalizationTier::default())
    }
}
