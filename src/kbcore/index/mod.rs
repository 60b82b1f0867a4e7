use crate::kbcore::token::dictionary::Dictionary;
use crate::kbcore::utils::sparse_vector::{SparseVector, SparseVectorOp};
use crate::kbcore::{DocId, TermId};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

/// TF-IDF weighted term-document matrix of one corpus snapshot.
///
/// Built once from the token streams of every document and never mutated
/// afterwards; reindexing builds a new one.
#[derive(Debug, Default, Clone)]
pub struct TermSpace {
    // total number of documents
    document_count: usize,
    // number of documents containing the term, indexed by term id
    document_frequency: Vec<u32>,
    // smoothed inverse document frequency, indexed by term id
    idf: Vec<f32>,
    // tokens per document
    document_length: Vec<u32>,
    // L2 normalized TF-IDF vector per document, indexed by doc id
    tf_idf_matrix: Vec<SparseVector>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub average_document_length: f32,
    // (term, document frequency), most frequent first
    pub top_terms: Vec<(String, u32)>,
}

impl TermSpace {
    /// `docs_terms[d]` holds the term ids of document `d` in token order;
    /// every id must be below `vocabulary_size`.
    pub fn build(docs_terms: &[Vec<TermId>], vocabulary_size: usize) -> Self {
        let document_count = docs_terms.len();
        let mut document_frequency = vec![0u32; vocabulary_size];
        for term_ids in docs_terms {
            let unique: HashSet<&TermId> = term_ids.iter().collect();
            for &tid in unique {
                document_frequency[tid as usize] += 1;
            }
        }
        // ln((1 + N) / (1 + df)) + 1
        let n = document_count as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let mut space = TermSpace {
            document_count,
            document_frequency,
            idf,
            document_length: docs_terms.iter().map(|t| t.len() as u32).collect(),
            tf_idf_matrix: Vec::with_capacity(document_count),
        };
        for term_ids in docs_terms {
            let vector = space.weigh(term_ids);
            space.tf_idf_matrix.push(vector);
        }
        space
    }

    /// Normalized TF-IDF vector of a query. Ids outside the vocabulary are ignored.
    pub fn get_query_tfidf_vector(&self, term_ids: &[TermId]) -> SparseVector {
        self.weigh(term_ids)
    }

    fn weigh(&self, term_ids: &[TermId]) -> SparseVector {
        let mut term_freq: BTreeMap<TermId, u32> = BTreeMap::new();
        for &tid in term_ids {
            if (tid as usize) < self.idf.len() {
                *term_freq.entry(tid).or_insert(0) += 1;
            }
        }
        let mut vector = SparseVector::new();
        for (tid, freq) in term_freq {
            vector.vec_set(tid, freq as f32 * self.idf[tid as usize]);
        }
        vector.vec_normalize();
        vector
    }

    pub fn get_doc_tfidf_vector(&self, doc: DocId) -> Option<&SparseVector> {
        self.tf_idf_matrix.get(doc)
    }

    pub fn doc_vectors(&self) -> impl Iterator<Item = (DocId, &SparseVector)> {
        self.tf_idf_matrix.iter().enumerate()
    }

    pub fn get_document_count(&self) -> usize {
        self.document_count
    }

    pub fn get_vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn get_document_frequency(&self, term: TermId) -> Option<u32> {
        self.document_frequency.get(term as usize).copied()
    }

    pub fn get_idf(&self, term: TermId) -> Option<f32> {
        self.idf.get(term as usize).copied()
    }

    pub fn get_document_length(&self, doc: DocId) -> Option<u32> {
        self.document_length.get(doc).copied()
    }

    pub fn get_average_document_length(&self) -> f32 {
        if self.document_count == 0 {
            return 0.0;
        }
        let total: u64 = self.document_length.iter().map(|&l| l as u64).sum();
        total as f32 / self.document_count as f32
    }

    pub fn stats(&self, dict: &Dictionary, top: usize) -> IndexStats {
        let mut term_freq: Vec<(String, u32)> = self
            .document_frequency
            .iter()
            .enumerate()
            .filter_map(|(tid, &df)| {
                dict.get_term_by_id(tid as TermId)
                    .map(|term| (term.to_owned(), df))
            })
            .collect();
        // stable: equal frequencies keep vocabulary order
        term_freq.sort_by_key(|itm| Reverse(itm.1));
        term_freq.truncate(top);
        IndexStats {
            document_count: self.document_count,
            vocabulary_size: self.get_vocabulary_size(),
            average_document_length: self.get_average_document_length(),
            top_terms: term_freq,
        }
    }
}
