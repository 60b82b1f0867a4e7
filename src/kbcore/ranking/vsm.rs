use crate::kbcore::index::TermSpace;
use crate::kbcore::ranking::DocScore;
use crate::kbcore::utils::sparse_vector::SparseVectorOp;
use crate::kbcore::TermId;

pub trait VectorSpaceModel {
    /// Every document with positive cosine similarity, best first.
    fn rank_vsm(&self, term_ids: &[TermId]) -> Vec<DocScore>;
}

impl VectorSpaceModel for TermSpace {
    fn rank_vsm(&self, term_ids: &[TermId]) -> Vec<DocScore> {
        let mut scores = vec![];
        if term_ids.is_empty() {
            return scores;
        }
        let query_tfidf = self.get_query_tfidf_vector(term_ids);
        if query_tfidf.is_empty() {
            return scores;
        }
        for (doc_id, doc_tfidf) in self.doc_vectors() {
            // both sides are unit length, clamp rounding drift above 1
            let similarity = query_tfidf.vec_dot(doc_tfidf).min(1.0);
            if similarity > 0.0 {
                scores.push(DocScore {
                    docid: doc_id,
                    score: similarity,
                });
            }
        }
        // stable sort, ties stay in corpus order
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        scores
    }
}
