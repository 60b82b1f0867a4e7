pub mod ranker;
pub mod vsm;

pub use ranker::VectorRanker;

use crate::kbcore::DocId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocScore {
    pub docid: DocId,
    pub score: f32,
}
