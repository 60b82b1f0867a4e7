use crate::kbcore::TermId;
use std::collections::BTreeMap;

// ordered by term id so that sums run in a fixed order
pub type SparseVector = BTreeMap<TermId, f32>;

pub trait SparseVectorOp {
    fn vec_len(&self) -> f32;
    fn vec_set(&mut self, id: TermId, value: f32) -> (TermId, f32);
    fn vec_get(&self, id: TermId) -> f32;
    fn vec_normalize(&mut self);
    fn vec_dot(&self, other: &SparseVector) -> f32;
}

impl SparseVectorOp for SparseVector {
    fn vec_len(&self) -> f32 {
        self.values().map(|v| v * v).sum::<f32>().sqrt()
    }

    fn vec_set(&mut self, id: TermId, value: f32) -> (TermId, f32) {
        self.insert(id, value);
        (id, value)
    }

    fn vec_get(&self, id: TermId) -> f32 {
        self.get(&id).copied().unwrap_or_default()
    }

    fn vec_normalize(&mut self) {
        let length = self.vec_len();
        if length == 0.0 {
            return;
        }
        for value in self.values_mut() {
            *value /= length;
        }
    }

    fn vec_dot(&self, other: &SparseVector) -> f32 {
        let (short, long) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        short
            .iter()
            .filter_map(|(id, v)| long.get(id).map(|w| v * w))
            .sum()
    }
}
