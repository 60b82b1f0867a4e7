use crate::kbcore::TermId;
use std::collections::HashMap;

/// Vocabulary of one indexed corpus. Ids are dense and start at 0.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    term_ids: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn add(&mut self, word: &str) -> TermId {
        if let Some(&term_id) = self.term_ids.get(word) {
            return term_id;
        }
        let term_id = self.terms.len() as TermId;
        self.term_ids.insert(word.to_owned(), term_id);
        self.terms.push(word.to_owned());
        term_id
    }

    pub fn get(&self, word: &str) -> Option<TermId> {
        self.term_ids.get(word).copied()
    }

    pub fn get_term_by_id(&self, tid: TermId) -> Option<&str> {
        self.terms.get(tid as usize).map(String::as_str)
    }

    pub fn generate_ids<S: AsRef<str>>(&mut self, tokens: &[S]) -> Vec<TermId> {
        tokens.iter().map(|t| self.add(t.as_ref())).collect()
    }

    /// Split `tokens` into known term ids and the words the corpus never saw.
    pub fn get_ids<S: AsRef<str>>(&self, tokens: &[S]) -> (Vec<TermId>, Vec<String>) {
        let mut known = vec![];
        let mut unknown = vec![];
        for token in tokens {
            match self.get(token.as_ref()) {
                Some(tid) => known.push(tid),
                None => unknown.push(token.as_ref().to_owned()),
            }
        }
        (known, unknown)
    }

    pub fn get_term_count(&self) -> usize {
        self.terms.len()
    }
}
