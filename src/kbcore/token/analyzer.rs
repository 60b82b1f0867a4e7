use super::dictionary::Dictionary;
use super::tokenizer::{NormalizationTier, Segmentator};
use crate::kbcore::TermId;

/// Text pipeline plus the vocabulary it produced. One analyzer belongs to
/// exactly one indexed corpus.
#[derive(Debug, Clone)]
pub struct Analyzer {
    dict: Dictionary,
    seg: Segmentator,
}

impl Analyzer {
    pub fn new(tier: NormalizationTier) -> Self {
        Analyzer {
            dict: Dictionary::new(),
            seg: Segmentator::new(tier),
        }
    }

    pub fn get_dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn get_tier(&self) -> NormalizationTier {
        self.seg.get_tier()
    }

    /// Tokenize and grow the vocabulary. Used while indexing.
    pub fn analyze(&mut self, text: &str) -> Vec<TermId> {
        let tokens = self.seg.tokenize(text);
        self.dict.generate_ids(&tokens)
    }

    /// Tokenize against the frozen vocabulary. Used for queries.
    pub fn parse(&self, text: &str) -> (Vec<TermId>, Vec<String>) {
        let tokens = self.seg.tokenize(text);
        self.dict.get_ids(&tokens)
    }

    pub fn get_term_by_id(&self, tid: TermId) -> Option<&str> {
        self.dict.get_term_by_id(tid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer() {
        let mut analyzer = Analyzer::new(NormalizationTier::Light);
        let mut term_ids = analyzer.analyze("Do you quarrel, sir?");
        assert_eq!(term_ids, vec![0, 1, 2, 3]);
        term_ids = analyzer.analyze("Quarrel sir! no, sir!");
        assert_eq!(term_ids, vec![2, 3, 4, 3]);

        let (term_known, unknown_terms) = analyzer.parse("quarrel sir");
        assert_eq!(term_known, vec![2, 3]);
        assert!(unknown_terms.is_empty());

        let (term_known, unknown_terms) = analyzer.parse("quarrel sir Cool");
        assert_eq!(term_known, vec![2, 3]);
        assert_eq!(unknown_terms, vec!["cool"]);
        assert_eq!(analyzer.get_dictionary().get_term_count(), 5);
        assert_eq!(analyzer.get_term_by_id(4), Some("no"));
    }

    #[test]
    fn test_analyzer_full_tier() {
        let mut analyzer = Analyzer::new(NormalizationTier::Full);
        assert_eq!(analyzer.get_tier(), NormalizationTier::Full);
        let ids = analyzer.analyze("Databases are used for storing data");
        assert_eq!(ids.len(), 4);
        let (known, unknown) = analyzer.parse("the stored databases");
        assert_eq!(known, vec![ids[2], ids[0]]);
        assert!(unknown.is_empty());
    }
}
