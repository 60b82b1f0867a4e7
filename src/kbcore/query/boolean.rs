//! Boolean query syntax: quoted phrases, bare words and the keywords
//! `AND`, `OR`, `NOT` (any case).
//!
//! Evaluation is a strict left-to-right fold with no precedence and no
//! parentheses. A run of bare words without a keyword between them is one
//! operand whose words must all be present. Every quoted phrase must be in
//! the text, whatever operators surround it.

use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Operator::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Operator::Or)
        } else if word.eq_ignore_ascii_case("not") {
            Some(Operator::Not)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Word(String),
    Phrase(String),
}

impl Term {
    fn is_in(&self, text_lower: &str) -> bool {
        match self {
            Term::Word(s) | Term::Phrase(s) => text_lower.contains(s.as_str()),
        }
    }
}

/// Terms joined by implicit AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operand {
    terms: Vec<Term>,
}

impl Operand {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    fn is_in(&self, text_lower: &str) -> bool {
        self.terms.iter().all(|t| t.is_in(text_lower))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Operand(Operand),
    Operator(Operator),
}

/// A parsed boolean query, reusable across documents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BooleanQuery {
    // lowercased, each one must be present
    phrases: Vec<String>,
    tokens: Vec<QueryToken>,
}

impl BooleanQuery {
    /// Never fails: an unterminated quote is read as plain text.
    pub fn parse(query: &str) -> Self {
        let mut phrases = vec![];
        let mut terms: Vec<Term> = vec![];
        let mut last = 0;
        for cap in QUOTED.captures_iter(query) {
            let (Some(whole), Some(inner)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            push_words(&query[last..whole.start()], &mut terms);
            let phrase = inner.as_str().to_lowercase();
            phrases.push(phrase.clone());
            terms.push(Term::Phrase(phrase));
            last = whole.end();
        }
        push_words(&query[last..], &mut terms);

        let mut tokens = vec![];
        let mut operand = Operand::default();
        for term in terms {
            let op = match &term {
                Term::Word(w) => Operator::from_keyword(w),
                Term::Phrase(_) => None,
            };
            match op {
                Some(op) => {
                    if !operand.terms.is_empty() {
                        tokens.push(QueryToken::Operand(std::mem::take(&mut operand)));
                    }
                    tokens.push(QueryToken::Operator(op));
                }
                None => operand.terms.push(term),
            }
        }
        if !operand.terms.is_empty() {
            tokens.push(QueryToken::Operand(operand));
        }
        BooleanQuery { phrases, tokens }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn tokens(&self) -> &[QueryToken] {
        &self.tokens
    }

    /// True when the query has no operand and no phrase, i.e. matches everything.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && !self.tokens.iter().any(|t| matches!(t, QueryToken::Operand(_)))
    }

    pub fn matches(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        if !self.phrases.iter().all(|p| text_lower.contains(p.as_str())) {
            return false;
        }
        let mut acc: Option<bool> = None;
        let mut pending: Option<Operator> = None;
        for token in &self.tokens {
            match token {
                // consecutive keywords: the last one wins
                QueryToken::Operator(op) => pending = Some(*op),
                QueryToken::Operand(operand) => {
                    let value = operand.is_in(&text_lower);
                    acc = Some(match (acc, pending.take()) {
                        (None, Some(Operator::Not)) => !value,
                        (None, _) => value,
                        (Some(a), Some(Operator::Or)) => a || value,
                        (Some(a), Some(Operator::Not)) => a && !value,
                        (Some(a), _) => a && value,
                    });
                }
            }
        }
        acc.unwrap_or(true)
    }
}

// Bare words of an unquoted segment; a stray quote mark is dropped.
fn push_words(segment: &str, terms: &mut Vec<Term>) {
    for word in segment.split(|c: char| c.is_whitespace() || c == '"') {
        if !word.is_empty() {
            terms.push(Term::Word(word.to_lowercase()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    fn matches(text: &str, query: &str) -> bool {
        BooleanQuery::parse(query).matches(text)
    }

    #[test]
    fn test_fox_scenario() {
        assert!(matches(FOX, "quick AND fox"));
        assert!(!matches(FOX, "quick NOT dog"));
        assert!(matches(FOX, "\"quick brown\""));
        assert!(matches(FOX, "cat OR fox"));
        assert!(matches(FOX, "quick NOT cat"));
    }

    #[test]
    fn test_implicit_and_between_words() {
        assert!(matches(FOX, "quick brown"));
        assert!(matches(FOX, "lazy quick"));
        assert!(!matches(FOX, "quick cat"));
    }

    #[test]
    fn test_words_match_as_substrings() {
        assert!(matches(FOX, "jump"));
        assert!(matches(FOX, "QUICK"));
        assert!(matches(FOX, "dog."));
    }

    #[test]
    fn test_quoted_phrases() {
        assert!(matches(FOX, "\"QUICK Brown\""));
        assert!(!matches(FOX, "\"brown quick\""));
        assert!(matches(FOX, "\"quick brown\" AND dog"));
        assert!(matches(FOX, "\"quick brown\" OR cat"));
        assert!(matches(FOX, "fox AND \"lazy dog\""));
        assert!(matches(FOX, "\"quick brown\" AND \"lazy dog\""));
        assert!(matches(FOX, "\"quick brown\" jumps"));
        assert!(!matches(FOX, "\"quick brown\" cat"));
    }

    #[test]
    fn test_missing_phrase_vetoes_everything() {
        assert!(!matches(FOX, "fox OR \"lazy cat\""));
        assert!(!matches(FOX, "\"quick brown\" OR \"lazy cat\""));
        assert!(!matches(FOX, "\"lazy cat\" OR fox"));
    }

    #[test]
    fn test_operators_are_case_insensitive() {
        assert!(matches(FOX, "quick and fox"));
        assert!(matches(FOX, "cat Or fox"));
        assert!(!matches(FOX, "quick not dog"));
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        // (cat OR fox) AND dog
        assert!(matches(FOX, "cat OR fox AND dog"));
        // (fox AND cat) OR dog
        assert!(matches(FOX, "fox AND cat OR dog"));
        // (fox OR cat) NOT lazy
        assert!(!matches(FOX, "fox OR cat NOT lazy"));
        // (fox NOT lazy) OR quick
        assert!(matches(FOX, "fox NOT lazy OR quick"));
    }

    #[test]
    fn test_binary_operator_semantics() {
        let words = ["quick", "cat", "dog", "horse"];
        for a in words {
            for b in words {
                let (ma, mb) = (matches(FOX, a), matches(FOX, b));
                assert_eq!(matches(FOX, &format!("{} AND {}", a, b)), ma && mb);
                assert_eq!(matches(FOX, &format!("{} OR {}", a, b)), ma || mb);
                assert_eq!(matches(FOX, &format!("{} NOT {}", a, b)), ma && !mb);
            }
        }
    }

    #[test]
    fn test_empty_queries_match_everything() {
        assert!(matches(FOX, ""));
        assert!(matches("", ""));
        assert!(matches(FOX, "   "));
        assert!(matches(FOX, "\"\""));
        assert!(BooleanQuery::parse("  ").is_empty());
        assert!(!BooleanQuery::parse("\"x\"").is_empty());
    }

    #[test]
    fn test_dangling_operators() {
        assert!(matches(FOX, "AND fox"));
        assert!(!matches(FOX, "OR cat"));
        assert!(matches(FOX, "fox AND"));
        assert!(matches(FOX, "NOT cat"));
        assert!(!matches(FOX, "NOT dog"));
        assert!(!matches(FOX, "cat OR AND fox"));
        assert!(matches(FOX, "cat AND OR fox"));
        assert!(matches(FOX, "AND"));
    }

    #[test]
    fn test_unbalanced_quote_is_plain_text() {
        assert!(matches(FOX, "\"quick brown"));
        assert!(matches(FOX, "\"quick\" brown \"fox"));
        assert!(!matches(FOX, "cat\""));
    }

    #[test]
    fn test_parse_structure() {
        let q = BooleanQuery::parse("\"Lazy Dog\" quick OR cat");
        assert_eq!(q.phrases(), &["lazy dog".to_string()]);
        assert_eq!(q.tokens().len(), 3);
        match &q.tokens()[0] {
            QueryToken::Operand(op) => assert_eq!(
                op.terms(),
                &[Term::Phrase("lazy dog".to_string()), Term::Word("quick".to_string())]
            ),
            other => panic!("unexpected token {:?}", other),
        }
        assert_eq!(q.tokens()[1], QueryToken::Operator(Operator::Or));
    }

    #[test]
    fn test_phrase_keywords_are_literal() {
        assert!(!matches(FOX, "\"fox AND cat\""));
        assert!(matches("cats and dogs", "\"cats and dogs\""));
    }
}
