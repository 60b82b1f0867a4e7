pub mod boolean;

pub use boolean::{BooleanQuery, Operator};

/// Evaluate a boolean `query` against `text`. For many documents, parse once
/// with [`BooleanQuery::parse`] instead.
pub fn matches(text: &str, query: &str) -> bool {
    BooleanQuery::parse(query).matches(text)
}
