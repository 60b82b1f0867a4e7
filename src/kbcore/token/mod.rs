pub mod analyzer;
pub mod dictionary;
pub mod stopwords;
pub mod tokenizer;
