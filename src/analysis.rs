//! Text analysis used when a query needs terms out of free text
//!
//! Real analysis chains live with the index. The compiler only needs to turn
//! a string into a list of terms for the "field" query, so it takes any
//! `TextAnalyzer` and falls back to splitting on whitespace.

use std::fmt::Debug;


pub trait TextAnalyzer: Debug + Send + Sync {
    fn analyze(&self, field_name: &str, text: &str) -> Vec<String>;
}


/// Splits on whitespace and lowercases each token
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceAnalyzer;


impl TextAnalyzer for WhitespaceAnalyzer {
    fn analyze(&self, _field_name: &str, text: &str) -> Vec<String> {
        text.split_whitespace().map(|token| token.to_lowercase()).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::{TextAnalyzer, WhitespaceAnalyzer};

    #[test]
    fn test_whitespace_analyzer() {
        let tokens = WhitespaceAnalyzer.analyze("name.first", "12-54-23  Else\tHERE");

        assert_eq!(tokens, vec!["12-54-23", "else", "here"]);
    }

    #[test]
    fn test_blank_text() {
        let tokens = WhitespaceAnalyzer.analyze("name.first", "   ");

        assert!(tokens.is_empty());
    }
}
