/// Parameters for finding documents similar to a piece of text
///
/// The engine selects the interesting terms of `like_text` and builds the
/// actual query. Nothing is computed here.
#[derive(Debug, Clone, PartialEq)]
pub struct MoreLikeThis {
    pub fields: Vec<String>,
    pub like_text: String,
    pub percent_terms_to_match: f32,
    pub min_term_freq: u32,
    pub max_query_terms: u32,
    pub stop_words: Vec<String>,
    pub min_doc_freq: u32,
    pub max_doc_freq: Option<u32>,
    pub min_word_len: u32,
    pub max_word_len: u32,
    pub boost_terms: Option<f32>,
    pub boost: f32,
}


impl MoreLikeThis {
    pub fn new(fields: Vec<String>, like_text: &str) -> MoreLikeThis {
        MoreLikeThis {
            fields: fields,
            like_text: like_text.to_string(),
            percent_terms_to_match: 0.3f32,
            min_term_freq: 2,
            max_query_terms: 25,
            stop_words: Vec::new(),
            min_doc_freq: 5,
            max_doc_freq: None,
            min_word_len: 0,
            max_word_len: 0,
            boost_terms: None,
            boost: 1.0f32,
        }
    }
}


/// Like `MoreLikeThis` but every selected term is matched fuzzily
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyLikeThis {
    pub fields: Vec<String>,
    pub like_text: String,
    pub max_query_terms: u32,
    pub min_similarity: f32,
    pub prefix_length: u32,
    pub ignore_tf: bool,
    pub boost: f32,
}


impl FuzzyLikeThis {
    pub fn new(fields: Vec<String>, like_text: &str) -> FuzzyLikeThis {
        FuzzyLikeThis {
            fields: fields,
            like_text: like_text.to_string(),
            max_query_terms: 25,
            min_similarity: 0.5f32,
            prefix_length: 0,
            ignore_tf: false,
            boost: 1.0f32,
        }
    }
}
