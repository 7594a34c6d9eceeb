#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Or,
    And,
}


/// How the per-field queries of a multi-field query string are combined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombineMode {
    DisMax {
        tie_breaker: f32,
    },
    BooleanOr,
}


/// A Lucene-syntax query string, searched over one or more fields
///
/// The raw text is handed to the engine untouched. Field order is the order
/// fields were given in.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryString {
    pub query: String,
    pub fields: Vec<(String, f32)>,
    pub phrase_slop: u32,
    pub combine: CombineMode,
    pub default_operator: Operator,
    pub analyzer: Option<String>,
    pub allow_leading_wildcard: bool,
    pub lowercase_expanded_terms: bool,
    pub enable_position_increments: bool,
    pub fuzzy_min_sim: f32,
    pub fuzzy_prefix_length: u32,
    pub boost: f32,
}


impl QueryString {
    pub fn new(query: &str, default_field: &str) -> QueryString {
        QueryString {
            query: query.to_string(),
            fields: vec![(default_field.to_string(), 1.0f32)],
            phrase_slop: 0,
            combine: CombineMode::DisMax {
                tie_breaker: 0.0f32,
            },
            default_operator: Operator::Or,
            analyzer: None,
            allow_leading_wildcard: true,
            lowercase_expanded_terms: true,
            enable_position_increments: true,
            fuzzy_min_sim: 0.5f32,
            fuzzy_prefix_length: 0,
            boost: 1.0f32,
        }
    }

    pub fn field_boost(&self, field_name: &str) -> Option<f32> {
        self.fields.iter().find(|&&(ref name, _)| name == field_name).map(|&(_, boost)| boost)
    }
}
