//! Scored query trees

pub mod score_function;
pub mod query_string;
pub mod more_like_this;

use crate::term::Term;
use crate::filter::Filter;

pub use self::score_function::{ScoreFunction, ScriptBinding};
pub use self::query_string::{QueryString, CombineMode, Operator};
pub use self::more_like_this::{MoreLikeThis, FuzzyLikeThis};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    Must,
    MustNot,
    Should,
}


#[derive(Debug, Clone, PartialEq)]
pub struct BooleanClause {
    pub occur: Occur,
    pub query: Query,
}


impl BooleanClause {
    pub fn new(occur: Occur, query: Query) -> BooleanClause {
        BooleanClause {
            occur: occur,
            query: query,
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    MatchAll {
        boost: f32,
    },
    Term {
        field: String,
        term: Term,
        boost: f32,
    },
    QueryString(QueryString),
    Fuzzy {
        field: String,
        value: String,
        min_similarity: f32,
        prefix_length: u32,
        boost: f32,
    },
    Prefix {
        field: String,
        value: String,
        boost: f32,
    },
    Wildcard {
        field: String,
        value: String,
        boost: f32,
    },
    Range {
        field: String,
        lower: Option<Term>,
        upper: Option<Term>,
        include_lower: bool,
        include_upper: bool,
        boost: f32,
    },
    DisjunctionMax {
        queries: Vec<Query>,
        tie_breaker: f32,
        boost: f32,
    },
    Boolean {
        clauses: Vec<BooleanClause>,
        minimum_should_match: u32,
        disable_coord: bool,
        boost: f32,
    },
    Filtered {
        query: Box<Query>,
        filter: Box<Filter>,
        boost: f32,
    },
    ConstantScore {
        filter: Box<Filter>,
        boost: f32,
    },
    FunctionScore {
        query: Box<Query>,
        function: ScoreFunction,
        boost: f32,
    },
    SpanTerm {
        field: String,
        term: Term,
        boost: f32,
    },
    SpanNear {
        clauses: Vec<Query>,
        slop: u32,
        in_order: bool,
        collect_payloads: bool,
        boost: f32,
    },
    SpanOr {
        clauses: Vec<Query>,
        boost: f32,
    },
    SpanNot {
        include: Box<Query>,
        exclude: Box<Query>,
        boost: f32,
    },
    SpanFirst {
        span: Box<Query>,
        end: u32,
        boost: f32,
    },
    MoreLikeThis(MoreLikeThis),
    FuzzyLikeThis(FuzzyLikeThis),
}


impl Query {
    pub fn match_all() -> Query {
        Query::MatchAll {
            boost: 1.0f32,
        }
    }

    pub fn term(field: &str, term: Term) -> Query {
        Query::Term {
            field: field.to_string(),
            term: term,
            boost: 1.0f32,
        }
    }

    /// Matches a single value of a range-encoded field
    pub fn point_range(field: &str, term: Term) -> Query {
        Query::Range {
            field: field.to_string(),
            lower: Some(term.clone()),
            upper: Some(term),
            include_lower: true,
            include_upper: true,
            boost: 1.0f32,
        }
    }

    pub fn span_term(field: &str, term: Term) -> Query {
        Query::SpanTerm {
            field: field.to_string(),
            term: term,
            boost: 1.0f32,
        }
    }

    pub fn boolean(clauses: Vec<BooleanClause>) -> Query {
        Query::Boolean {
            clauses: clauses,
            minimum_should_match: 0,
            disable_coord: false,
            boost: 1.0f32,
        }
    }

    pub fn filtered(query: Query, filter: Filter) -> Query {
        Query::Filtered {
            query: Box::new(query),
            filter: Box::new(filter),
            boost: 1.0f32,
        }
    }

    pub fn boost(&self) -> f32 {
        match *self {
            Query::MatchAll{boost} |
            Query::Term{boost, ..} |
            Query::Fuzzy{boost, ..} |
            Query::Prefix{boost, ..} |
            Query::Wildcard{boost, ..} |
            Query::Range{boost, ..} |
            Query::DisjunctionMax{boost, ..} |
            Query::Boolean{boost, ..} |
            Query::Filtered{boost, ..} |
            Query::ConstantScore{boost, ..} |
            Query::FunctionScore{boost, ..} |
            Query::SpanTerm{boost, ..} |
            Query::SpanNear{boost, ..} |
            Query::SpanOr{boost, ..} |
            Query::SpanNot{boost, ..} |
            Query::SpanFirst{boost, ..} => boost,
            Query::QueryString(ref query_string) => query_string.boost,
            Query::MoreLikeThis(ref mlt) => mlt.boost,
            Query::FuzzyLikeThis(ref flt) => flt.boost,
        }
    }

    /// Replaces the boost of this query
    pub fn with_boost(mut self, new_boost: f32) -> Query {
        match self {
            Query::MatchAll{ref mut boost} |
            Query::Term{ref mut boost, ..} |
            Query::Fuzzy{ref mut boost, ..} |
            Query::Prefix{ref mut boost, ..} |
            Query::Wildcard{ref mut boost, ..} |
            Query::Range{ref mut boost, ..} |
            Query::DisjunctionMax{ref mut boost, ..} |
            Query::Boolean{ref mut boost, ..} |
            Query::Filtered{ref mut boost, ..} |
            Query::ConstantScore{ref mut boost, ..} |
            Query::FunctionScore{ref mut boost, ..} |
            Query::SpanTerm{ref mut boost, ..} |
            Query::SpanNear{ref mut boost, ..} |
            Query::SpanOr{ref mut boost, ..} |
            Query::SpanNot{ref mut boost, ..} |
            Query::SpanFirst{ref mut boost, ..} => *boost = new_boost,
            Query::QueryString(ref mut query_string) => query_string.boost = new_boost,
            Query::MoreLikeThis(ref mut mlt) => mlt.boost = new_boost,
            Query::FuzzyLikeThis(ref mut flt) => flt.boost = new_boost,
        }

        self
    }

    /// Name of the query kind, as used in query documents
    pub fn name(&self) -> &'static str {
        match *self {
            Query::MatchAll{..} => "match_all",
            Query::Term{..} => "term",
            Query::QueryString(_) => "query_string",
            Query::Fuzzy{..} => "fuzzy",
            Query::Prefix{..} => "prefix",
            Query::Wildcard{..} => "wildcard",
            Query::Range{..} => "range",
            Query::DisjunctionMax{..} => "dis_max",
            Query::Boolean{..} => "bool",
            Query::Filtered{..} => "filtered",
            Query::ConstantScore{..} => "constant_score",
            Query::FunctionScore{ref function, ..} => {
                match *function {
                    ScoreFunction::BoostFactor(_) => "custom_boost_factor",
                    ScoreFunction::Script(_) => "custom_score",
                }
            }
            Query::SpanTerm{..} => "span_term",
            Query::SpanNear{..} => "span_near",
            Query::SpanOr{..} => "span_or",
            Query::SpanNot{..} => "span_not",
            Query::SpanFirst{..} => "span_first",
            Query::MoreLikeThis(_) => "more_like_this",
            Query::FuzzyLikeThis(_) => "fuzzy_like_this",
        }
    }

    /// Span queries match on token positions and can be nested in each other
    pub fn is_span(&self) -> bool {
        matches!(*self,
            Query::SpanTerm{..} |
            Query::SpanNear{..} |
            Query::SpanOr{..} |
            Query::SpanNot{..} |
            Query::SpanFirst{..})
    }

    /// Direct sub queries, in order
    pub fn sub_queries(&self) -> Vec<&Query> {
        match *self {
            Query::DisjunctionMax{ref queries, ..} => queries.iter().collect(),
            Query::Boolean{ref clauses, ..} => clauses.iter().map(|clause| &clause.query).collect(),
            Query::Filtered{ref query, ..} |
            Query::FunctionScore{ref query, ..} => vec![&**query],
            Query::SpanNear{ref clauses, ..} |
            Query::SpanOr{ref clauses, ..} => clauses.iter().collect(),
            Query::SpanNot{ref include, ref exclude, ..} => vec![&**include, &**exclude],
            Query::SpanFirst{ref span, ..} => vec![&**span],
            _ => Vec::new(),
        }
    }

    pub fn filter(&self) -> Option<&Filter> {
        match *self {
            Query::Filtered{ref filter, ..} |
            Query::ConstantScore{ref filter, ..} => Some(&**filter),
            _ => None,
        }
    }

    /// Number of SHOULD clauses a boolean query needs to match
    ///
    /// A boolean query without any MUST clauses has to match at least one of
    /// its SHOULD clauses, even if no minimum was given.
    pub fn effective_minimum_should_match(&self) -> Option<u32> {
        match *self {
            Query::Boolean{ref clauses, minimum_should_match, ..} => {
                let has_must = clauses.iter().any(|clause| clause.occur == Occur::Must);
                let has_should = clauses.iter().any(|clause| clause.occur == Occur::Should);

                if minimum_should_match == 0 && !has_must && has_should {
                    Some(1)
                } else {
                    Some(minimum_should_match)
                }
            }
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::term::Term;
    use crate::filter::Filter;

    use super::{Query, BooleanClause, Occur};

    #[test]
    fn test_boost_defaults() {
        assert_eq!(Query::match_all().boost(), 1.0f32);
        assert_eq!(Query::term("foo", Term::from_string("bar")).boost(), 1.0f32);
        assert_eq!(Query::boolean(vec![]).boost(), 1.0f32);
    }

    #[test]
    fn test_with_boost() {
        let query = Query::term("foo", Term::from_string("bar")).with_boost(2.0);

        assert_eq!(query, Query::Term {
            field: "foo".to_string(),
            term: Term::from_string("bar"),
            boost: 2.0f32,
        });
        assert_eq!(query.boost(), 2.0f32);
    }

    #[test]
    fn test_point_range() {
        assert_eq!(Query::point_range("age", Term::from_integer(34)), Query::Range {
            field: "age".to_string(),
            lower: Some(Term::from_integer(34)),
            upper: Some(Term::from_integer(34)),
            include_lower: true,
            include_upper: true,
            boost: 1.0f32,
        });
    }

    #[test]
    fn test_sub_queries() {
        let query = Query::boolean(vec![
            BooleanClause::new(Occur::Must, Query::term("content", Term::from_string("test1"))),
            BooleanClause::new(Occur::Should, Query::match_all()),
        ]);

        assert_eq!(query.sub_queries(), vec![
            &Query::term("content", Term::from_string("test1")),
            &Query::match_all(),
        ]);
    }

    #[test]
    fn test_is_span() {
        assert!(Query::span_term("age", Term::from_integer(34)).is_span());
        assert!(!Query::term("age", Term::from_integer(34)).is_span());
    }

    #[test]
    fn test_filter_accessor() {
        let query = Query::filtered(Query::match_all(), Filter::prefix("name.first", "sh"));

        assert_eq!(query.filter(), Some(&Filter::prefix("name.first", "sh")));
        assert_eq!(Query::match_all().filter(), None);
    }

    #[test]
    fn test_effective_minimum_should_match() {
        let should_only = Query::boolean(vec![
            BooleanClause::new(Occur::Should, Query::match_all()),
        ]);
        assert_eq!(should_only.effective_minimum_should_match(), Some(1));

        let with_must = Query::boolean(vec![
            BooleanClause::new(Occur::Must, Query::match_all()),
            BooleanClause::new(Occur::Should, Query::match_all()),
        ]);
        assert_eq!(with_must.effective_minimum_should_match(), Some(0));

        let must_not_only = Query::boolean(vec![
            BooleanClause::new(Occur::MustNot, Query::match_all()),
        ]);
        assert_eq!(must_not_only.effective_minimum_should_match(), Some(0));

        assert_eq!(Query::match_all().effective_minimum_should_match(), None);
    }
}
