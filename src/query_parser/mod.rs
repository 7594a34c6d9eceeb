//! Parses Elasticsearch Query DSL

pub mod utils;
pub mod match_all_query;
pub mod term_query;
pub mod field_query;
pub mod query_string_query;
pub mod fuzzy_query;
pub mod prefix_query;
pub mod wildcard_query;
pub mod range_query;
pub mod dis_max_query;
pub mod bool_query;
pub mod filtered_query;
pub mod constant_score_query;
pub mod custom_score_query;
pub mod custom_boost_factor_query;
pub mod span_term_query;
pub mod span_near_query;
pub mod span_or_query;
pub mod span_not_query;
pub mod span_first_query;
pub mod more_like_this_query;
pub mod more_like_this_field_query;
pub mod fuzzy_like_this_query;
pub mod fuzzy_like_this_field_query;

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace, warn};
use maplit::hashmap;
use serde_json::Value as Json;
use thiserror::Error;

use crate::analysis::{TextAnalyzer, WhitespaceAnalyzer};
use crate::codec;
use crate::filter::Filter;
use crate::filter_parser;
use crate::json;
use crate::mapping::{FieldType, FieldTypeResolver};
use crate::query::Query;
use crate::settings::ParserSettings;
use crate::term::Term;

use self::utils::json_type_name;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryParseError {
    #[error("unknown query kind {0:?}")]
    UnknownQueryKind(String),
    #[error("unknown filter kind {0:?}")]
    UnknownFilterKind(String),
    #[error("[{kind}] requires {key:?}")]
    MissingRequiredField {
        kind: &'static str,
        key: &'static str,
    },
    #[error("{field:?} expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: String,
    },
    #[error("{field:?} cannot be matched against a literal of type {actual}")]
    UnsupportedLiteralType {
        field: String,
        actual: &'static str,
    },
    #[error("range on {0:?} has no bounds")]
    MalformedRange(String),
    #[error("malformed geo shape: {0}")]
    MalformedGeoShape(String),
    #[error("query nested deeper than {0} levels")]
    DepthExceeded(usize),
    #[error("[{0}] expected an object with a single key")]
    ExpectedSingleKey(String),
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}


pub type QueryParseFn = fn(&QueryParseContext, &Json) -> Result<Query, QueryParseError>;
pub type FilterParseFn = fn(&QueryParseContext, &Json) -> Result<Filter, QueryParseError>;


fn default_query_parsers() -> HashMap<&'static str, QueryParseFn> {
    hashmap! {
        "match_all" => match_all_query::parse as QueryParseFn,
        "term" => term_query::parse,
        "field" => field_query::parse,
        "query_string" => query_string_query::parse,
        "fuzzy" => fuzzy_query::parse,
        "prefix" => prefix_query::parse,
        "wildcard" => wildcard_query::parse,
        "range" => range_query::parse,
        "dis_max" => dis_max_query::parse,
        "bool" => bool_query::parse,
        "filtered" => filtered_query::parse,
        "constant_score" => constant_score_query::parse,
        "custom_score" => custom_score_query::parse,
        "custom_boost_factor" => custom_boost_factor_query::parse,
        "span_term" => span_term_query::parse,
        "span_near" => span_near_query::parse,
        "span_or" => span_or_query::parse,
        "span_not" => span_not_query::parse,
        "span_first" => span_first_query::parse,
        "more_like_this" => more_like_this_query::parse,
        "mlt" => more_like_this_query::parse,
        "more_like_this_field" => more_like_this_field_query::parse,
        "mlt_field" => more_like_this_field_query::parse,
        "fuzzy_like_this" => fuzzy_like_this_query::parse,
        "flt" => fuzzy_like_this_query::parse,
        "fuzzy_like_this_field" => fuzzy_like_this_field_query::parse,
        "flt_field" => fuzzy_like_this_field_query::parse,
    }
}


/// Registry of query and filter parsers, keyed by kind name
///
/// Built once and shared. Compiling never mutates it, so one instance can
/// serve any number of threads.
pub struct QueryParser {
    queries: HashMap<&'static str, QueryParseFn>,
    filters: HashMap<&'static str, FilterParseFn>,
    analyzer: Box<dyn TextAnalyzer>,
    settings: ParserSettings,
}


impl fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut query_kinds = self.queries.keys().collect::<Vec<_>>();
        query_kinds.sort();
        let mut filter_kinds = self.filters.keys().collect::<Vec<_>>();
        filter_kinds.sort();

        f.debug_struct("QueryParser")
            .field("queries", &query_kinds)
            .field("filters", &filter_kinds)
            .field("analyzer", &self.analyzer)
            .field("settings", &self.settings)
            .finish()
    }
}


impl Default for QueryParser {
    fn default() -> QueryParser {
        QueryParser::new()
    }
}


impl QueryParser {
    pub fn new() -> QueryParser {
        QueryParser {
            queries: default_query_parsers(),
            filters: filter_parser::default_filter_parsers(),
            analyzer: Box::new(WhitespaceAnalyzer),
            settings: ParserSettings::default(),
        }
    }

    #[inline]
    pub fn with_settings(mut self, settings: ParserSettings) -> QueryParser {
        self.settings = settings;
        self
    }

    #[inline]
    pub fn with_analyzer<A: TextAnalyzer + 'static>(mut self, analyzer: A) -> QueryParser {
        self.analyzer = Box::new(analyzer);
        self
    }

    /// Adds or replaces the parser for a query kind
    pub fn register_query(&mut self, kind: &'static str, parse: QueryParseFn) {
        self.queries.insert(kind, parse);
    }

    /// Adds or replaces the parser for a filter kind
    pub fn register_filter(&mut self, kind: &'static str, parse: FilterParseFn) {
        self.filters.insert(kind, parse);
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn get_query_parser(&self, kind: &str) -> Option<QueryParseFn> {
        self.queries.get(kind).cloned()
    }

    pub fn get_filter_parser(&self, kind: &str) -> Option<FilterParseFn> {
        self.filters.get(kind).cloned()
    }

    /// Compiles a query document such as `{"term": {"user": "kimchy"}}`
    pub fn parse(&self, mappings: &dyn FieldTypeResolver, json: &Json) -> Result<Query, QueryParseError> {
        let result = QueryParseContext::new(self, mappings).parse_query(json);

        if let Err(ref e) = result {
            warn!("failed to compile query: {}", e);
        }

        result
    }

    /// Compiles a filter document such as `{"range": {"age": {"gte": 18}}}`
    pub fn parse_filter(&self, mappings: &dyn FieldTypeResolver, json: &Json) -> Result<Filter, QueryParseError> {
        let result = QueryParseContext::new(self, mappings).parse_filter(json);

        if let Err(ref e) = result {
            warn!("failed to compile filter: {}", e);
        }

        result
    }

    pub fn parse_str(&self, mappings: &dyn FieldTypeResolver, text: &str) -> Result<Query, QueryParseError> {
        let json = json::from_str(text).map_err(|e| QueryParseError::InvalidJson(e.to_string()))?;
        self.parse(mappings, &json)
    }

    pub fn parse_filter_str(&self, mappings: &dyn FieldTypeResolver, text: &str) -> Result<Filter, QueryParseError> {
        let json = json::from_str(text).map_err(|e| QueryParseError::InvalidJson(e.to_string()))?;
        self.parse_filter(mappings, &json)
    }
}


/// State for a single compile
///
/// Every nested query or filter gets its own context one level deeper than
/// its parent.
#[derive(Clone, Copy)]
pub struct QueryParseContext<'a> {
    parser: &'a QueryParser,
    pub mappings: &'a dyn FieldTypeResolver,
    depth: usize,
}


impl<'a> fmt::Debug for QueryParseContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("QueryParseContext")
            .field("depth", &self.depth)
            .finish()
    }
}


impl<'a> QueryParseContext<'a> {
    pub fn new(parser: &'a QueryParser, mappings: &'a dyn FieldTypeResolver) -> QueryParseContext<'a> {
        QueryParseContext {
            parser: parser,
            mappings: mappings,
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn settings(&self) -> &'a ParserSettings {
        &self.parser.settings
    }

    pub fn field_type(&self, field_name: &str) -> FieldType {
        self.mappings.resolve(field_name)
    }

    /// Encodes a literal for the given field
    pub fn encode(&self, field_name: &str, literal: &Json) -> Result<Term, QueryParseError> {
        codec::encode(self.mappings, field_name, literal)
    }

    pub fn analyze(&self, field_name: &str, text: &str) -> Vec<String> {
        self.parser.analyzer.analyze(field_name, text)
    }

    fn nested(&self) -> Result<QueryParseContext<'a>, QueryParseError> {
        let max_depth = self.parser.settings.max_depth;

        if self.depth >= max_depth {
            return Err(QueryParseError::DepthExceeded(max_depth));
        }

        Ok(QueryParseContext {
            parser: self.parser,
            mappings: self.mappings,
            depth: self.depth + 1,
        })
    }

    /// Parses a `{"<kind>": {...}}` query object
    pub fn parse_query(&self, json: &Json) -> Result<Query, QueryParseError> {
        let (kind, body) = dispatch_key(json, "query")?;
        let context = self.nested()?;

        debug!("parsing {:?} query at depth {}", kind, context.depth);

        let parse = self.parser.get_query_parser(kind).ok_or_else(|| QueryParseError::UnknownQueryKind(kind.to_string()))?;
        let query = parse(&context, body)?;

        trace!("parsed {:?}", query);
        Ok(query)
    }

    /// Parses a `{"<kind>": {...}}` filter object
    pub fn parse_filter(&self, json: &Json) -> Result<Filter, QueryParseError> {
        let (kind, body) = dispatch_key(json, "filter")?;
        self.parse_filter_kind(kind, body)
    }

    /// Parses the body of a filter whose kind was already picked out
    pub fn parse_filter_kind(&self, kind: &str, body: &Json) -> Result<Filter, QueryParseError> {
        let context = self.nested()?;

        debug!("parsing {:?} filter at depth {}", kind, context.depth);

        let parse = self.parser.get_filter_parser(kind).ok_or_else(|| QueryParseError::UnknownFilterKind(kind.to_string()))?;
        let filter = parse(&context, body)?;

        trace!("parsed {:?}", filter);
        Ok(filter)
    }
}


fn dispatch_key<'j>(json: &'j Json, what: &str) -> Result<(&'j str, &'j Json), QueryParseError> {
    let object = json.as_object().ok_or_else(|| QueryParseError::TypeMismatch {
        field: what.to_string(),
        expected: "object",
        actual: json_type_name(json).to_string(),
    })?;

    if object.len() != 1 {
        return Err(QueryParseError::ExpectedSingleKey(what.to_string()));
    }

    match object.iter().next() {
        Some((kind, body)) => Ok((kind.as_str(), body)),
        None => Err(QueryParseError::ExpectedSingleKey(what.to_string())),
    }
}


#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use crate::mapping::{MappingRegistry, FieldType, NumericType, TextOnly};
    use crate::query::{Query, BooleanClause, Occur};
    use crate::filter::Filter;
    use crate::settings::ParserSettings;
    use crate::term::Term;

    use super::{QueryParser, QueryParseContext, QueryParseError};

    /// Mapping used throughout the parser tests
    pub fn person_mappings() -> MappingRegistry {
        let mut mappings = MappingRegistry::new();
        mappings.insert("name.first", FieldType::Text);
        mappings.insert("name.last", FieldType::Text);
        mappings.insert("age", FieldType::Numeric(NumericType::integer()));
        mappings.insert("price", FieldType::Numeric(NumericType::double()));
        mappings.insert("birthday", FieldType::Date);
        mappings.insert("active", FieldType::Boolean);
        mappings.insert("location", FieldType::GeoPoint);
        mappings
    }

    #[test]
    fn test_dispatch() {
        let parser = QueryParser::new();
        let query = parser.parse(&TextOnly, &json!({
            "match_all": {}
        }));

        assert_eq!(query, Ok(Query::match_all()));
    }

    #[test]
    fn test_unknown_query_kind() {
        let parser = QueryParser::new();
        let query = parser.parse(&TextOnly, &json!({
            "foo": {}
        }));

        assert_eq!(query, Err(QueryParseError::UnknownQueryKind("foo".to_string())));
    }

    #[test]
    fn test_unknown_filter_kind() {
        let parser = QueryParser::new();
        let filter = parser.parse_filter(&TextOnly, &json!({
            "foo": {}
        }));

        assert_eq!(filter, Err(QueryParseError::UnknownFilterKind("foo".to_string())));
    }

    #[test]
    fn test_gives_error_for_multiple_keys() {
        let parser = QueryParser::new();
        let query = parser.parse(&TextOnly, &json!({
            "match_all": {},
            "term": {"foo": "bar"}
        }));

        assert_eq!(query, Err(QueryParseError::ExpectedSingleKey("query".to_string())));

        let query = parser.parse(&TextOnly, &json!({}));

        assert_eq!(query, Err(QueryParseError::ExpectedSingleKey("query".to_string())));
    }

    #[test]
    fn test_gives_error_for_incorrect_type() {
        let parser = QueryParser::new();
        let query = parser.parse(&TextOnly, &json!(["match_all"]));

        assert_eq!(query, Err(QueryParseError::TypeMismatch {
            field: "query".to_string(),
            expected: "object",
            actual: "array".to_string(),
        }));
    }

    #[test]
    fn test_invalid_json() {
        let parser = QueryParser::new();
        let query = parser.parse_str(&TextOnly, "{\"match_all\": ");

        match query {
            Err(QueryParseError::InvalidJson(_)) => {}
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_str() {
        let parser = QueryParser::new();
        let query = parser.parse_str(&person_mappings(), r#"{"term": {"name.first": "shay"}}"#);

        assert_eq!(query, Ok(Query::term("name.first", Term::from_string("shay"))));
    }

    #[test]
    fn test_repeated_key_is_rejected() {
        let parser = QueryParser::new();
        let query = parser.parse_str(&TextOnly, r#"{"bool": {"must": {"term": {"a": "1"}}, "should": {"term": {"a": "3"}}, "must": {"term": {"a": "2"}}}}"#);

        match query {
            Err(QueryParseError::InvalidJson(ref message)) => assert!(message.contains("duplicate key \"must\""), "{}", message),
            other => panic!("expected InvalidJson, got {:?}", other),
        }

        let filter = parser.parse_filter_str(&TextOnly, r#"{"bool": {"must": {"term": {"a": "1"}}, "must": {"term": {"a": "2"}}}}"#);

        match filter {
            Err(QueryParseError::InvalidJson(ref message)) => assert!(message.contains("duplicate key \"must\""), "{}", message),
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_limit() {
        let parser = QueryParser::new().with_settings(ParserSettings {
            max_depth: 2,
            ..ParserSettings::default()
        });

        let query = parser.parse(&TextOnly, &json!({
            "bool": {
                "must": {"match_all": {}}
            }
        }));

        assert_eq!(query, Ok(Query::boolean(vec![
            BooleanClause::new(Occur::Must, Query::match_all()),
        ])));

        let query = parser.parse(&TextOnly, &json!({
            "bool": {
                "must": {
                    "bool": {
                        "must": {"match_all": {}}
                    }
                }
            }
        }));

        assert_eq!(query, Err(QueryParseError::DepthExceeded(2)));
    }

    #[test]
    fn test_depth_limit_through_filters() {
        let parser = QueryParser::new().with_settings(ParserSettings {
            max_depth: 2,
            ..ParserSettings::default()
        });

        let query = parser.parse(&TextOnly, &json!({
            "constant_score": {
                "filter": {
                    "query": {"match_all": {}}
                }
            }
        }));

        assert_eq!(query, Err(QueryParseError::DepthExceeded(2)));
    }

    #[test]
    fn test_register_query() {
        fn parse_nothing(_context: &QueryParseContext, _json: &serde_json::Value) -> Result<Query, QueryParseError> {
            Ok(Query::match_all().with_boost(0.0))
        }

        let mut parser = QueryParser::new();
        parser.register_query("nothing", parse_nothing);

        let query = parser.parse(&TextOnly, &json!({
            "nothing": {}
        }));

        assert_eq!(query, Ok(Query::match_all().with_boost(0.0)));
    }

    #[test]
    fn test_register_filter() {
        fn parse_missing(_context: &QueryParseContext, json: &serde_json::Value) -> Result<Filter, QueryParseError> {
            let field = json.get("field").and_then(|field| field.as_str()).unwrap_or("");
            Ok(Filter::Not(Box::new(Filter::prefix(field, ""))))
        }

        let mut parser = QueryParser::new();
        parser.register_filter("missing", parse_missing);

        let filter = parser.parse_filter(&TextOnly, &json!({
            "missing": {"field": "name"}
        }));

        assert_eq!(filter, Ok(Filter::Not(Box::new(Filter::prefix("name", "")))));

        let query = parser.parse(&TextOnly, &json!({
            "filtered": {
                "query": {"match_all": {}},
                "filter": {"missing": {"field": "name"}}
            }
        }));

        let query = query.unwrap();
        assert_eq!(query.filter(), Some(&Filter::Not(Box::new(Filter::prefix("name", "")))));
    }

    #[test]
    fn test_context_depth() {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        let context = QueryParseContext::new(&parser, &mappings);

        assert_eq!(context.depth(), 0);
        assert_eq!(context.field_type("age"), FieldType::Numeric(NumericType::integer()));
        assert_eq!(context.field_type("unknown"), FieldType::Text);
    }
}
