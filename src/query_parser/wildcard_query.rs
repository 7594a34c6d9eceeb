//! Parses "wildcard" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::prefix_query::parse_pattern;
use crate::query_parser::utils::{as_object, single_field};


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "wildcard")?;
    let (field_name, value) = single_field(object, "wildcard")?;
    let (pattern, boost) = parse_pattern("wildcard", "wildcard", value)?;

    Ok(Query::Wildcard {
        field: field_name.to_string(),
        value: pattern,
        boost: boost,
    })
}
