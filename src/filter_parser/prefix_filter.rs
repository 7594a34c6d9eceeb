//! Parses "prefix" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::prefix_query::parse_pattern;
use crate::query_parser::utils::{as_object, single_field};


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "prefix")?;
    let (field_name, value) = single_field(object, "prefix")?;
    let (prefix, _boost) = parse_pattern("prefix", "prefix", value)?;

    Ok(Filter::Prefix {
        field: field_name.to_string(),
        value: prefix,
    })
}
