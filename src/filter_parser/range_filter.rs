//! Parses "range" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::range_query::parse_bounds;
use crate::query_parser::utils::{as_object, single_field};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "range")?;
    let (field_name, value) = single_field(object, "range")?;
    let bounds = parse_bounds(context, "range", field_name, value)?;

    Ok(Filter::Range {
        field: field_name.to_string(),
        lower: bounds.lower,
        upper: bounds.upper,
        include_lower: bounds.include_lower,
        include_upper: bounds.include_upper,
    })
}
