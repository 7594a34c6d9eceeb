//! Parses "and" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{type_mismatch, ignore_key};


/// Reads `[filter, ...]` or `{"filters": [filter, ...]}`
pub fn parse_filter_array(context: &QueryParseContext, kind: &'static str, json: &Json) -> Result<Vec<Filter>, QueryParseError> {
    match *json {
        Json::Array(ref array) => array.iter().map(|filter| context.parse_filter(filter)).collect(),
        Json::Object(ref object) => {
            let mut filters = None;

            for (key, value) in object.iter() {
                match key.as_str() {
                    "filters" => {
                        let array = value.as_array().ok_or_else(|| type_mismatch("filters", "array", value))?;
                        filters = Some(array.iter().map(|filter| context.parse_filter(filter)).collect::<Result<Vec<_>, _>>()?);
                    }
                    _ => ignore_key(kind, key),
                }
            }

            filters.ok_or(QueryParseError::MissingRequiredField {
                kind: kind,
                key: "filters",
            })
        }
        _ => Err(type_mismatch(kind, "array", json)),
    }
}


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    Ok(Filter::And(parse_filter_array(context, "and", json)?))
}
