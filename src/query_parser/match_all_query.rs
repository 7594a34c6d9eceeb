//! Parses "match_all" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, ignore_key};


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "match_all")?;

    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("match_all", key),
        }
    }

    Ok(Query::match_all().with_boost(boost))
}
