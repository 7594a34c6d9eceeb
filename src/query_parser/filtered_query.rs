//! Parses "filtered" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "filtered")?;

    let mut query = None;
    let mut filter = None;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "query" => {
                query = Some(context.parse_query(value)?);
            }
            "filter" => {
                filter = Some(context.parse_filter(value)?);
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("filtered", key),
        }
    }

    let filter = filter.ok_or(QueryParseError::MissingRequiredField {
        kind: "filtered",
        key: "filter",
    })?;

    Ok(Query::Filtered {
        query: Box::new(query.unwrap_or_else(Query::match_all)),
        filter: Box::new(filter),
        boost: boost,
    })
}
