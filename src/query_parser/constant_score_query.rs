//! Parses "constant_score" queries

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "constant_score")?;

    let mut filter = None;
    let mut query = None;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "filter" => {
                filter = Some(context.parse_filter(value)?);
            }
            "query" => {
                query = Some(context.parse_query(value)?);
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("constant_score", key),
        }
    }

    // A query can stand in for the filter, its score is dropped
    let filter = match (filter, query) {
        (Some(filter), _) => filter,
        (None, Some(query)) => Filter::Query(Box::new(query)),
        (None, None) => {
            return Err(QueryParseError::MissingRequiredField {
                kind: "constant_score",
                key: "filter",
            });
        }
    };

    Ok(Query::ConstantScore {
        filter: Box::new(filter),
        boost: boost,
    })
}
