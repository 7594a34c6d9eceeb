//! Parses "dis_max" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, parse_tie_breaker, parse_query_list, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "dis_max")?;

    let mut queries = None;
    let mut tie_breaker = 0.0f32;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "queries" => {
                queries = Some(parse_query_list(context, value)?);
            }
            "tie_breaker" => {
                tie_breaker = parse_tie_breaker(value, "tie_breaker")?;
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("dis_max", key),
        }
    }

    let queries = queries.ok_or(QueryParseError::MissingRequiredField {
        kind: "dis_max",
        key: "queries",
    })?;

    Ok(Query::DisjunctionMax {
        queries: queries,
        tie_breaker: tie_breaker,
        boost: boost,
    })
}
