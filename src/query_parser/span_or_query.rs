//! Parses "span_or" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, parse_span_clauses, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "span_or")?;

    let mut clauses = None;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "clauses" => {
                clauses = Some(parse_span_clauses(context, "span_or", value)?);
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("span_or", key),
        }
    }

    let clauses = clauses.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_or",
        key: "clauses",
    })?;

    Ok(Query::SpanOr {
        clauses: clauses,
        boost: boost,
    })
}
