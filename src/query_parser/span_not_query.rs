//! Parses "span_not" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, parse_span_query, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "span_not")?;

    let mut include = None;
    let mut exclude = None;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "include" => {
                include = Some(parse_span_query(context, "span_not", value)?);
            }
            "exclude" => {
                exclude = Some(parse_span_query(context, "span_not", value)?);
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("span_not", key),
        }
    }

    let include = include.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_not",
        key: "include",
    })?;
    let exclude = exclude.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_not",
        key: "exclude",
    })?;

    Ok(Query::SpanNot {
        include: Box::new(include),
        exclude: Box::new(exclude),
        boost: boost,
    })
}
