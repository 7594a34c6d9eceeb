//! Parses "span_first" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, parse_u32, parse_span_query, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "span_first")?;

    let mut span = None;
    let mut end = None;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "match" => {
                span = Some(parse_span_query(context, "span_first", value)?);
            }
            "end" => {
                let value_end = parse_u32(value, "end")?;

                if value_end == 0 {
                    return Err(QueryParseError::TypeMismatch {
                        field: "end".to_string(),
                        expected: "positive integer",
                        actual: value.to_string(),
                    });
                }

                end = Some(value_end);
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("span_first", key),
        }
    }

    let span = span.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_first",
        key: "match",
    })?;
    let end = end.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_first",
        key: "end",
    })?;

    Ok(Query::SpanFirst {
        span: Box::new(span),
        end: end,
        boost: boost,
    })
}
