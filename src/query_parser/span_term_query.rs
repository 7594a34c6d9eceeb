//! Parses "span_term" queries
//!
//! Same document shape as "term", but the result is always a span term, even
//! on numeric fields.

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, parse_float, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "span_term")?;
    let (field_name, value) = single_field(object, "span_term")?;

    let mut literal = None;
    let mut boost = 1.0f32;

    match *value {
        Json::Object(ref inner_object) => {
            for (key, val) in inner_object.iter() {
                match key.as_str() {
                    "value" | "term" => {
                        literal = Some(val);
                    }
                    "boost" => {
                        boost = parse_float(val, "boost")?;
                    }
                    _ => ignore_key("span_term", key),
                }
            }
        }
        _ => literal = Some(value),
    }

    let literal = literal.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_term",
        key: "value",
    })?;

    Ok(Query::SpanTerm {
        field: field_name.to_string(),
        term: context.encode(field_name, literal)?,
        boost: boost,
    })
}
