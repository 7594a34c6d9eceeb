//! Parses "term" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, parse_float, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "term")?;
    let (field_name, value) = single_field(object, "term")?;

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
                    _ => ignore_key("term", key),
                }
            }
        }
        _ => literal = Some(value),
    }

    let literal = literal.ok_or(QueryParseError::MissingRequiredField {
        kind: "term",
        key: "value",
    })?;
    let term = context.encode(field_name, literal)?;

    // Numbers and dates are matched as a single point range
    let query = if context.field_type(field_name).is_range_encoded() {
        Query::point_range(field_name, term)
    } else {
        Query::term(field_name, term)
    };

    Ok(query.with_boost(boost))
}
