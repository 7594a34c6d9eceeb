//! Parses "fuzzy" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, parse_float, parse_min_similarity, parse_u32, json_type_name, ignore_key};


fn parse_value(json: &Json) -> Result<String, QueryParseError> {
    match *json {
        Json::String(ref string) => Ok(string.clone()),
        Json::Number(_) => Ok(json.to_string()),
        _ => Err(QueryParseError::TypeMismatch {
            field: "value".to_string(),
            expected: "string",
            actual: json_type_name(json).to_string(),
        }),
    }
}


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "fuzzy")?;
    let (field_name, value) = single_field(object, "fuzzy")?;

    let mut fuzzy_value = None;
    let mut boost = 1.0f32;
    let mut min_similarity = 0.5f32;
    let mut prefix_length = 0;

    match *value {
        Json::Object(ref inner_object) => {
            for (key, val) in inner_object.iter() {
                match key.as_str() {
                    "value" => {
                        fuzzy_value = Some(parse_value(val)?);
                    }
                    "boost" => {
                        boost = parse_float(val, "boost")?;
                    }
                    "min_similarity" => {
                        min_similarity = parse_min_similarity(val, "min_similarity")?;
                    }
                    "prefix_length" => {
                        prefix_length = parse_u32(val, "prefix_length")?;
                    }
                    _ => ignore_key("fuzzy", key),
                }
            }
        }
        _ => fuzzy_value = Some(parse_value(value)?),
    }

    let fuzzy_value = fuzzy_value.ok_or(QueryParseError::MissingRequiredField {
        kind: "fuzzy",
        key: "value",
    })?;

    Ok(Query::Fuzzy {
        field: field_name.to_string(),
        value: fuzzy_value,
        min_similarity: min_similarity,
        prefix_length: prefix_length,
        boost: boost,
    })
}
