//! Parses "term" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "term")?;
    let (field_name, value) = single_field(object, "term")?;

    let literal = match *value {
        Json::Object(ref inner_object) => {
            let mut literal = None;

            for (key, val) in inner_object.iter() {
                match key.as_str() {
                    "value" | "term" => literal = Some(val),
                    _ => ignore_key("term", key),
                }
            }

            literal.ok_or(QueryParseError::MissingRequiredField {
                kind: "term",
                key: "value",
            })?
        }
        _ => value,
    };

    let term = context.encode(field_name, literal)?;

    if context.field_type(field_name).is_range_encoded() {
        Ok(Filter::point_range(field_name, term))
    } else {
        Ok(Filter::term(field_name, term))
    }
}
