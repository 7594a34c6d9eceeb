//! Parses "prefix" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, parse_string, parse_float, ignore_key};


/// Reads `"<pattern>"` or `{"<pattern_key>": "<pattern>", "boost": ..}`
///
/// Patterns are matched against the raw field text, they are never encoded
/// for the field type.
pub fn parse_pattern(kind: &'static str, pattern_key: &str, json: &Json) -> Result<(String, f32), QueryParseError> {
    let mut pattern = None;
    let mut boost = 1.0f32;

    match *json {
        Json::Object(ref inner_object) => {
            for (key, val) in inner_object.iter() {
                match key.as_str() {
                    "value" => {
                        pattern = Some(parse_string(val, kind)?);
                    }
                    "boost" => {
                        boost = parse_float(val, "boost")?;
                    }
                    _ if key == pattern_key => {
                        pattern = Some(parse_string(val, kind)?);
                    }
                    _ => ignore_key(kind, key),
                }
            }
        }
        _ => pattern = Some(parse_string(json, kind)?),
    }

    let pattern = pattern.ok_or(QueryParseError::MissingRequiredField {
        kind: kind,
        key: "value",
    })?;

    Ok((pattern, boost))
}


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "prefix")?;
    let (field_name, value) = single_field(object, "prefix")?;
    let (prefix, boost) = parse_pattern("prefix", "prefix", value)?;

    Ok(Query::Prefix {
        field: field_name.to_string(),
        value: prefix,
        boost: boost,
    })
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value as Json};

    use crate::query::Query;
    use crate::query_parser::{QueryParser, QueryParseContext, QueryParseError};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    fn parse_json(json: Json) -> Result<Query, QueryParseError> {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        parse(&QueryParseContext::new(&parser, &mappings), &json)
    }

    #[test]
    fn test_prefix_query() {
        let query = parse_json(json!({
            "name.first": "sh"
        }));

        assert_eq!(query, Ok(Query::Prefix {
            field: "name.first".to_string(),
            value: "sh".to_string(),
            boost: 1.0f32,
        }));
    }

    #[test]
    fn test_object_form() {
        let query = parse_json(json!({
            "name.first": {
                "prefix": "sh",
                "boost": 2.0
            }
        }));

        assert_eq!(query, Ok(Query::Prefix {
            field: "name.first".to_string(),
            value: "sh".to_string(),
            boost: 2.0f32,
        }));
    }

    #[test]
    fn test_numeric_field_is_not_encoded() {
        let query = parse_json(json!({
            "age": "3"
        }));

        assert_eq!(query, Ok(Query::Prefix {
            field: "age".to_string(),
            value: "3".to_string(),
            boost: 1.0f32,
        }));
    }

    #[test]
    fn test_gives_error_for_non_string() {
        let query = parse_json(json!({
            "name.first": 12
        }));

        assert_eq!(query, Err(QueryParseError::TypeMismatch {
            field: "prefix".to_string(),
            expected: "string",
            actual: "number".to_string(),
        }));
    }

    #[test]
    fn test_gives_error_for_missing_prefix() {
        let query = parse_json(json!({
            "name.first": {}
        }));

        assert_eq!(query, Err(QueryParseError::MissingRequiredField {
            kind: "prefix",
            key: "value",
        }));
    }
}
