//! Parses "query_string" queries

use serde_json::Value as Json;

use crate::query::{Query, QueryString, CombineMode};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_string, parse_float, parse_bool, parse_u32, parse_operator,
                                 parse_field_and_boost, parse_tie_breaker, type_mismatch, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "query_string")?;

    let mut query_string = QueryString::new("", &context.settings().default_field);
    let mut query = None;
    let mut default_field = None;
    let mut fields = None;
    let mut use_dis_max = true;
    let mut tie_breaker = 0.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "query" => {
                query = Some(parse_string(value, "query")?);
            }
            "default_field" => {
                default_field = Some(parse_string(value, "default_field")?);
            }
            "fields" => {
                let array = value.as_array().ok_or_else(|| type_mismatch("fields", "array", value))?;
                if array.is_empty() {
                    return Err(QueryParseError::TypeMismatch {
                        field: "fields".to_string(),
                        expected: "non-empty array",
                        actual: value.to_string(),
                    });
                }

                fields = Some(array.iter().map(|field| parse_field_and_boost(field, "fields")).collect::<Result<Vec<_>, _>>()?);
            }
            "use_dis_max" => {
                use_dis_max = parse_bool(value, "use_dis_max")?;
            }
            "tie_breaker" => {
                tie_breaker = parse_tie_breaker(value, "tie_breaker")?;
            }
            "phrase_slop" => {
                query_string.phrase_slop = parse_u32(value, "phrase_slop")?;
            }
            "default_operator" => {
                query_string.default_operator = parse_operator(value, "default_operator")?;
            }
            "analyzer" => {
                query_string.analyzer = Some(parse_string(value, "analyzer")?);
            }
            "allow_leading_wildcard" => {
                query_string.allow_leading_wildcard = parse_bool(value, "allow_leading_wildcard")?;
            }
            "lowercase_expanded_terms" => {
                query_string.lowercase_expanded_terms = parse_bool(value, "lowercase_expanded_terms")?;
            }
            "enable_position_increments" => {
                query_string.enable_position_increments = parse_bool(value, "enable_position_increments")?;
            }
            "fuzzy_min_sim" => {
                query_string.fuzzy_min_sim = parse_float(value, "fuzzy_min_sim")?;
            }
            "fuzzy_prefix_length" => {
                query_string.fuzzy_prefix_length = parse_u32(value, "fuzzy_prefix_length")?;
            }
            "boost" => {
                query_string.boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("query_string", key),
        }
    }

    query_string.query = query.ok_or(QueryParseError::MissingRequiredField {
        kind: "query_string",
        key: "query",
    })?;

    // "fields" wins over "default_field"
    if let Some(fields) = fields {
        query_string.fields = fields;
    } else if let Some(default_field) = default_field {
        query_string.fields = vec![(default_field, 1.0f32)];
    }

    query_string.combine = if use_dis_max {
        CombineMode::DisMax {
            tie_breaker: tie_breaker,
        }
    } else {
        CombineMode::BooleanOr
    };

    Ok(Query::QueryString(query_string))
}
