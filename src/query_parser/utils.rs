use log::debug;
use serde_json::{Map, Value as Json};

use crate::query::{Query, Operator};
use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};


pub fn json_type_name(json: &Json) -> &'static str {
    match *json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}


pub fn type_mismatch(field: &str, expected: &'static str, json: &Json) -> QueryParseError {
    QueryParseError::TypeMismatch {
        field: field.to_string(),
        expected: expected,
        actual: json_type_name(json).to_string(),
    }
}


pub fn as_object<'j>(json: &'j Json, field: &str) -> Result<&'j Map<String, Json>, QueryParseError> {
    json.as_object().ok_or_else(|| type_mismatch(field, "object", json))
}


pub fn parse_string(json: &Json, field: &str) -> Result<String, QueryParseError> {
    match *json {
        Json::String(ref string) => Ok(string.clone()),
        _ => Err(type_mismatch(field, "string", json)),
    }
}


/// Parses a finite number, numeric strings are accepted too
pub fn parse_f64(json: &Json, field: &str) -> Result<f64, QueryParseError> {
    let value = match *json {
        Json::Number(ref number) => number.as_f64(),
        Json::String(ref string) => string.trim().parse::<f64>().ok(),
        _ => return Err(type_mismatch(field, "number", json)),
    };

    // "NaN" and "inf" parse as floats
    match value {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(QueryParseError::TypeMismatch {
            field: field.to_string(),
            expected: "finite number",
            actual: json.to_string(),
        }),
    }
}


pub fn parse_float(json: &Json, field: &str) -> Result<f32, QueryParseError> {
    let value = parse_f64(json, field)? as f32;

    // Finite as f64 but too large for f32
    if !value.is_finite() {
        return Err(QueryParseError::TypeMismatch {
            field: field.to_string(),
            expected: "finite number",
            actual: json.to_string(),
        });
    }

    Ok(value)
}


/// Parses a dis_max tie breaker, which must be in [0, 1]
pub fn parse_tie_breaker(json: &Json, field: &str) -> Result<f32, QueryParseError> {
    let tie_breaker = parse_float(json, field)?;

    if !(0.0..=1.0).contains(&tie_breaker) {
        return Err(QueryParseError::TypeMismatch {
            field: field.to_string(),
            expected: "number in [0, 1]",
            actual: json.to_string(),
        });
    }

    Ok(tie_breaker)
}


/// Parses a fuzzy similarity, which must be in (0, 1]
pub fn parse_min_similarity(json: &Json, field: &str) -> Result<f32, QueryParseError> {
    let min_similarity = parse_float(json, field)?;

    if !(min_similarity > 0.0 && min_similarity <= 1.0) {
        return Err(QueryParseError::TypeMismatch {
            field: field.to_string(),
            expected: "number in (0, 1]",
            actual: json.to_string(),
        });
    }

    Ok(min_similarity)
}


pub fn parse_bool(json: &Json, field: &str) -> Result<bool, QueryParseError> {
    match *json {
        Json::Bool(value) => Ok(value),
        Json::String(ref string) if string == "true" => Ok(true),
        Json::String(ref string) if string == "false" => Ok(false),
        _ => Err(type_mismatch(field, "boolean", json)),
    }
}


pub fn parse_u32(json: &Json, field: &str) -> Result<u32, QueryParseError> {
    let value = match *json {
        Json::Number(ref number) => number.as_u64(),
        Json::String(ref string) => string.trim().parse::<u64>().ok(),
        _ => None,
    };

    match value {
        Some(value) if value <= u32::MAX as u64 => Ok(value as u32),
        _ => Err(QueryParseError::TypeMismatch {
            field: field.to_string(),
            expected: "non-negative integer",
            actual: json.to_string(),
        }),
    }
}


pub fn parse_operator(json: &Json, field: &str) -> Result<Operator, QueryParseError> {
    match *json {
        Json::String(ref value) => {
            match value.to_lowercase().as_str() {
                "or" => Ok(Operator::Or),
                "and" => Ok(Operator::And),
                _ => Err(QueryParseError::TypeMismatch {
                    field: field.to_string(),
                    expected: "\"or\" or \"and\"",
                    actual: json.to_string(),
                }),
            }
        }
        _ => Err(type_mismatch(field, "string", json)),
    }
}


/// Parses field names with an optional boost, such as "title^2.5"
pub fn parse_field_and_boost(json: &Json, field: &str) -> Result<(String, f32), QueryParseError> {
    let string = parse_string(json, field)?;

    match string.split_once('^') {
        Some((field_name, boost)) => {
            match boost.parse::<f32>() {
                Ok(boost) if boost.is_finite() => Ok((field_name.to_string(), boost)),
                _ => Err(QueryParseError::TypeMismatch {
                    field: field.to_string(),
                    expected: "field name with a numeric boost",
                    actual: json.to_string(),
                }),
            }
        }
        None => Ok((string, 1.0f32)),
    }
}


/// Parses an array of strings, a single string is also accepted
pub fn parse_string_list(json: &Json, field: &str) -> Result<Vec<String>, QueryParseError> {
    match *json {
        Json::Array(ref array) => array.iter().map(|item| parse_string(item, field)).collect(),
        Json::String(ref string) => Ok(vec![string.clone()]),
        _ => Err(type_mismatch(field, "array", json)),
    }
}


/// Parses the "fields" list of a query, at least one field is needed
pub fn parse_field_list(json: &Json, field: &str) -> Result<Vec<String>, QueryParseError> {
    let fields = parse_string_list(json, field)?;

    if fields.is_empty() {
        return Err(QueryParseError::TypeMismatch {
            field: field.to_string(),
            expected: "non-empty array",
            actual: json.to_string(),
        });
    }

    Ok(fields)
}


/// Options such as `_name` and `_cache` sit next to field names
pub fn is_option_key(key: &str) -> bool {
    key.starts_with('_')
}


/// Finds the single field a query is targeting
///
/// Used by queries shaped like `{"<field>": ...}`. Option keys are skipped.
pub fn single_field<'j>(object: &'j Map<String, Json>, kind: &'static str) -> Result<(&'j str, &'j Json), QueryParseError> {
    let mut fields = object.iter().filter(|&(key, _)| !is_option_key(key));

    let (field_name, value) = fields.next().ok_or(QueryParseError::MissingRequiredField {
        kind: kind,
        key: "field",
    })?;

    if fields.next().is_some() {
        return Err(QueryParseError::ExpectedSingleKey(kind.to_string()));
    }

    for key in object.keys().filter(|key| is_option_key(key)) {
        debug!("ignoring option {:?} of [{}]", key, kind);
    }

    Ok((field_name.as_str(), value))
}


pub fn ignore_key(kind: &str, key: &str) {
    debug!("ignoring unrecognised key {:?} of [{}]", key, kind);
}


/// Parses a query, or an array of queries
pub fn parse_query_list(context: &QueryParseContext, json: &Json) -> Result<Vec<Query>, QueryParseError> {
    match *json {
        Json::Array(ref array) => array.iter().map(|item| context.parse_query(item)).collect(),
        _ => Ok(vec![context.parse_query(json)?]),
    }
}


/// Parses a query that has to be a span query
pub fn parse_span_query(context: &QueryParseContext, kind: &str, json: &Json) -> Result<Query, QueryParseError> {
    let query = context.parse_query(json)?;

    if !query.is_span() {
        return Err(QueryParseError::TypeMismatch {
            field: kind.to_string(),
            expected: "span query",
            actual: query.name().to_string(),
        });
    }

    Ok(query)
}


/// Parses the "clauses" array of span_near and span_or
pub fn parse_span_clauses(context: &QueryParseContext, kind: &'static str, json: &Json) -> Result<Vec<Query>, QueryParseError> {
    let array = json.as_array().ok_or_else(|| type_mismatch("clauses", "array", json))?;

    if array.is_empty() {
        return Err(QueryParseError::MissingRequiredField {
            kind: kind,
            key: "clauses",
        });
    }

    array.iter().map(|clause| parse_span_query(context, kind, clause)).collect()
}


/// Parses a filter, or an array of filters
pub fn parse_filter_list(context: &QueryParseContext, json: &Json) -> Result<Vec<Filter>, QueryParseError> {
    match *json {
        Json::Array(ref array) => array.iter().map(|item| context.parse_filter(item)).collect(),
        _ => Ok(vec![context.parse_filter(json)?]),
    }
}
