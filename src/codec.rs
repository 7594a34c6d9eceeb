//! Converts JSON literals into terms, according to the type of their field
//!
//! Every literal in a query document goes through here. The same encoding is
//! used for exact matches and for range bounds, so a term query on a numeric
//! field and a point range over the same value hold identical terms.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value as Json;

use crate::mapping::{FieldType, FieldTypeResolver, NumericType};
use crate::query_parser::QueryParseError;
use crate::query_parser::utils::json_type_name;
use crate::term::Term;


pub fn encode(resolver: &dyn FieldTypeResolver, field_name: &str, literal: &Json) -> Result<Term, QueryParseError> {
    encode_as(resolver.resolve(field_name), field_name, literal)
}


pub fn encode_as(field_type: FieldType, field_name: &str, literal: &Json) -> Result<Term, QueryParseError> {
    match *literal {
        Json::Null | Json::Array(_) | Json::Object(_) => {
            return Err(QueryParseError::UnsupportedLiteralType {
                field: field_name.to_string(),
                actual: json_type_name(literal),
            });
        }
        _ => {}
    }

    match field_type {
        FieldType::Text => Ok(encode_text(literal)),
        FieldType::Numeric(numeric_type @ NumericType::Integer { .. }) => {
            match parse_integer(literal) {
                Some(value) if numeric_type.accepts_integer(value) => Ok(Term::from_integer(value)),
                _ => Err(mismatch(field_name, field_type.name(), literal)),
            }
        }
        FieldType::Numeric(NumericType::Float { .. }) => {
            let value = match *literal {
                Json::Number(ref number) => number.as_f64(),
                Json::String(ref string) => string.trim().parse::<f64>().ok(),
                _ => None,
            };

            match value {
                Some(value) if value.is_finite() => Ok(Term::from_float(value)),
                _ => Err(mismatch(field_name, field_type.name(), literal)),
            }
        }
        FieldType::Date => {
            let millis = match *literal {
                Json::Number(ref number) => number.as_i64(),
                Json::String(ref string) => {
                    parse_date(string)
                        .map(|date| date.timestamp_millis())
                        .or_else(|| string.trim().parse::<i64>().ok())
                }
                _ => None,
            };

            match millis {
                Some(millis) => Ok(Term::from_integer(millis)),
                None => Err(mismatch(field_name, field_type.name(), literal)),
            }
        }
        FieldType::Boolean => {
            let value = match *literal {
                Json::Bool(value) => Some(value),
                Json::String(ref string) => {
                    match string.as_str() {
                        "true" | "T" => Some(true),
                        "false" | "F" => Some(false),
                        _ => None,
                    }
                }
                _ => None,
            };

            match value {
                Some(value) => Ok(Term::from_boolean(value)),
                None => Err(mismatch(field_name, field_type.name(), literal)),
            }
        }
        FieldType::GeoPoint => {
            Err(QueryParseError::TypeMismatch {
                field: field_name.to_string(),
                expected: "term value",
                actual: field_type.name().to_string(),
            })
        }
    }
}


fn encode_text(literal: &Json) -> Term {
    match *literal {
        Json::String(ref string) => Term::from_string(string),
        Json::Bool(true) => Term::from_string("true"),
        Json::Bool(false) => Term::from_string("false"),
        _ => Term::from_string(&literal.to_string()),
    }
}


fn parse_integer(literal: &Json) -> Option<i64> {
    match *literal {
        Json::Number(ref number) => {
            number.as_i64().or_else(|| {
                // Whole floats like 34.0
                number.as_f64()
                    .filter(|value| value.fract() == 0.0 && value.abs() < 9.0e15)
                    .map(|value| value as i64)
            })
        }
        Json::String(ref string) => string.trim().parse::<i64>().ok(),
        _ => None,
    }
}


fn mismatch(field_name: &str, expected: &'static str, literal: &Json) -> QueryParseError {
    QueryParseError::TypeMismatch {
        field: field_name.to_string(),
        expected: expected,
        actual: literal.to_string(),
    }
}


/// Parses dates in the formats accepted by date fields
///
/// RFC 3339 timestamps, "2016-03-08" and "2016-03-08T12:00:00" are accepted.
/// Dates without a timezone are UTC.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&date));
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|date| Utc.from_utc_datetime(&date));
    }

    None
}
