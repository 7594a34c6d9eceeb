//! Parses "field" queries
//!
//! Text fields are run through the analyzer and give a term query per token.
//! Any other field type is matched exactly, like a "term" query.

use serde_json::Value as Json;

use crate::mapping::FieldType;
use crate::query::{Query, BooleanClause, Occur, Operator};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, parse_float, parse_operator, json_type_name, ignore_key};
use crate::term::Term;


fn literal_text(field_name: &str, literal: &Json) -> Result<String, QueryParseError> {
    match *literal {
        Json::String(ref string) => Ok(string.clone()),
        Json::Number(_) | Json::Bool(_) => Ok(literal.to_string()),
        _ => Err(QueryParseError::UnsupportedLiteralType {
            field: field_name.to_string(),
            actual: json_type_name(literal),
        }),
    }
}


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "field")?;
    let (field_name, value) = single_field(object, "field")?;

    let mut literal = None;
    let mut boost = 1.0f32;
    let mut operator = Operator::Or;

    match *value {
        Json::Object(ref inner_object) => {
            for (key, val) in inner_object.iter() {
                match key.as_str() {
                    "query" => {
                        literal = Some(val);
                    }
                    "boost" => {
                        boost = parse_float(val, "boost")?;
                    }
                    "default_operator" | "operator" => {
                        operator = parse_operator(val, key)?;
                    }
                    _ => ignore_key("field", key),
                }
            }
        }
        _ => literal = Some(value),
    }

    let literal = literal.ok_or(QueryParseError::MissingRequiredField {
        kind: "field",
        key: "query",
    })?;

    let field_type = context.field_type(field_name);
    if field_type != FieldType::Text {
        let term = context.encode(field_name, literal)?;

        let query = if field_type.is_range_encoded() {
            Query::point_range(field_name, term)
        } else {
            Query::term(field_name, term)
        };

        return Ok(query.with_boost(boost));
    }

    let text = literal_text(field_name, literal)?;
    let mut tokens = context.analyze(field_name, &text);

    let query = if tokens.len() == 1 {
        Query::term(field_name, Term::from_string(&tokens.remove(0)))
    } else {
        let occur = match operator {
            Operator::Or => Occur::Should,
            Operator::And => Occur::Must,
        };

        Query::boolean(tokens.iter().map(|token| {
            BooleanClause::new(occur, Query::term(field_name, Term::from_string(token)))
        }).collect())
    };

    Ok(query.with_boost(boost))
}
