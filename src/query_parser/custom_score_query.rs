//! Parses "custom_score" queries
//!
//! The script is kept as written. It is compiled and run by the engine.

use serde_json::Value as Json;

use crate::query::{Query, ScoreFunction, ScriptBinding};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_string, parse_float, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "custom_score")?;

    let mut query = None;
    let mut script = None;
    let mut lang = None;
    let mut params = None;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "query" => {
                query = Some(context.parse_query(value)?);
            }
            "script" => {
                script = Some(parse_string(value, "script")?);
            }
            "lang" => {
                lang = Some(parse_string(value, "lang")?);
            }
            "params" => {
                params = Some(as_object(value, "params")?.clone());
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("custom_score", key),
        }
    }

    let query = query.ok_or(QueryParseError::MissingRequiredField {
        kind: "custom_score",
        key: "query",
    })?;
    let script = script.ok_or(QueryParseError::MissingRequiredField {
        kind: "custom_score",
        key: "script",
    })?;

    let mut binding = ScriptBinding::new(&script);
    binding.lang = lang;
    if let Some(params) = params {
        binding.params = params;
    }

    Ok(Query::FunctionScore {
        query: Box::new(query),
        function: ScoreFunction::Script(binding),
        boost: boost,
    })
}
