//! Parses "custom_boost_factor" queries

use serde_json::Value as Json;

use crate::query::{Query, ScoreFunction};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "custom_boost_factor")?;

    let mut query = None;
    let mut boost_factor = 1.0f32;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "query" => {
                query = Some(context.parse_query(value)?);
            }
            "boost_factor" => {
                boost_factor = parse_float(value, "boost_factor")?;
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("custom_boost_factor", key),
        }
    }

    let query = query.ok_or(QueryParseError::MissingRequiredField {
        kind: "custom_boost_factor",
        key: "query",
    })?;

    Ok(Query::FunctionScore {
        query: Box::new(query),
        function: ScoreFunction::BoostFactor(boost_factor),
        boost: boost,
    })
}
