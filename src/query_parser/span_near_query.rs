//! Parses "span_near" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, parse_bool, parse_u32, parse_span_clauses, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "span_near")?;

    let mut clauses = None;
    let mut slop = 0;
    let mut in_order = true;
    let mut collect_payloads = true;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        match key.as_str() {
            "clauses" => {
                clauses = Some(parse_span_clauses(context, "span_near", value)?);
            }
            "slop" => {
                slop = parse_u32(value, "slop")?;
            }
            "in_order" => {
                in_order = parse_bool(value, "in_order")?;
            }
            "collect_payloads" => {
                collect_payloads = parse_bool(value, "collect_payloads")?;
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
            }
            _ => ignore_key("span_near", key),
        }
    }

    let clauses = clauses.ok_or(QueryParseError::MissingRequiredField {
        kind: "span_near",
        key: "clauses",
    })?;

    Ok(Query::SpanNear {
        clauses: clauses,
        slop: slop,
        in_order: in_order,
        collect_payloads: collect_payloads,
        boost: boost,
    })
}
