//! Parses "query" and "fquery" filters, which wrap a query

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    Ok(Filter::Query(Box::new(context.parse_query(json)?)))
}


/// `{"fquery": {"query": {...}, "_cache": true}}`
pub fn parse_fquery(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "fquery")?;

    let mut query = None;
    for (key, value) in object.iter() {
        match key.as_str() {
            "query" => {
                query = Some(context.parse_query(value)?);
            }
            _ => ignore_key("fquery", key),
        }
    }

    let query = query.ok_or(QueryParseError::MissingRequiredField {
        kind: "fquery",
        key: "query",
    })?;

    Ok(Filter::Query(Box::new(query)))
}
