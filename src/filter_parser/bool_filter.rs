//! Parses "bool" filters

use serde_json::Value as Json;

use crate::filter::{Filter, FilterClause};
use crate::query::Occur;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_filter_list, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "bool")?;

    let mut clauses = Vec::new();

    for (key, value) in object.iter() {
        let occur = match key.as_str() {
            "must" => Occur::Must,
            "must_not" => Occur::MustNot,
            "should" => Occur::Should,
            _ => {
                ignore_key("bool", key);
                continue;
            }
        };

        for filter in parse_filter_list(context, value)? {
            clauses.push(FilterClause::new(occur, filter));
        }
    }

    Ok(Filter::Bool {
        clauses: clauses,
    })
}
