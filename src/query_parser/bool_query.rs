//! Parses "bool" queries
//!
//! Clauses keep the order they were written in: key order first, then the
//! order within each array.

use serde_json::Value as Json;

use crate::query::{Query, BooleanClause, Occur};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_float, parse_bool, parse_u32, parse_query_list, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "bool")?;

    let mut clauses = Vec::new();
    let mut minimum_should_match = 0;
    let mut disable_coord = false;
    let mut boost = 1.0f32;

    for (key, value) in object.iter() {
        let occur = match key.as_str() {
            "must" => Occur::Must,
            "must_not" => Occur::MustNot,
            "should" => Occur::Should,
            "minimum_number_should_match" | "minimum_should_match" => {
                minimum_should_match = parse_u32(value, key)?;
                continue;
            }
            "disable_coord" => {
                disable_coord = parse_bool(value, "disable_coord")?;
                continue;
            }
            "boost" => {
                boost = parse_float(value, "boost")?;
                continue;
            }
            _ => {
                ignore_key("bool", key);
                continue;
            }
        };

        for query in parse_query_list(context, value)? {
            clauses.push(BooleanClause::new(occur, query));
        }
    }

    Ok(Query::Boolean {
        clauses: clauses,
        minimum_should_match: minimum_should_match,
        disable_coord: disable_coord,
        boost: boost,
    })
}
