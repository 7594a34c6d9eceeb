//! Parses "range" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::term::Term;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, parse_bool, parse_float, ignore_key};


/// Bounds of a range, shared by the range query and the range filter
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBounds {
    pub lower: Option<Term>,
    pub upper: Option<Term>,
    pub include_lower: bool,
    pub include_upper: bool,
    pub boost: f32,
}


fn parse_bound(context: &QueryParseContext, field_name: &str, json: &Json) -> Result<Option<Term>, QueryParseError> {
    if json.is_null() {
        // Explicitly unbounded
        return Ok(None);
    }

    context.encode(field_name, json).map(Some)
}


pub fn parse_bounds(context: &QueryParseContext, kind: &str, field_name: &str, json: &Json) -> Result<RangeBounds, QueryParseError> {
    let object = as_object(json, field_name)?;

    let mut bounds = RangeBounds {
        lower: None,
        upper: None,
        include_lower: true,
        include_upper: true,
        boost: 1.0f32,
    };

    for (key, value) in object.iter() {
        match key.as_str() {
            "from" => {
                bounds.lower = parse_bound(context, field_name, value)?;
            }
            "to" => {
                bounds.upper = parse_bound(context, field_name, value)?;
            }
            "include_lower" => {
                bounds.include_lower = parse_bool(value, "include_lower")?;
            }
            "include_upper" => {
                bounds.include_upper = parse_bool(value, "include_upper")?;
            }
            "gt" => {
                bounds.lower = parse_bound(context, field_name, value)?;
                bounds.include_lower = false;
            }
            "gte" => {
                bounds.lower = parse_bound(context, field_name, value)?;
                bounds.include_lower = true;
            }
            "lt" => {
                bounds.upper = parse_bound(context, field_name, value)?;
                bounds.include_upper = false;
            }
            "lte" => {
                bounds.upper = parse_bound(context, field_name, value)?;
                bounds.include_upper = true;
            }
            "boost" => {
                bounds.boost = parse_float(value, "boost")?;
            }
            _ => ignore_key(kind, key),
        }
    }

    if bounds.lower.is_none() && bounds.upper.is_none() {
        return Err(QueryParseError::MalformedRange(field_name.to_string()));
    }

    Ok(bounds)
}


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "range")?;
    let (field_name, value) = single_field(object, "range")?;
    let bounds = parse_bounds(context, "range", field_name, value)?;

    Ok(Query::Range {
        field: field_name.to_string(),
        lower: bounds.lower,
        upper: bounds.upper,
        include_lower: bounds.include_lower,
        include_upper: bounds.include_upper,
        boost: bounds.boost,
    })
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value as Json};

    use crate::term::Term;
    use crate::query::Query;
    use crate::query_parser::{QueryParser, QueryParseContext, QueryParseError};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    fn parse_json(json: Json) -> Result<Query, QueryParseError> {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        parse(&QueryParseContext::new(&parser, &mappings), &json)
    }

    #[test]
    fn test_range_query() {
        let query = parse_json(json!({
            "age": {
                "from": 23,
                "to": 54,
                "include_lower": true,
                "include_upper": false
            }
        }));

        assert_eq!(query, Ok(Query::Range {
            field: "age".to_string(),
            lower: Some(Term::from_integer(23)),
            upper: Some(Term::from_integer(54)),
            include_lower: true,
            include_upper: false,
            boost: 1.0f32,
        }));
    }

    #[test]
    fn test_comparison_keys() {
        let query = parse_json(json!({
            "age": {
                "gt": 23,
                "lte": 54,
                "boost": 2.0
            }
        }));

        assert_eq!(query, Ok(Query::Range {
            field: "age".to_string(),
            lower: Some(Term::from_integer(23)),
            upper: Some(Term::from_integer(54)),
            include_lower: false,
            include_upper: true,
            boost: 2.0f32,
        }));
    }

    #[test]
    fn test_open_range() {
        let query = parse_json(json!({
            "age": {
                "from": null,
                "lt": 18
            }
        }));

        assert_eq!(query, Ok(Query::Range {
            field: "age".to_string(),
            lower: None,
            upper: Some(Term::from_integer(18)),
            include_lower: true,
            include_upper: false,
            boost: 1.0f32,
        }));
    }

    #[test]
    fn test_text_range() {
        let query = parse_json(json!({
            "name.first": {
                "from": "a",
                "to": "m"
            }
        }));

        assert_eq!(query, Ok(Query::Range {
            field: "name.first".to_string(),
            lower: Some(Term::from_string("a")),
            upper: Some(Term::from_string("m")),
            include_lower: true,
            include_upper: true,
            boost: 1.0f32,
        }));
    }

    #[test]
    fn test_gives_error_for_no_bounds() {
        let query = parse_json(json!({
            "age": {
                "include_lower": false
            }
        }));

        assert_eq!(query, Err(QueryParseError::MalformedRange("age".to_string())));
    }

    #[test]
    fn test_gives_error_for_bad_bound() {
        let query = parse_json(json!({
            "age": {
                "from": "young"
            }
        }));

        assert_eq!(query, Err(QueryParseError::TypeMismatch {
            field: "age".to_string(),
            expected: "integer",
            actual: "\"young\"".to_string(),
        }));
    }
}
