//! Parses "not" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "not")?;

    // {"filter": {...}} or the filter itself, options aside
    if !object.contains_key("filter") {
        let (kind, body) = single_field(object, "not")?;
        return Ok(Filter::Not(Box::new(context.parse_filter_kind(kind, body)?)));
    }

    let mut filter = None;
    for (key, value) in object.iter() {
        match key.as_str() {
            "filter" => {
                filter = Some(context.parse_filter(value)?);
            }
            _ => ignore_key("not", key),
        }
    }

    let filter = filter.ok_or(QueryParseError::MissingRequiredField {
        kind: "not",
        key: "filter",
    })?;

    Ok(Filter::Not(Box::new(filter)))
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value as Json};

    use crate::term::Term;
    use crate::filter::Filter;
    use crate::query_parser::{QueryParser, QueryParseContext, QueryParseError};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    fn parse_json(json: Json) -> Result<Filter, QueryParseError> {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        parse(&QueryParseContext::new(&parser, &mappings), &json)
    }

    #[test]
    fn test_not_filter() {
        let filter = parse_json(json!({
            "term": {"name.first": "shay1"}
        }));

        assert_eq!(filter, Ok(Filter::Not(Box::new(
            Filter::term("name.first", Term::from_string("shay1"))
        ))));
    }

    #[test]
    fn test_options_next_to_filter() {
        let filter = parse_json(json!({
            "term": {"name.first": "shay1"},
            "_cache": true
        }));

        assert_eq!(filter, Ok(Filter::Not(Box::new(
            Filter::term("name.first", Term::from_string("shay1"))
        ))));
    }

    #[test]
    fn test_gives_error_for_two_filters() {
        let filter = parse_json(json!({
            "term": {"name.first": "shay1"},
            "prefix": {"name.last": "ban"}
        }));

        assert_eq!(filter, Err(QueryParseError::ExpectedSingleKey("not".to_string())));
    }

    #[test]
    fn test_object_form() {
        let filter = parse_json(json!({
            "filter": {"term": {"name.first": "shay1"}},
            "_cache": true
        }));

        assert_eq!(filter, Ok(Filter::Not(Box::new(
            Filter::term("name.first", Term::from_string("shay1"))
        ))));
    }

    #[test]
    fn test_gives_error_for_incorrect_type() {
        let filter = parse_json(json!([]));

        assert_eq!(filter, Err(QueryParseError::TypeMismatch {
            field: "not".to_string(),
            expected: "object",
            actual: "array".to_string(),
        }));
    }
}
