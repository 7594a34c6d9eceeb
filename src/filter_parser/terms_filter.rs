//! Parses "terms" filters

use std::collections::BTreeSet;

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, is_option_key, type_mismatch, ignore_key};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "terms")?;

    let mut field = None;

    for (key, value) in object.iter() {
        if is_option_key(key) {
            continue;
        }

        match key.as_str() {
            "execution" | "minimum_match" => ignore_key("terms", key),
            _ => {
                if field.is_some() {
                    return Err(QueryParseError::ExpectedSingleKey("terms".to_string()));
                }

                field = Some((key.as_str(), value));
            }
        }
    }

    let (field_name, value) = field.ok_or(QueryParseError::MissingRequiredField {
        kind: "terms",
        key: "field",
    })?;

    let array = value.as_array().ok_or_else(|| type_mismatch(field_name, "array", value))?;
    if array.is_empty() {
        return Err(QueryParseError::TypeMismatch {
            field: field_name.to_string(),
            expected: "non-empty array",
            actual: value.to_string(),
        });
    }

    let mut terms = BTreeSet::new();
    for literal in array {
        terms.insert(context.encode(field_name, literal)?);
    }

    Ok(Filter::Terms {
        field: field_name.to_string(),
        terms: terms,
    })
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value as Json};
    use maplit::btreeset;

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
    fn test_terms_filter() {
        let filter = parse_json(json!({
            "name.last": ["banon", "kimchy"]
        }));

        assert_eq!(filter, Ok(Filter::Terms {
            field: "name.last".to_string(),
            terms: btreeset!{
                Term::from_string("banon"),
                Term::from_string("kimchy"),
            },
        }));
    }

    #[test]
    fn test_terms_are_sorted_and_deduplicated() {
        let filter = parse_json(json!({
            "name.last": ["kimchy", "banon", "kimchy"]
        })).unwrap();

        match filter {
            Filter::Terms{ref terms, ..} => {
                assert_eq!(terms.len(), 2);
                assert_eq!(terms.iter().next(), Some(&Term::from_string("banon")));
            }
            _ => panic!("expected a terms filter, got {:?}", filter),
        }
    }

    #[test]
    fn test_numeric_terms() {
        let filter = parse_json(json!({
            "age": [34, "35"],
            "execution": "plain",
            "_cache": false
        }));

        assert_eq!(filter, Ok(Filter::Terms {
            field: "age".to_string(),
            terms: btreeset!{
                Term::from_integer(34),
                Term::from_integer(35),
            },
        }));
    }

    #[test]
    fn test_gives_error_for_empty_terms() {
        let filter = parse_json(json!({
            "name.last": []
        }));

        assert_eq!(filter, Err(QueryParseError::TypeMismatch {
            field: "name.last".to_string(),
            expected: "non-empty array",
            actual: "[]".to_string(),
        }));
    }

    #[test]
    fn test_gives_error_for_two_fields() {
        let filter = parse_json(json!({
            "name.last": ["banon"],
            "name.first": ["shay"]
        }));

        assert_eq!(filter, Err(QueryParseError::ExpectedSingleKey("terms".to_string())));
    }
}
