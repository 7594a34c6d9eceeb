//! Parses "fuzzy_like_this" queries

use serde_json::{Map, Value as Json};

use crate::query::{Query, FuzzyLikeThis};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_string, parse_field_list, parse_float, parse_min_similarity, parse_bool, parse_u32, ignore_key};


/// Reads the body shared by "fuzzy_like_this" and "fuzzy_like_this_field"
pub fn parse_body(context: &QueryParseContext, kind: &'static str, object: &Map<String, Json>, fields: Option<Vec<String>>) -> Result<FuzzyLikeThis, QueryParseError> {
    let field_key_allowed = fields.is_none();
    let mut flt = FuzzyLikeThis::new(fields.unwrap_or_else(|| vec![context.settings().default_field.clone()]), "");
    let mut like_text = None;

    for (key, value) in object.iter() {
        match key.as_str() {
            "fields" if field_key_allowed => {
                flt.fields = parse_field_list(value, "fields")?;
            }
            "like_text" => {
                like_text = Some(parse_string(value, "like_text")?);
            }
            "max_query_terms" => {
                flt.max_query_terms = parse_u32(value, "max_query_terms")?;
            }
            "min_similarity" => {
                flt.min_similarity = parse_min_similarity(value, "min_similarity")?;
            }
            "prefix_length" => {
                flt.prefix_length = parse_u32(value, "prefix_length")?;
            }
            "ignore_tf" => {
                flt.ignore_tf = parse_bool(value, "ignore_tf")?;
            }
            "boost" => {
                flt.boost = parse_float(value, "boost")?;
            }
            _ => ignore_key(kind, key),
        }
    }

    flt.like_text = like_text.ok_or(QueryParseError::MissingRequiredField {
        kind: kind,
        key: "like_text",
    })?;

    Ok(flt)
}


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "fuzzy_like_this")?;

    Ok(Query::FuzzyLikeThis(parse_body(context, "fuzzy_like_this", object, None)?))
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value as Json};

    use crate::query::{Query, FuzzyLikeThis};
    use crate::query_parser::{QueryParser, QueryParseContext, QueryParseError};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    fn parse_json(json: Json) -> Result<Query, QueryParseError> {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        parse(&QueryParseContext::new(&parser, &mappings), &json)
    }

    #[test]
    fn test_fuzzy_like_this_query() {
        let query = parse_json(json!({
            "fields": ["name.first", "name.last"],
            "like_text": "something",
            "max_query_terms": 12
        }));

        let mut expected = FuzzyLikeThis::new(vec!["name.first".to_string(), "name.last".to_string()], "something");
        expected.max_query_terms = 12;
        assert_eq!(query, Ok(Query::FuzzyLikeThis(expected)));
    }

    #[test]
    fn test_options() {
        let query = parse_json(json!({
            "like_text": "something",
            "min_similarity": 0.7,
            "prefix_length": 2,
            "ignore_tf": true,
            "boost": 1.5
        }));

        assert_eq!(query, Ok(Query::FuzzyLikeThis(FuzzyLikeThis {
            fields: vec!["_all".to_string()],
            like_text: "something".to_string(),
            max_query_terms: 25,
            min_similarity: 0.7f32,
            prefix_length: 2,
            ignore_tf: true,
            boost: 1.5f32,
        })));
    }

    #[test]
    fn test_gives_error_for_missing_like_text() {
        let query = parse_json(json!({
            "fields": ["name.first"]
        }));

        assert_eq!(query, Err(QueryParseError::MissingRequiredField {
            kind: "fuzzy_like_this",
            key: "like_text",
        }));
    }

    #[test]
    fn test_gives_error_for_out_of_range_min_similarity() {
        let query = parse_json(json!({
            "like_text": "something",
            "min_similarity": 5
        }));

        assert_eq!(query, Err(QueryParseError::TypeMismatch {
            field: "min_similarity".to_string(),
            expected: "number in (0, 1]",
            actual: "5".to_string(),
        }));
    }

    #[test]
    fn test_gives_error_for_empty_fields() {
        let query = parse_json(json!({
            "fields": [],
            "like_text": "something"
        }));

        assert_eq!(query, Err(QueryParseError::TypeMismatch {
            field: "fields".to_string(),
            expected: "non-empty array",
            actual: "[]".to_string(),
        }));
    }
}
