//! Parses "fuzzy_like_this_field" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::fuzzy_like_this_query::parse_body;
use crate::query_parser::utils::{as_object, single_field};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "fuzzy_like_this_field")?;
    let (field_name, value) = single_field(object, "fuzzy_like_this_field")?;
    let inner_object = as_object(value, field_name)?;

    Ok(Query::FuzzyLikeThis(parse_body(context, "fuzzy_like_this_field", inner_object, Some(vec![field_name.to_string()]))?))
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::{Query, FuzzyLikeThis};
    use crate::query_parser::{QueryParser, QueryParseContext};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    #[test]
    fn test_fuzzy_like_this_field_query() {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        let query = parse(&QueryParseContext::new(&parser, &mappings), &json!({
            "name.first": {
                "like_text": "something",
                "max_query_terms": 12
            }
        }));

        let mut expected = FuzzyLikeThis::new(vec!["name.first".to_string()], "something");
        expected.max_query_terms = 12;
        assert_eq!(query, Ok(Query::FuzzyLikeThis(expected)));
    }

    #[test]
    fn test_fields_key_is_ignored() {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        let query = parse(&QueryParseContext::new(&parser, &mappings), &json!({
            "name.first": {
                "like_text": "something",
                "fields": ["name.last"]
            }
        }));

        assert_eq!(query, Ok(Query::FuzzyLikeThis(FuzzyLikeThis::new(vec!["name.first".to_string()], "something"))));
    }
}
