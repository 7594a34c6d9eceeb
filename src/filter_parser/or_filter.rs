//! Parses "or" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::filter_parser::and_filter::parse_filter_array;
use crate::query_parser::{QueryParseContext, QueryParseError};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    Ok(Filter::Or(parse_filter_array(context, "or", json)?))
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::term::Term;
    use crate::filter::Filter;
    use crate::query_parser::{QueryParser, QueryParseContext};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    #[test]
    fn test_or_filter() {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        let filter = parse(&QueryParseContext::new(&parser, &mappings), &json!([
            {"term": {"name.first": "shay1"}},
            {"term": {"name.first": "shay4"}}
        ]));

        assert_eq!(filter, Ok(Filter::Or(vec![
            Filter::term("name.first", Term::from_string("shay1")),
            Filter::term("name.first", Term::from_string("shay4")),
        ])));
    }

    #[test]
    fn test_object_form() {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        let filter = parse(&QueryParseContext::new(&parser, &mappings), &json!({
            "filters": [
                {"term": {"name.first": "shay1"}}
            ]
        }));

        assert_eq!(filter, Ok(Filter::Or(vec![
            Filter::term("name.first", Term::from_string("shay1")),
        ])));
    }
}
