//! Parses "more_like_this_field" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::more_like_this_query::parse_body;
use crate::query_parser::utils::{as_object, single_field};


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "more_like_this_field")?;
    let (field_name, value) = single_field(object, "more_like_this_field")?;
    let inner_object = as_object(value, field_name)?;

    Ok(Query::MoreLikeThis(parse_body(context, "more_like_this_field", inner_object, Some(vec![field_name.to_string()]))?))
}
