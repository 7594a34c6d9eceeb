//! Parses "more_like_this" queries

use serde_json::{Map, Value as Json};

use crate::query::{Query, MoreLikeThis};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, parse_string, parse_string_list, parse_field_list, parse_float, parse_u32, ignore_key};


/// Reads the body shared by "more_like_this" and "more_like_this_field"
///
/// `fields` is `None` when the body may carry its own "fields" key.
pub fn parse_body(context: &QueryParseContext, kind: &'static str, object: &Map<String, Json>, fields: Option<Vec<String>>) -> Result<MoreLikeThis, QueryParseError> {
    let field_key_allowed = fields.is_none();
    let mut mlt = MoreLikeThis::new(fields.unwrap_or_else(|| vec![context.settings().default_field.clone()]), "");
    let mut like_text = None;

    for (key, value) in object.iter() {
        match key.as_str() {
            "fields" if field_key_allowed => {
                mlt.fields = parse_field_list(value, "fields")?;
            }
            "like_text" => {
                like_text = Some(parse_string(value, "like_text")?);
            }
            "percent_terms_to_match" => {
                mlt.percent_terms_to_match = parse_float(value, "percent_terms_to_match")?;
            }
            "min_term_freq" => {
                mlt.min_term_freq = parse_u32(value, "min_term_freq")?;
            }
            "max_query_terms" => {
                mlt.max_query_terms = parse_u32(value, "max_query_terms")?;
            }
            "stop_words" => {
                mlt.stop_words = parse_string_list(value, "stop_words")?;
            }
            "min_doc_freq" => {
                mlt.min_doc_freq = parse_u32(value, "min_doc_freq")?;
            }
            "max_doc_freq" => {
                mlt.max_doc_freq = Some(parse_u32(value, "max_doc_freq")?);
            }
            "min_word_len" | "min_word_length" => {
                mlt.min_word_len = parse_u32(value, key)?;
            }
            "max_word_len" | "max_word_length" => {
                mlt.max_word_len = parse_u32(value, key)?;
            }
            "boost_terms" => {
                mlt.boost_terms = Some(parse_float(value, "boost_terms")?);
            }
            "boost" => {
                mlt.boost = parse_float(value, "boost")?;
            }
            _ => ignore_key(kind, key),
        }
    }

    mlt.like_text = like_text.ok_or(QueryParseError::MissingRequiredField {
        kind: kind,
        key: "like_text",
    })?;

    Ok(mlt)
}


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Query, QueryParseError> {
    let object = as_object(json, "more_like_this")?;

    Ok(Query::MoreLikeThis(parse_body(context, "more_like_this", object, None)?))
}
