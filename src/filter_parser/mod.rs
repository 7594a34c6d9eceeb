//! Parses Elasticsearch filter DSL
//!
//! Filters are dispatched through the same registry and context as queries,
//! see `QueryParseContext::parse_filter`.

pub mod geo_point;
pub mod term_filter;
pub mod terms_filter;
pub mod range_filter;
pub mod prefix_filter;
pub mod and_filter;
pub mod or_filter;
pub mod not_filter;
pub mod bool_filter;
pub mod query_filter;
pub mod geo_distance_filter;
pub mod geo_bounding_box_filter;
pub mod geo_polygon_filter;

use std::collections::HashMap;

use maplit::hashmap;

use crate::query_parser::FilterParseFn;


pub fn default_filter_parsers() -> HashMap<&'static str, FilterParseFn> {
    hashmap! {
        "term" => term_filter::parse as FilterParseFn,
        "terms" => terms_filter::parse,
        "in" => terms_filter::parse,
        "range" => range_filter::parse,
        "prefix" => prefix_filter::parse,
        "and" => and_filter::parse,
        "or" => or_filter::parse,
        "not" => not_filter::parse,
        "bool" => bool_filter::parse,
        "query" => query_filter::parse,
        "fquery" => query_filter::parse_fquery,
        "geo_distance" => geo_distance_filter::parse,
        "geo_bounding_box" => geo_bounding_box_filter::parse,
        "geo_polygon" => geo_polygon_filter::parse,
    }
}
