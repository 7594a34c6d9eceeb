//! Filters restrict the set of matching documents without affecting scores

pub mod geo;

use std::collections::BTreeSet;

use crate::term::Term;
use crate::query::{Query, Occur};

pub use self::geo::{GeoPoint, DistanceUnit};


#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub occur: Occur,
    pub filter: Filter,
}


impl FilterClause {
    pub fn new(occur: Occur, filter: Filter) -> FilterClause {
        FilterClause {
            occur: occur,
            filter: filter,
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Term {
        field: String,
        term: Term,
    },
    Terms {
        field: String,
        terms: BTreeSet<Term>,
    },
    Range {
        field: String,
        lower: Option<Term>,
        upper: Option<Term>,
        include_lower: bool,
        include_upper: bool,
    },
    Prefix {
        field: String,
        value: String,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    Bool {
        clauses: Vec<FilterClause>,
    },
    Query(Box<Query>),
    GeoDistance {
        lat_field: String,
        lon_field: String,
        center: GeoPoint,
        distance: f64,
        unit: DistanceUnit,
    },
    GeoBoundingBox {
        lat_field: String,
        lon_field: String,
        top_left: GeoPoint,
        bottom_right: GeoPoint,
    },
    GeoPolygon {
        lat_field: String,
        lon_field: String,
        points: Vec<GeoPoint>,
    },
}


impl Filter {
    pub fn term(field: &str, term: Term) -> Filter {
        Filter::Term {
            field: field.to_string(),
            term: term,
        }
    }

    /// Matches a single value of a range-encoded field
    pub fn point_range(field: &str, term: Term) -> Filter {
        Filter::Range {
            field: field.to_string(),
            lower: Some(term.clone()),
            upper: Some(term),
            include_lower: true,
            include_upper: true,
        }
    }

    pub fn prefix(field: &str, value: &str) -> Filter {
        Filter::Prefix {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// The field this filter tests, for filters that test a single field
    pub fn field(&self) -> Option<&str> {
        match *self {
            Filter::Term{ref field, ..} |
            Filter::Terms{ref field, ..} |
            Filter::Range{ref field, ..} |
            Filter::Prefix{ref field, ..} => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn sub_filters(&self) -> Vec<&Filter> {
        match *self {
            Filter::And(ref filters) | Filter::Or(ref filters) => filters.iter().collect(),
            Filter::Not(ref filter) => vec![&**filter],
            Filter::Bool{ref clauses} => clauses.iter().map(|clause| &clause.filter).collect(),
            _ => Vec::new(),
        }
    }

    pub fn wrapped_query(&self) -> Option<&Query> {
        match *self {
            Filter::Query(ref query) => Some(&**query),
            _ => None,
        }
    }

    /// Lat/lon field names of geo filters
    pub fn geo_fields(&self) -> Option<(&str, &str)> {
        match *self {
            Filter::GeoDistance{ref lat_field, ref lon_field, ..} |
            Filter::GeoBoundingBox{ref lat_field, ref lon_field, ..} |
            Filter::GeoPolygon{ref lat_field, ref lon_field, ..} => Some((lat_field.as_str(), lon_field.as_str())),
            _ => None,
        }
    }
}
