//! Compiles Elasticsearch-style JSON query documents into typed query and
//! filter trees
//!
//! ```
//! use serde_json::json;
//! use querydsl::{compile, MappingRegistry, Query, Term};
//! use querydsl::mapping::FieldType;
//!
//! let mut mappings = MappingRegistry::new();
//! mappings.insert("name.first", FieldType::Text);
//!
//! let query = compile(&mappings, &json!({"term": {"name.first": "shay"}})).unwrap();
//! assert_eq!(query, Query::term("name.first", Term::from_string("shay")));
//! ```

pub mod term;
pub mod mapping;
pub mod json;
pub mod analysis;
pub mod codec;
pub mod settings;
pub mod query;
pub mod filter;
pub mod query_parser;
pub mod filter_parser;
pub mod logger;

use serde_json::Value as Json;

pub use crate::term::Term;
pub use crate::mapping::{MappingRegistry, FieldTypeResolver};
pub use crate::settings::ParserSettings;
pub use crate::query::Query;
pub use crate::filter::Filter;
pub use crate::query_parser::{QueryParser, QueryParseError};


/// Compiles a query document with the default parser and settings
pub fn compile(mappings: &dyn FieldTypeResolver, json: &Json) -> Result<Query, QueryParseError> {
    QueryParser::new().parse(mappings, json)
}
