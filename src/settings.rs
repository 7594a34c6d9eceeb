use serde::Deserialize;
use serde_json;

use crate::filter::DistanceUnit;


/// Compiler settings
///
/// Usually left at their defaults. Can be loaded from a JSON settings
/// document, any key that is left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Maximum nesting of query and filter objects
    pub max_depth: usize,

    /// Field searched by "query_string" queries that don't name any fields
    pub default_field: String,

    /// Unit of "geo_distance" distances given without one
    pub default_distance_unit: DistanceUnit,
}


impl Default for ParserSettings {
    fn default() -> ParserSettings {
        ParserSettings {
            max_depth: 64,
            default_field: "_all".to_string(),
            default_distance_unit: DistanceUnit::Kilometers,
        }
    }
}


impl ParserSettings {
    pub fn from_json(json: &str) -> Result<ParserSettings, serde_json::Error> {
        serde_json::from_str(json)
    }
}
