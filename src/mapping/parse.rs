//! Builds a `MappingRegistry` from an Elasticsearch-style mapping document

use serde_json::Value as Json;
use thiserror::Error;

use crate::mapping::{MappingRegistry, FieldType, NumericType};


#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingParseError {
    #[error("expected an object")]
    ExpectedObject,
    #[error("expected a string")]
    ExpectedString,
    #[error("expected key {0:?}")]
    ExpectedKey(String),
    #[error("unrecognised field type {0:?}")]
    UnrecognisedFieldType(String),
    #[error("in {0:?}: {1}")]
    NestedMappingParseError(String, Box<MappingParseError>),
}


fn parse_field_type(field_type_str: &str) -> Result<Option<FieldType>, MappingParseError> {
    let field_type = match field_type_str {
        "string" | "text" | "keyword" => FieldType::Text,
        "byte" => FieldType::Numeric(NumericType::Integer { bits: 8 }),
        "short" => FieldType::Numeric(NumericType::Integer { bits: 16 }),
        "integer" => FieldType::Numeric(NumericType::Integer { bits: 32 }),
        "long" => FieldType::Numeric(NumericType::Integer { bits: 64 }),
        "float" => FieldType::Numeric(NumericType::Float { bits: 32 }),
        "double" => FieldType::Numeric(NumericType::Float { bits: 64 }),
        "date" => FieldType::Date,
        "boolean" => FieldType::Boolean,
        "geo_point" => FieldType::GeoPoint,
        "object" | "nested" => return Ok(None),
        _ => return Err(MappingParseError::UnrecognisedFieldType(field_type_str.to_string())),
    };

    Ok(Some(field_type))
}


fn parse_properties(registry: &mut MappingRegistry, prefix: &str, json: &Json) -> Result<(), MappingParseError> {
    let properties_object = json.as_object().ok_or(MappingParseError::ExpectedObject)?;

    for (prop_name, prop_json) in properties_object {
        let path = if prefix.is_empty() {
            prop_name.clone()
        } else {
            format!("{}.{}", prefix, prop_name)
        };

        parse_property(registry, &path, prop_json)
            .map_err(|e| MappingParseError::NestedMappingParseError(path.clone(), Box::new(e)))?;
    }

    Ok(())
}


fn parse_property(registry: &mut MappingRegistry, path: &str, json: &Json) -> Result<(), MappingParseError> {
    let prop_object = json.as_object().ok_or(MappingParseError::ExpectedObject)?;

    let field_type = match prop_object.get("type") {
        Some(type_json) => {
            let type_str = type_json.as_str().ok_or(MappingParseError::ExpectedString)?;
            parse_field_type(type_str)?
        }
        None => {
            // Properties without a type are objects
            if prop_object.contains_key("properties") {
                None
            } else {
                return Err(MappingParseError::ExpectedKey("type".to_string()));
            }
        }
    };

    match field_type {
        Some(field_type) => {
            registry.insert(path, field_type);
        }
        None => {
            let properties_json = prop_object.get("properties").ok_or_else(|| MappingParseError::ExpectedKey("properties".to_string()))?;
            parse_properties(registry, path, properties_json)?;
        }
    }

    Ok(())
}


/// Parses a mapping document
///
/// Accepts either `{"properties": {...}}` or the same wrapped in a single
/// type name, `{"person": {"properties": {...}}}`.
pub fn parse(json: &Json) -> Result<MappingRegistry, MappingParseError> {
    let mapping_object = json.as_object().ok_or(MappingParseError::ExpectedObject)?;
    let mut registry = MappingRegistry::new();

    if let Some(properties_json) = mapping_object.get("properties") {
        parse_properties(&mut registry, "", properties_json)?;
        return Ok(registry);
    }

    if mapping_object.len() == 1 {
        if let Some((type_name, type_json)) = mapping_object.iter().next() {
            let type_object = type_json.as_object().ok_or(MappingParseError::ExpectedObject)?;
            let properties_json = type_object.get("properties").ok_or_else(|| MappingParseError::ExpectedKey("properties".to_string()))?;
            parse_properties(&mut registry, "", properties_json)
                .map_err(|e| MappingParseError::NestedMappingParseError(type_name.clone(), Box::new(e)))?;
            return Ok(registry);
        }
    }

    Err(MappingParseError::ExpectedKey("properties".to_string()))
}
