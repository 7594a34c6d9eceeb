//! Field type resolution
//!
//! The query parser never looks at a schema directly. It asks a
//! `FieldTypeResolver` what type a field has and encodes literals accordingly.

pub mod parse;

use std::collections::HashMap;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    Integer { bits: u8 },
    Float { bits: u8 },
}


impl NumericType {
    pub fn integer() -> NumericType {
        NumericType::Integer { bits: 32 }
    }

    pub fn long() -> NumericType {
        NumericType::Integer { bits: 64 }
    }

    pub fn double() -> NumericType {
        NumericType::Float { bits: 64 }
    }

    /// Checks that an integer fits in the declared width
    pub fn accepts_integer(&self, value: i64) -> bool {
        match *self {
            NumericType::Integer { bits } if bits < 64 => {
                let max = (1i64 << (bits - 1)) - 1;
                let min = -(1i64 << (bits - 1));
                value >= min && value <= max
            }
            _ => true,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Numeric(NumericType),
    Date,
    Boolean,
    GeoPoint,
}


impl Default for FieldType {
    fn default() -> FieldType {
        FieldType::Text
    }
}


impl FieldType {
    pub fn name(&self) -> &'static str {
        match *self {
            FieldType::Text => "string",
            FieldType::Numeric(NumericType::Integer { .. }) => "integer",
            FieldType::Numeric(NumericType::Float { .. }) => "float",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::GeoPoint => "geo_point",
        }
    }

    /// Numeric and date fields are matched through range-capable terms
    pub fn is_range_encoded(&self) -> bool {
        matches!(*self, FieldType::Numeric(_) | FieldType::Date)
    }
}


/// Reports the declared type of a field
///
/// Implementations must be safe to read from several threads at once, a
/// single resolver is shared by every compile.
pub trait FieldTypeResolver: Send + Sync {
    fn resolve(&self, field_name: &str) -> FieldType;
}


/// Resolver used when no mapping is available. Every field is text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextOnly;


impl FieldTypeResolver for TextOnly {
    fn resolve(&self, _field_name: &str) -> FieldType {
        FieldType::Text
    }
}


#[derive(Debug, Default, Clone, PartialEq)]
pub struct MappingRegistry {
    fields: HashMap<String, FieldType>,
}


impl MappingRegistry {
    pub fn new() -> MappingRegistry {
        MappingRegistry::default()
    }

    pub fn insert(&mut self, field_name: &str, field_type: FieldType) -> Option<FieldType> {
        self.fields.insert(field_name.to_string(), field_type)
    }

    pub fn get(&self, field_name: &str) -> Option<FieldType> {
        self.fields.get(field_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}


impl FieldTypeResolver for MappingRegistry {
    fn resolve(&self, field_name: &str) -> FieldType {
        self.get(field_name).unwrap_or_default()
    }
}
