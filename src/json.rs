//! Reads JSON documents, rejecting objects that repeat a key
//!
//! `serde_json::Value` keeps only the last value of a repeated key, which
//! would silently drop clauses such as a second "must" in a bool query.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value as Json};


struct Document(Json);


impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON value")
            }

            fn visit_unit<E>(self) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::Null))
            }

            fn visit_none<E>(self) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::Null))
            }

            fn visit_bool<E>(self, value: bool) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::Bool(value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Document, E>
            where
                E: de::Error,
            {
                Number::from_f64(value)
                    .map(|number| Document(Json::Number(number)))
                    .ok_or_else(|| de::Error::custom(format!("{} is not a finite number", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::String(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> Result<Document, E>
            where
                E: de::Error,
            {
                Ok(Document(Json::String(value)))
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Document, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut array = Vec::new();

                while let Some(Document(item)) = seq.next_element()? {
                    array.push(item);
                }

                Ok(Document(Json::Array(array)))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Document, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut object = Map::new();

                while let Some(key) = map.next_key::<String>()? {
                    if object.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate key {:?}", key)));
                    }

                    let Document(value) = map.next_value()?;
                    object.insert(key, value);
                }

                Ok(Document(Json::Object(object)))
            }
        }

        deserializer.deserialize_any(DocumentVisitor)
    }
}


/// Parses a JSON document, failing if any object repeats a key
pub fn from_str(text: &str) -> Result<Json, serde_json::Error> {
    let Document(json) = serde_json::from_str(text)?;
    Ok(json)
}
