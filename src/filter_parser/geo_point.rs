//! Reads geo points in the formats accepted by geo filters
//!
//! * `{"lat": 40, "lon": -70}`
//! * `[-70, 40]` (lon first, as in GeoJSON)
//! * `"40,-70"`
//! * a geohash, such as `"drm3btev3e86"`

use serde_json::Value as Json;

use crate::filter::GeoPoint;
use crate::query_parser::QueryParseError;
use crate::query_parser::utils::{parse_f64, json_type_name, ignore_key};


fn malformed(field_name: &str, json: &Json) -> QueryParseError {
    QueryParseError::MalformedGeoShape(format!("{:?} is not a valid point for {:?}", json.to_string(), field_name))
}


/// Fails for coordinates outside of -90..90 / -180..180
pub fn check_point(field_name: &str, point: GeoPoint) -> Result<GeoPoint, QueryParseError> {
    if !point.is_valid() {
        return Err(QueryParseError::MalformedGeoShape(
            format!("point ({}, {}) of {:?} is out of range", point.lat, point.lon, field_name)
        ));
    }

    Ok(point)
}


pub fn parse_geo_point(field_name: &str, json: &Json) -> Result<GeoPoint, QueryParseError> {
    let point = match *json {
        Json::Object(ref object) => {
            let mut lat = None;
            let mut lon = None;
            let mut geohash = None;

            for (key, value) in object.iter() {
                match key.as_str() {
                    "lat" => lat = Some(parse_f64(value, "lat")?),
                    "lon" => lon = Some(parse_f64(value, "lon")?),
                    "geohash" => geohash = value.as_str().and_then(GeoPoint::from_geohash),
                    _ => ignore_key(field_name, key),
                }
            }

            match (lat, lon, geohash) {
                (Some(lat), Some(lon), _) => GeoPoint::new(lat, lon),
                (_, _, Some(point)) => point,
                _ => return Err(malformed(field_name, json)),
            }
        }
        Json::Array(ref array) => {
            if array.len() != 2 {
                return Err(malformed(field_name, json));
            }

            let lon = parse_f64(&array[0], "lon")?;
            let lat = parse_f64(&array[1], "lat")?;
            GeoPoint::new(lat, lon)
        }
        Json::String(ref string) => {
            match string.split_once(',') {
                Some((lat, lon)) => {
                    let lat = lat.trim().parse::<f64>().map_err(|_| malformed(field_name, json))?;
                    let lon = lon.trim().parse::<f64>().map_err(|_| malformed(field_name, json))?;
                    GeoPoint::new(lat, lon)
                }
                None => GeoPoint::from_geohash(string.trim()).ok_or_else(|| malformed(field_name, json))?,
            }
        }
        _ => {
            return Err(QueryParseError::TypeMismatch {
                field: field_name.to_string(),
                expected: "geo point",
                actual: json_type_name(json).to_string(),
            });
        }
    };

    check_point(field_name, point)
}


/// Names of the fields holding the latitude and longitude of a geo point field
pub fn lat_lon_fields(field_name: &str) -> (String, String) {
    (format!("{}.lat", field_name), format!("{}.lon", field_name))
}
