//! Parses "geo_distance" filters

use serde_json::Value as Json;

use crate::filter::{Filter, GeoPoint, DistanceUnit};
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, is_option_key, parse_f64, type_mismatch, ignore_key};
use crate::filter_parser::geo_point::{parse_geo_point, check_point, lat_lon_fields};


fn parse_distance(json: &Json) -> Result<(f64, Option<DistanceUnit>), QueryParseError> {
    let distance = match *json {
        Json::Number(ref number) => number.as_f64().map(|distance| (distance, None)),
        Json::String(ref string) => DistanceUnit::parse_distance(string),
        _ => return Err(type_mismatch("distance", "distance", json)),
    };

    match distance {
        Some((distance, unit)) if distance.is_finite() && distance >= 0.0 => Ok((distance, unit)),
        _ => Err(QueryParseError::MalformedGeoShape(format!("invalid distance {}", json))),
    }
}


fn parse_unit(json: &Json) -> Result<DistanceUnit, QueryParseError> {
    json.as_str().and_then(DistanceUnit::from_name).ok_or_else(|| QueryParseError::TypeMismatch {
        field: "unit".to_string(),
        expected: "distance unit",
        actual: json.to_string(),
    })
}


pub fn parse(context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "geo_distance")?;

    let mut distance = None;
    let mut unit = None;
    let mut center: Option<(&str, GeoPoint)> = None;
    let mut flat_lat: Option<(&str, f64)> = None;
    let mut flat_lon: Option<(&str, f64)> = None;

    for (key, value) in object.iter() {
        if is_option_key(key) {
            continue;
        }

        match key.as_str() {
            "distance" => {
                distance = Some(parse_distance(value)?);
            }
            "unit" => {
                unit = Some(parse_unit(value)?);
            }
            "distance_type" | "optimize_bbox" => ignore_key("geo_distance", key),
            _ => {
                let is_scalar = value.is_number() || value.is_string();

                // "location.lat": 40, "location.lon": -70
                match (key.strip_suffix(".lat"), key.strip_suffix(".lon")) {
                    (Some(field_name), _) if is_scalar => {
                        flat_lat = Some((field_name, parse_f64(value, key)?));
                    }
                    (_, Some(field_name)) if is_scalar => {
                        flat_lon = Some((field_name, parse_f64(value, key)?));
                    }
                    _ => {
                        if center.is_some() {
                            return Err(QueryParseError::ExpectedSingleKey("geo_distance".to_string()));
                        }

                        center = Some((key.as_str(), parse_geo_point(key, value)?));
                    }
                }
            }
        }
    }

    let center = match (center, flat_lat, flat_lon) {
        (Some(center), None, None) => center,
        (None, Some((lat_field, lat)), Some((lon_field, lon))) => {
            if lat_field != lon_field {
                return Err(QueryParseError::MalformedGeoShape(
                    format!("latitude of {:?} given with longitude of {:?}", lat_field, lon_field)
                ));
            }

            (lat_field, check_point(lat_field, GeoPoint::new(lat, lon))?)
        }
        (None, None, None) => {
            return Err(QueryParseError::MissingRequiredField {
                kind: "geo_distance",
                key: "field",
            });
        }
        (Some(_), _, _) => return Err(QueryParseError::ExpectedSingleKey("geo_distance".to_string())),
        (None, _, _) => {
            return Err(QueryParseError::MalformedGeoShape("point needs both a latitude and a longitude".to_string()));
        }
    };

    let (distance, distance_unit) = distance.ok_or(QueryParseError::MissingRequiredField {
        kind: "geo_distance",
        key: "distance",
    })?;

    // A unit written in the distance wins over the "unit" key
    let unit = distance_unit.or(unit).unwrap_or(context.settings().default_distance_unit);

    let (field_name, point) = center;
    let (lat_field, lon_field) = lat_lon_fields(field_name);

    Ok(Filter::GeoDistance {
        lat_field: lat_field,
        lon_field: lon_field,
        center: point,
        distance: distance,
        unit: unit,
    })
}
