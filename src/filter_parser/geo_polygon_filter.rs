//! Parses "geo_polygon" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, type_mismatch, ignore_key};
use crate::filter_parser::geo_point::{parse_geo_point, lat_lon_fields};


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "geo_polygon")?;
    let (field_name, value) = single_field(object, "geo_polygon")?;
    let polygon_object = as_object(value, field_name)?;

    let mut points = None;

    for (key, val) in polygon_object.iter() {
        match key.as_str() {
            "points" => {
                let array = val.as_array().ok_or_else(|| type_mismatch("points", "array", val))?;
                points = Some(array.iter().map(|point| parse_geo_point(field_name, point)).collect::<Result<Vec<_>, _>>()?);
            }
            _ => ignore_key("geo_polygon", key),
        }
    }

    let points = points.ok_or(QueryParseError::MissingRequiredField {
        kind: "geo_polygon",
        key: "points",
    })?;

    if points.len() < 3 {
        return Err(QueryParseError::MalformedGeoShape(
            format!("polygon on {:?} needs at least 3 points, got {}", field_name, points.len())
        ));
    }

    let (lat_field, lon_field) = lat_lon_fields(field_name);

    Ok(Filter::GeoPolygon {
        lat_field: lat_field,
        lon_field: lon_field,
        points: points,
    })
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value as Json};

    use crate::filter::{Filter, GeoPoint};
    use crate::query_parser::{QueryParser, QueryParseContext, QueryParseError};
    use crate::query_parser::tests::person_mappings;

    use super::parse;

    fn parse_json(json: Json) -> Result<Filter, QueryParseError> {
        let parser = QueryParser::new();
        let mappings = person_mappings();
        parse(&QueryParseContext::new(&parser, &mappings), &json)
    }

    fn expected() -> Filter {
        Filter::GeoPolygon {
            lat_field: "location.lat".to_string(),
            lon_field: "location.lon".to_string(),
            points: vec![
                GeoPoint::new(40.0, -70.0),
                GeoPoint::new(30.0, -80.0),
                GeoPoint::new(20.0, -90.0),
            ],
        }
    }

    #[test]
    fn test_object_points() {
        let filter = parse_json(json!({
            "location": {
                "points": [
                    {"lat": 40, "lon": -70},
                    {"lat": 30, "lon": -80},
                    {"lat": 20, "lon": -90}
                ]
            }
        }));

        assert_eq!(filter, Ok(expected()));
    }

    #[test]
    fn test_mixed_point_formats() {
        let filter = parse_json(json!({
            "location": {
                "points": [
                    [-70, 40],
                    "30, -80",
                    {"lat": 20, "lon": -90}
                ]
            },
            "_name": "triangle"
        }));

        assert_eq!(filter, Ok(expected()));
    }

    #[test]
    fn test_gives_error_for_two_points() {
        let filter = parse_json(json!({
            "location": {
                "points": [
                    {"lat": 40, "lon": -70},
                    {"lat": 30, "lon": -80}
                ]
            }
        }));

        match filter {
            Err(QueryParseError::MalformedGeoShape(_)) => {}
            other => panic!("expected MalformedGeoShape, got {:?}", other),
        }
    }

    #[test]
    fn test_gives_error_for_missing_points() {
        let filter = parse_json(json!({
            "location": {}
        }));

        assert_eq!(filter, Err(QueryParseError::MissingRequiredField {
            kind: "geo_polygon",
            key: "points",
        }));
    }
}
