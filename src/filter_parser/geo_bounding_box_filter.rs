//! Parses "geo_bounding_box" filters

use serde_json::Value as Json;

use crate::filter::Filter;
use crate::query_parser::{QueryParseContext, QueryParseError};
use crate::query_parser::utils::{as_object, single_field, ignore_key};
use crate::filter_parser::geo_point::{parse_geo_point, lat_lon_fields};


pub fn parse(_context: &QueryParseContext, json: &Json) -> Result<Filter, QueryParseError> {
    let object = as_object(json, "geo_bounding_box")?;
    let (field_name, value) = single_field(object, "geo_bounding_box")?;
    let box_object = as_object(value, field_name)?;

    let mut top_left = None;
    let mut bottom_right = None;

    for (key, val) in box_object.iter() {
        match key.as_str() {
            "top_left" | "topLeft" => {
                top_left = Some(parse_geo_point(field_name, val)?);
            }
            "bottom_right" | "bottomRight" => {
                bottom_right = Some(parse_geo_point(field_name, val)?);
            }
            _ => ignore_key("geo_bounding_box", key),
        }
    }

    let top_left = top_left.ok_or(QueryParseError::MissingRequiredField {
        kind: "geo_bounding_box",
        key: "top_left",
    })?;
    let bottom_right = bottom_right.ok_or(QueryParseError::MissingRequiredField {
        kind: "geo_bounding_box",
        key: "bottom_right",
    })?;

    // Longitudes may wrap around the antimeridian, latitudes can't
    if top_left.lat < bottom_right.lat {
        return Err(QueryParseError::MalformedGeoShape(
            format!("top of {:?} bounding box is below its bottom", field_name)
        ));
    }

    let (lat_field, lon_field) = lat_lon_fields(field_name);

    Ok(Filter::GeoBoundingBox {
        lat_field: lat_field,
        lon_field: lon_field,
        top_left: top_left,
        bottom_right: bottom_right,
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
        Filter::GeoBoundingBox {
            lat_field: "location.lat".to_string(),
            lon_field: "location.lon".to_string(),
            top_left: GeoPoint::new(40.0, -70.0),
            bottom_right: GeoPoint::new(30.0, -80.0),
        }
    }

    #[test]
    fn test_object_points() {
        let filter = parse_json(json!({
            "location": {
                "top_left": {"lat": 40, "lon": -70},
                "bottom_right": {"lat": 30, "lon": -80}
            }
        }));

        assert_eq!(filter, Ok(expected()));
    }

    #[test]
    fn test_array_points() {
        let filter = parse_json(json!({
            "location": {
                "top_left": [-70, 40],
                "bottom_right": [-80, 30]
            }
        }));

        assert_eq!(filter, Ok(expected()));
    }

    #[test]
    fn test_string_points_camel_case() {
        let filter = parse_json(json!({
            "location": {
                "topLeft": "40, -70",
                "bottomRight": "30, -80"
            },
            "_cache": true
        }));

        assert_eq!(filter, Ok(expected()));
    }

    #[test]
    fn test_geohash_points() {
        let filter = parse_json(json!({
            "location": {
                "top_left": "drn5x1g8cu2y",
                "bottom_right": "30, -80"
            }
        })).unwrap();

        match filter {
            Filter::GeoBoundingBox{ref top_left, ..} => {
                assert!((top_left.lat - 40.0).abs() < 0.001);
                assert!((top_left.lon - -70.0).abs() < 0.001);
            }
            _ => panic!("expected a bounding box filter, got {:?}", filter),
        }
    }

    #[test]
    fn test_gives_error_for_missing_corner() {
        let filter = parse_json(json!({
            "location": {
                "top_left": {"lat": 40, "lon": -70}
            }
        }));

        assert_eq!(filter, Err(QueryParseError::MissingRequiredField {
            kind: "geo_bounding_box",
            key: "bottom_right",
        }));
    }

    #[test]
    fn test_gives_error_for_upside_down_box() {
        let filter = parse_json(json!({
            "location": {
                "top_left": {"lat": 30, "lon": -70},
                "bottom_right": {"lat": 40, "lon": -80}
            }
        }));

        match filter {
            Err(QueryParseError::MalformedGeoShape(_)) => {}
            other => panic!("expected MalformedGeoShape, got {:?}", other),
        }
    }
}
