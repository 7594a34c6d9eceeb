use serde::Deserialize;


const GEOHASH_BASE32: &str = "0123456789bcdefghjkmnpqrstuvwxyz";


/// A point in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}


impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint {
            lat: lat,
            lon: lon,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
            && self.lat >= -90.0 && self.lat <= 90.0
            && self.lon >= -180.0 && self.lon <= 180.0
    }

    /// Decodes a geohash into the centre of its cell
    pub fn from_geohash(geohash: &str) -> Option<GeoPoint> {
        if geohash.is_empty() {
            return None;
        }

        let mut lat_range = (-90.0f64, 90.0f64);
        let mut lon_range = (-180.0f64, 180.0f64);
        let mut is_lon = true;

        for c in geohash.chars() {
            let bits = GEOHASH_BASE32.find(c.to_ascii_lowercase())?;

            for mask in [16, 8, 4, 2, 1] {
                let range = if is_lon { &mut lon_range } else { &mut lat_range };
                let mid = (range.0 + range.1) / 2.0;

                if bits & mask != 0 {
                    range.0 = mid;
                } else {
                    range.1 = mid;
                }

                is_lon = !is_lon;
            }
        }

        Some(GeoPoint {
            lat: (lat_range.0 + lat_range.1) / 2.0,
            lon: (lon_range.0 + lon_range.1) / 2.0,
        })
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "km", alias = "kilometers")]
    Kilometers,
    #[serde(rename = "mi", alias = "miles")]
    Miles,
}


impl DistanceUnit {
    pub fn from_name(name: &str) -> Option<DistanceUnit> {
        match name {
            "km" | "kilometers" => Some(DistanceUnit::Kilometers),
            "mi" | "miles" => Some(DistanceUnit::Miles),
            _ => None,
        }
    }

    pub fn to_kilometers(&self, distance: f64) -> f64 {
        match *self {
            DistanceUnit::Kilometers => distance,
            DistanceUnit::Miles => distance * 1.609344,
        }
    }

    /// Parses distances such as "12", "12km" or "12.5mi"
    ///
    /// Returns the unit written in the string, if there was one.
    pub fn parse_distance(text: &str) -> Option<(f64, Option<DistanceUnit>)> {
        let text = text.trim();
        let split_at = text.find(|c: char| c.is_ascii_alphabetic()).unwrap_or(text.len());
        let (number, unit) = text.split_at(split_at);

        let distance = number.trim().parse::<f64>().ok()?;
        if unit.is_empty() {
            return Some((distance, None));
        }

        DistanceUnit::from_name(unit).map(|unit| (distance, Some(unit)))
    }
}
