//! Coordinate resolution for parsed contact records
//!
//! A record is located from explicit `LAT`/`LON` fields when both are present
//! and valid, otherwise from the first non-empty grid-square field. Failure at
//! any step yields `None`; nothing is clamped or repaired.

use crate::app::models::{
    ContactRecord, Coordinate, CoordinateSource, Resolution, is_valid_latitude,
    is_valid_longitude,
};
use crate::app::services::maidenhead::maidenhead_to_coordinate;
use crate::constants::{GRID_FIELDS, fields};
use tracing::trace;

/// Coordinate axis, selecting valid hemisphere letters and range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere letters as (positive, negative)
    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }

    fn in_range(self, value: f64) -> bool {
        match self {
            Axis::Latitude => is_valid_latitude(value),
            Axis::Longitude => is_valid_longitude(value),
        }
    }
}

/// Parse one coordinate value such as `40.00N`, `074.0W` or `-33.9`
///
/// A trailing letter must be a hemisphere of the given axis (`N`/`S` or
/// `E`/`W`, any case); `S` and `W` negate. The signed value must lie within
/// the axis range.
pub fn parse_coordinate(text: &str, axis: Axis) -> Option<f64> {
    let s = text.trim();
    let last = s.chars().last()?;

    let (number, negate) = if last.is_alphabetic() {
        let suffix = last.to_ascii_uppercase();
        let (positive, negative) = axis.hemispheres();
        let negate = if suffix == positive {
            false
        } else if suffix == negative {
            true
        } else {
            return None;
        };
        (&s[..s.len() - last.len_utf8()], negate)
    } else {
        (s, false)
    };

    let magnitude: f64 = number.trim().parse().ok()?;
    let value = if negate { -magnitude } else { magnitude };

    axis.in_range(value).then_some(value)
}

/// Parse a latitude/longitude pair; both must be valid
pub fn parse_lat_lon(lat: &str, lon: &str) -> Option<Coordinate> {
    let lat = parse_coordinate(lat, Axis::Latitude)?;
    let lon = parse_coordinate(lon, Axis::Longitude)?;
    Coordinate::new(lat, lon)
}

/// Resolve the best available coordinate for a record
///
/// # Examples
///
/// ```rust
/// use adimap::{ContactRecord, CoordinateSource, resolve};
///
/// let fields = [("GRIDSQUARE", "FN20"), ("LAT", "40.00N"), ("LON", "074.0W")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let record = ContactRecord::new(0, fields);
///
/// let resolution = resolve(&record).unwrap();
/// assert_eq!(resolution.source, CoordinateSource::LatLon);
/// assert_eq!(resolution.coordinate.as_lat_lon(), (40.0, -74.0));
/// ```
pub fn resolve(record: &ContactRecord) -> Option<Resolution> {
    if let (Some(lat), Some(lon)) = (record.get(fields::LAT), record.get(fields::LON)) {
        if let Some(coordinate) = parse_lat_lon(lat, lon) {
            return Some(Resolution {
                coordinate,
                source: CoordinateSource::LatLon,
            });
        }
        trace!(
            "Record {}: unusable LAT/LON {:?}/{:?}, trying grid",
            record.index, lat, lon
        );
    }

    let grid = GRID_FIELDS.iter().find_map(|name| record.get(name))?;
    match maidenhead_to_coordinate(grid) {
        Some(coordinate) => Some(Resolution {
            coordinate,
            source: CoordinateSource::Grid,
        }),
        None => {
            trace!("Record {}: invalid grid square {:?}", record.index, grid);
            None
        }
    }
}
