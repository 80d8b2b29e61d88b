//! Data models for ADIF map processing
//!
//! This module contains the core data structures for representing parsed
//! contacts, validated coordinates and the resolved points handed to the
//! map builder and exporters.

use crate::constants::{OTHER_GROUP, fields};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper-cased ADIF field name to trimmed value
///
/// Ordered so every serialization of a record is deterministic.
pub type FieldMap = BTreeMap<String, String>;

// =============================================================================
// Coordinate
// =============================================================================

/// A validated WGS84 position in decimal degrees
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Out-of-range or non-finite input never produces a `Coordinate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate, returning `None` if either axis is out of range
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if is_valid_latitude(lat) && is_valid_longitude(lon) {
            Some(Self { lat, lon })
        } else {
            None
        }
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Position as a (latitude, longitude) tuple
    pub fn as_lat_lon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Arithmetic mean of a set of coordinates
    pub fn centroid<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let (mut lat_sum, mut lon_sum, mut count) = (0.0, 0.0, 0usize);
        for coord in coords {
            lat_sum += coord.lat;
            lon_sum += coord.lon;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        Self::new(lat_sum / count as f64, lon_sum / count as f64)
    }
}

/// Check a latitude against [-90, 90]
pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// Check a longitude against [-180, 180]
pub fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

// =============================================================================
// Contact Record
// =============================================================================

/// One parsed QSO: its fields and its position in the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    /// Zero-based position in parse order
    pub index: usize,

    /// Upper-cased field name to trimmed value
    pub fields: FieldMap,
}

impl ContactRecord {
    pub fn new(index: usize, fields: FieldMap) -> Self {
        Self { index, fields }
    }

    /// Get a field value, treating empty strings as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Callsign, if present
    pub fn call(&self) -> Option<&str> {
        self.get(fields::CALL)
    }

    /// Upper-cased band, or `OTHER` when missing
    pub fn band_key(&self) -> String {
        group_key(self.fields.get(fields::BAND).map(String::as_str))
    }

    /// Upper-cased mode, or `OTHER` when missing
    pub fn mode_key(&self) -> String {
        group_key(self.fields.get(fields::MODE).map(String::as_str))
    }

    /// Upper-cased band, empty when missing
    pub fn band(&self) -> String {
        normalized(self.fields.get(fields::BAND).map(String::as_str))
    }

    /// Upper-cased mode, empty when missing
    pub fn mode(&self) -> String {
        normalized(self.fields.get(fields::MODE).map(String::as_str))
    }

    /// QSO start time built from `QSO_DATE` (YYYYMMDD) and `TIME_ON` (HHMM[SS])
    ///
    /// Missing time components default to zero. Returns `None` when the date is
    /// not exactly eight characters or the result is not a real calendar time.
    pub fn qso_datetime(&self) -> Option<NaiveDateTime> {
        let date = self.fields.get(fields::QSO_DATE)?.trim();
        if date.chars().count() != 8 || !date.is_ascii() {
            return None;
        }

        let time = self
            .fields
            .get(fields::TIME_ON)
            .map(|t| t.trim())
            .unwrap_or("");

        let stamp = format!(
            "{}-{}-{}T{}:{}:{}",
            &date[0..4],
            &date[4..6],
            &date[6..8],
            time_part(time, 0),
            time_part(time, 2),
            time_part(time, 4)
        );
        NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S").ok()
    }
}

fn time_part(time: &str, start: usize) -> &str {
    time.get(start..start + 2).unwrap_or("00")
}

fn normalized(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_uppercase()).unwrap_or_default()
}

fn group_key(value: Option<&str>) -> String {
    let key = normalized(value);
    if key.is_empty() {
        OTHER_GROUP.to_string()
    } else {
        key
    }
}

// =============================================================================
// Resolution Results
// =============================================================================

/// Where a resolved coordinate came from
///
/// Diagnostic only; no behaviour depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSource {
    /// Explicit `LAT`/`LON` fields
    LatLon,
    /// Maidenhead grid square
    Grid,
}

/// Output of coordinate resolution for one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub coordinate: Coordinate,
    pub source: CoordinateSource,
}

/// A record paired with its resolved coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPoint {
    pub coordinate: Coordinate,
    pub source: CoordinateSource,
    pub record: ContactRecord,
}

impl ResolvedPoint {
    pub fn lat(&self) -> f64 {
        self.coordinate.lat()
    }

    pub fn lon(&self) -> f64 {
        self.coordinate.lon()
    }
}
