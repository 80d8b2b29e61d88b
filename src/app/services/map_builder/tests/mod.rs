//! Test utilities for map builder testing
//!
//! This module provides helpers for building resolved points without going
//! through the parser.

use crate::app::models::{ContactRecord, Coordinate, CoordinateSource, FieldMap, ResolvedPoint};

mod popup_tests;

/// Build a resolved point at (lat, lon) with the given fields
pub fn create_point(index: usize, lat: f64, lon: f64, pairs: &[(&str, &str)]) -> ResolvedPoint {
    let fields: FieldMap = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    ResolvedPoint {
        coordinate: Coordinate::new(lat, lon).unwrap(),
        source: CoordinateSource::Grid,
        record: ContactRecord::new(index, fields),
    }
}

/// Four QSOs across two bands and three modes
pub fn create_mixed_points() -> Vec<ResolvedPoint> {
    vec![
        create_point(
            0,
            40.5,
            -75.0,
            &[("CALL", "K1ABC"), ("BAND", "20m"), ("MODE", "FT8"), ("QSO_DATE", "20250102"), ("TIME_ON", "1200")],
        ),
        create_point(
            1,
            48.5,
            11.0,
            &[("CALL", "DL1XYZ"), ("BAND", "40m"), ("MODE", "CW"), ("QSO_DATE", "20241231"), ("TIME_ON", "2359")],
        ),
        create_point(
            2,
            51.5,
            -0.1,
            &[("CALL", "G4ABC"), ("BAND", "20m"), ("MODE", "SSB"), ("QSO_DATE", "20250105")],
        ),
        create_point(3, -33.9, 151.2, &[("CALL", "K1ABC"), ("MODE", "FT8")]),
    ]
}
