//! Export of plotted QSOs
//!
//! - [`csv_export`] - One CSV row per plotted record, header is the sorted
//!   union of all field names
//! - [`geojson`] - GeoJSON `FeatureCollection` of `Point` features

pub mod csv_export;
pub mod geojson;

pub use csv_export::{csv_header, write_csv, write_csv_to};
pub use geojson::{FeatureCollection, feature_collection, write_geojson};
