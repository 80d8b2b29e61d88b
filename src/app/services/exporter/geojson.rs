//! GeoJSON export of plotted records

use crate::app::models::{FieldMap, ResolvedPoint};
use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// GeoJSON `Point` geometry, coordinates as `[lon, lat]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

/// GeoJSON `Feature` carrying the record's fields as properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: PointGeometry,
    pub properties: &'a FieldMap,
}

/// GeoJSON `FeatureCollection`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature<'a>>,
}

/// Build a feature collection borrowing from the points
pub fn feature_collection(points: &[ResolvedPoint]) -> FeatureCollection<'_> {
    FeatureCollection {
        kind: "FeatureCollection",
        features: points
            .iter()
            .map(|p| Feature {
                kind: "Feature",
                geometry: PointGeometry {
                    kind: "Point",
                    coordinates: [p.lon(), p.lat()],
                },
                properties: &p.record.fields,
            })
            .collect(),
    }
}

/// Write plotted records as a UTF-8 GeoJSON file
///
/// Non-ASCII text is written as-is, not as `\u` escapes.
pub fn write_geojson(path: &Path, points: &[ResolvedPoint]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create GeoJSON file {}", path.display()), e))?;
    let mut writer = std::io::BufWriter::new(file);

    let collection = feature_collection(points);
    serde_json::to_writer(&mut writer, &collection)
        .map_err(|e| Error::json(format!("Failed to write GeoJSON {}", path.display()), e))?;
    std::io::Write::flush(&mut writer)
        .map_err(|e| Error::io(format!("Failed to flush GeoJSON file {}", path.display()), e))?;

    info!("Exported {} QSOs to GeoJSON {}", points.len(), path.display());
    Ok(points.len())
}
