//! CSV export of plotted records

use crate::app::models::ResolvedPoint;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Sorted union of field names across all records
pub fn csv_header(points: &[ResolvedPoint]) -> Vec<String> {
    let names: BTreeSet<&str> = points
        .iter()
        .flat_map(|p| p.record.fields.keys().map(String::as_str))
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Write plotted records as CSV to any writer
///
/// Fields a record lacks are written as empty cells. Returns the number of
/// data rows written.
pub fn write_csv_to<W: Write>(writer: W, points: &[ResolvedPoint]) -> std::result::Result<usize, csv::Error> {
    let header = csv_header(points);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&header)?;

    let mut row = StringRecord::with_capacity(0, header.len());
    for point in points {
        row.clear();
        for name in &header {
            row.push_field(point.record.fields.get(name).map(String::as_str).unwrap_or(""));
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(points.len())
}

/// Write plotted records as a UTF-8 CSV file
pub fn write_csv(path: &Path, points: &[ResolvedPoint]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create CSV file {}", path.display()), e))?;

    let rows = write_csv_to(file, points).map_err(|e| Error::csv_export(path.display().to_string(), e))?;
    info!("Exported {} QSOs to CSV {}", rows, path.display());
    Ok(rows)
}
