//! Reduce parsed records to resolved points

use super::stats::{ReductionResult, ReductionStats};
use crate::app::models::{ContactRecord, ResolvedPoint};
use crate::app::services::coordinate_resolver::resolve;
use tracing::{debug, info};

/// Resolve every record, keeping input order
///
/// Records with a coordinate become [`ResolvedPoint`]s; the rest are moved,
/// unchanged, into [`ReductionResult::skipped`]. No record is reordered,
/// deduplicated or dropped.
pub fn reduce(records: Vec<ContactRecord>) -> ReductionResult {
    let mut stats = ReductionStats::new();
    let mut points = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        match resolve(&record) {
            Some(resolution) => {
                stats.record_resolved(resolution.source);
                points.push(ResolvedPoint {
                    coordinate: resolution.coordinate,
                    source: resolution.source,
                    record,
                });
            }
            None => {
                debug!(
                    "Skipping record {} ({}): no usable coordinate",
                    record.index,
                    record.call().unwrap_or("no call")
                );
                stats.record_skipped();
                skipped.push(record);
            }
        }
    }

    info!(
        "Located {} of {} records ({:.1}%), {} skipped",
        stats.resolved,
        stats.total_records,
        stats.success_rate(),
        stats.skipped
    );

    ReductionResult {
        points,
        skipped,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::CoordinateSource;
    use crate::app::services::adif_parser::parse_adif;

    #[test]
    fn test_reduce_two_records_in_order() {
        let records = parse_adif(concat!(
            "<CALL:5>TEST1<QSO_DATE:8>20250101<TIME_ON:4>1234<GRIDSquare:4>FN20<EOR>\n",
            "<CALL:5>TEST2<QSO_DATE:8>20250102<TIME_ON:4>2345<LAT:6>40.00N<LON:7>074.0W<EOR>\n",
        ));
        let result = reduce(records);

        assert_eq!(result.points.len(), 2);
        assert_eq!(result.stats.skipped, 0);
        assert!(result.skipped.is_empty());

        assert_eq!(result.points[0].record.call(), Some("TEST1"));
        assert_eq!(result.points[0].source, CoordinateSource::Grid);
        assert_eq!(result.points[0].coordinate.as_lat_lon(), (40.5, -75.0));

        assert_eq!(result.points[1].record.call(), Some("TEST2"));
        assert_eq!(result.points[1].source, CoordinateSource::LatLon);
        assert_eq!(result.points[1].coordinate.as_lat_lon(), (40.0, -74.0));
    }

    #[test]
    fn test_reduce_skips_unlocatable_records() {
        let records = parse_adif(concat!(
            "<CALL:4>AAAA<GRIDSQUARE:4>JN58<EOR>",
            "<CALL:4>BBBB<BAND:3>20m<EOR>",
            "<CALL:4>CCCC<GRIDSQUARE:3>FN2<EOR>",
            "<CALL:4>DDDD<LAT:3>10S<LON:3>20E<EOR>",
        ));
        let result = reduce(records);

        let calls: Vec<_> = result.points.iter().map(|p| p.record.call()).collect();
        assert_eq!(calls, vec![Some("AAAA"), Some("DDDD")]);

        let skipped: Vec<_> = result.skipped.iter().map(|r| r.index).collect();
        assert_eq!(skipped, vec![1, 2]);

        assert_eq!(
            result.stats,
            ReductionStats {
                total_records: 4,
                resolved: 2,
                skipped: 2,
                from_lat_lon: 1,
                from_grid: 1,
            }
        );
        assert_eq!(result.stats.success_rate(), 50.0);
    }

    #[test]
    fn test_reduce_keeps_duplicates() {
        let records = parse_adif("<CALL:4>K1AB<GRIDSQUARE:4>FN20<EOR><CALL:4>K1AB<GRIDSQUARE:4>FN20<EOR>");
        let result = reduce(records);

        assert_eq!(result.points.len(), 2);
        assert_eq!(result.points[0].record.index, 0);
        assert_eq!(result.points[1].record.index, 1);
    }

    #[test]
    fn test_reduce_nothing_plottable() {
        let records = parse_adif("<CALL:4>K1AB<EOR><CALL:4>W2CD<EOR>");
        let result = reduce(records);

        assert!(result.is_empty());
        assert_eq!(result.stats.skipped, 2);
        assert_eq!(result.stats.total_records, 2);
        assert_eq!(result.skipped.len(), 2);
    }

    #[test]
    fn test_reduce_empty_input() {
        let result = reduce(Vec::new());

        assert!(result.is_empty());
        assert_eq!(result.stats, ReductionStats::new());
        assert_eq!(result.stats.success_rate(), 0.0);
    }

    #[test]
    fn test_summary() {
        let result = reduce(parse_adif("<GRIDSQUARE:4>FN20<EOR><CALL:1>X<EOR>"));
        assert_eq!(
            result.summary(),
            "1 of 2 records located (0 from LAT/LON, 1 from grid), 1 skipped"
        );
    }
}
