//! Reduction statistics and result structures
//!
//! This module provides types for tracking how many records were located,
//! by which method, and how many were skipped.

use crate::app::models::{ContactRecord, CoordinateSource, ResolvedPoint};

/// Statistics for record reduction
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct ReductionStats {
    /// Total number of input records
    pub total_records: usize,
    /// Records with a usable coordinate
    pub resolved: usize,
    /// Records without a usable coordinate
    pub skipped: usize,
    /// Resolved from explicit LAT/LON
    pub from_lat_lon: usize,
    /// Resolved from a grid square
    pub from_grid: usize,
}

impl ReductionStats {
    /// Create new empty reduction statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a resolved record
    pub fn record_resolved(&mut self, source: CoordinateSource) {
        self.total_records += 1;
        self.resolved += 1;
        match source {
            CoordinateSource::LatLon => self.from_lat_lon += 1,
            CoordinateSource::Grid => self.from_grid += 1,
        }
    }

    /// Count a skipped record
    pub fn record_skipped(&mut self) {
        self.total_records += 1;
        self.skipped += 1;
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.resolved as f64 / self.total_records as f64) * 100.0
        }
    }
}

/// Result of reducing records to resolved points
#[derive(Debug, Clone)]
pub struct ReductionResult {
    /// Resolved points in input order
    pub points: Vec<ResolvedPoint>,
    /// Records without a usable coordinate, in input order
    pub skipped: Vec<ContactRecord>,
    /// Reduction statistics
    pub stats: ReductionStats,
}

impl ReductionResult {
    /// True when nothing could be located
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} of {} records located ({} from LAT/LON, {} from grid), {} skipped",
            self.stats.resolved,
            self.stats.total_records,
            self.stats.from_lat_lon,
            self.stats.from_grid,
            self.stats.skipped
        )
    }
}
