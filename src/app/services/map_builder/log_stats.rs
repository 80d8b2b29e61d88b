//! Log statistics shown in the stats panel

use crate::app::models::ResolvedPoint;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Summary of the plotted QSOs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogStats {
    /// Number of plotted QSOs
    pub total: usize,
    /// Distinct non-empty callsigns
    pub unique_calls: usize,
    /// Earliest and latest valid QSO time
    pub first_qso: Option<NaiveDateTime>,
    pub last_qso: Option<NaiveDateTime>,
    /// QSO count per band key, sorted
    pub by_band: BTreeMap<String, usize>,
    /// QSO count per mode key, sorted
    pub by_mode: BTreeMap<String, usize>,
}

impl LogStats {
    pub fn from_points(points: &[ResolvedPoint]) -> Self {
        let mut calls = BTreeSet::new();
        let mut by_band = BTreeMap::new();
        let mut by_mode = BTreeMap::new();
        let mut first_qso: Option<NaiveDateTime> = None;
        let mut last_qso: Option<NaiveDateTime> = None;

        for point in points {
            let record = &point.record;
            if let Some(call) = record.call() {
                calls.insert(call);
            }

            *by_band.entry(record.band_key()).or_insert(0) += 1;
            *by_mode.entry(record.mode_key()).or_insert(0) += 1;

            if let Some(when) = record.qso_datetime() {
                first_qso = Some(first_qso.map_or(when, |t| t.min(when)));
                last_qso = Some(last_qso.map_or(when, |t| t.max(when)));
            }
        }

        Self {
            total: points.len(),
            unique_calls: calls.len(),
            first_qso,
            last_qso,
            by_band,
            by_mode,
        }
    }

    /// Date range as `YYYY-MM-DD → YYYY-MM-DD`, or `n/a` without valid dates
    pub fn date_range(&self) -> String {
        match (self.first_qso, self.last_qso) {
            (Some(first), Some(last)) => format!("{} → {}", first.date(), last.date()),
            _ => "n/a".to_string(),
        }
    }
}
