//! Layer grouping, marker colours and legend entries

use super::options::MapOptions;
use crate::app::models::{ContactRecord, ResolvedPoint};
use crate::constants::{BAND_COLORS, MODE_COLORS, color_for};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Base layer name when no grouping is active
pub const BASE_LAYER_NAME: &str = "QSOs";

/// How markers are split into layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Single layer, markers coloured by band
    None,
    /// One layer per band, markers coloured by mode
    ByBand,
    /// One layer per mode, markers coloured by mode
    ByMode,
}

impl Grouping {
    /// Pick the grouping; band layers win when both flags are set
    pub fn from_options(options: &MapOptions) -> Self {
        if options.layers_by_band {
            Grouping::ByBand
        } else if options.layers_by_mode {
            Grouping::ByMode
        } else {
            Grouping::None
        }
    }

    /// Layer key for a record
    pub fn key(&self, record: &ContactRecord) -> String {
        match self {
            Grouping::None => BASE_LAYER_NAME.to_string(),
            Grouping::ByBand => record.band_key(),
            Grouping::ByMode => record.mode_key(),
        }
    }

    /// Display name for a layer key
    pub fn layer_name(&self, key: &str) -> String {
        match self {
            Grouping::None => BASE_LAYER_NAME.to_string(),
            Grouping::ByBand => format!("Band: {}", key),
            Grouping::ByMode => format!("Mode: {}", key),
        }
    }

    /// Marker colour for a record
    pub fn marker_color(&self, record: &ContactRecord) -> &'static str {
        match self {
            Grouping::None => color_for(BAND_COLORS, &record.band()),
            Grouping::ByBand | Grouping::ByMode => color_for(MODE_COLORS, &record.mode()),
        }
    }

    /// Title of the legend matching the marker colouring
    pub fn legend_title(&self) -> &'static str {
        match self {
            Grouping::None => "Bands",
            Grouping::ByBand | Grouping::ByMode => "Modes",
        }
    }
}

/// One legend row
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Legend shown in the corner of the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Legend for the given grouping, sorted by label
    ///
    /// Records without a band (or mode) contribute no entry.
    pub fn for_points(grouping: Grouping, points: &[ResolvedPoint]) -> Self {
        let entries: BTreeSet<LegendEntry> = points
            .iter()
            .filter_map(|point| {
                let (label, table) = match grouping {
                    Grouping::None => (point.record.band(), BAND_COLORS),
                    Grouping::ByBand | Grouping::ByMode => (point.record.mode(), MODE_COLORS),
                };
                (!label.is_empty()).then(|| LegendEntry {
                    color: color_for(table, &label).to_string(),
                    label,
                })
            })
            .collect();

        Self {
            title: grouping.legend_title().to_string(),
            entries: entries.into_iter().collect(),
        }
    }
}

/// Group points by key, keeping groups and members in first-seen order
pub fn group_in_order<'a, F>(points: &'a [ResolvedPoint], key_fn: F) -> Vec<(String, Vec<&'a ResolvedPoint>)>
where
    F: Fn(&ResolvedPoint) -> String,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&ResolvedPoint>)> = Vec::new();

    for point in points {
        let key = key_fn(point);
        match positions.get(&key) {
            Some(&index) => groups[index].1.push(point),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![point]));
            }
        }
    }

    groups
}
