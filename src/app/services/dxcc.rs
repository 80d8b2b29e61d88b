//! Best-effort callsign prefix to country lookup
//!
//! A small, fixed prefix table with longest-prefix matching. This is a
//! heuristic for display purposes only and is not an authoritative DXCC
//! entity resolver: portable suffixes, special-event calls and most
//! entities are not covered.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Prefix to country name, grouped by region
const PREFIXES: &[(&str, &str)] = &[
    // North America
    ("K", "United States"),
    ("N", "United States"),
    ("W", "United States"),
    ("AA", "United States"),
    ("AB", "United States"),
    ("AC", "United States"),
    ("AD", "United States"),
    ("AE", "United States"),
    ("AF", "United States"),
    ("AG", "United States"),
    ("AI", "United States"),
    ("AJ", "United States"),
    ("AK", "United States"),
    ("AL", "United States"),
    ("VE", "Canada"),
    ("VA", "Canada"),
    ("VO", "Canada"),
    ("VY", "Canada"),
    ("XE", "Mexico"),
    // Europe
    ("G", "England"),
    ("M", "England"),
    ("GM", "Scotland"),
    ("GW", "Wales"),
    ("GI", "Northern Ireland"),
    ("GD", "Isle of Man"),
    ("GU", "Guernsey"),
    ("GJ", "Jersey"),
    ("DL", "Germany"),
    ("F", "France"),
    ("I", "Italy"),
    ("EA", "Spain"),
    ("CT", "Portugal"),
    ("OH", "Finland"),
    ("SM", "Sweden"),
    ("LA", "Norway"),
    ("OZ", "Denmark"),
    ("ON", "Belgium"),
    ("PA", "Netherlands"),
    ("OE", "Austria"),
    ("OK", "Czech Republic"),
    ("OM", "Slovak Republic"),
    ("SP", "Poland"),
    ("YU", "Serbia"),
    ("S5", "Slovenia"),
    ("9A", "Croatia"),
    ("HA", "Hungary"),
    ("YO", "Romania"),
    ("LZ", "Bulgaria"),
    ("SV", "Greece"),
    // Asia / Pacific
    ("JA", "Japan"),
    ("7J", "Japan"),
    ("7K", "Japan"),
    ("7M", "Japan"),
    ("VK", "Australia"),
    ("ZL", "New Zealand"),
    ("BY", "China"),
    ("VR", "Hong Kong"),
    ("HL", "Korea"),
    ("BV", "Taiwan"),
    ("9V", "Singapore"),
    ("VU", "India"),
    ("HS", "Thailand"),
    // South America
    ("PY", "Brazil"),
    ("LU", "Argentina"),
    ("CX", "Uruguay"),
    ("CE", "Chile"),
    // Africa / Middle East
    ("ZS", "South Africa"),
    ("SU", "Egypt"),
    ("A4", "Oman"),
    ("A6", "UAE"),
];

/// Immutable prefix table with longest-prefix matching
#[derive(Debug)]
pub struct PrefixTable {
    entries: HashMap<&'static str, &'static str>,
    longest_prefix: usize,
}

impl PrefixTable {
    /// Build a table from (prefix, country) pairs
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let entries: HashMap<_, _> = pairs.iter().copied().collect();
        let longest_prefix = entries.keys().map(|p| p.len()).max().unwrap_or(0);
        Self {
            entries,
            longest_prefix,
        }
    }

    /// Country for the longest table prefix of `callsign`
    pub fn lookup(&self, callsign: &str) -> Option<&'static str> {
        let call = callsign.trim().to_uppercase();
        if call.is_empty() {
            return None;
        }

        let max = self.longest_prefix.min(call.len());
        (1..=max)
            .rev()
            .filter_map(|len| call.get(..len))
            .find_map(|prefix| self.entries.get(prefix).copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static PREFIX_TABLE: LazyLock<PrefixTable> = LazyLock::new(|| PrefixTable::new(PREFIXES));

/// Best-effort country for a callsign using the built-in prefix table
pub fn lookup_country(callsign: &str) -> Option<&'static str> {
    PREFIX_TABLE.lookup(callsign)
}
