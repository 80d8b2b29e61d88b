//! Core ADIF tokenizer
//!
//! Strips the optional header, splits the data section on `<EOR>` and scans
//! each chunk for `<NAME:LENGTH[:TYPE]>VALUE` tags.

use super::stats::{ParseResult, ParseStats};
use crate::app::models::{ContactRecord, FieldMap};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static END_OF_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<eoh>").expect("end-of-header pattern is valid"));

static END_OF_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<eor>").expect("end-of-record pattern is valid"));

// NAME, LENGTH, optional type code, then VALUE up to the next '<'
static FIELD_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z0-9_]+):([0-9]+)(?::[^>]*)?>([^<]*)").expect("field tag pattern is valid")
});

/// ADIF log parser
///
/// Stateless; one instance can parse any number of logs.
#[derive(Debug, Clone, Default)]
pub struct AdifParser;

impl AdifParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse ADIF text into records and statistics
    pub fn parse(&self, content: &str) -> ParseResult {
        let mut stats = ParseStats::new();

        let data = match END_OF_HEADER.find(content) {
            Some(marker) => {
                stats.header_found = true;
                &content[marker.end()..]
            }
            None => content,
        };

        let mut records = Vec::new();
        for chunk in END_OF_RECORD.split(data) {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            stats.chunks_seen += 1;

            let (fields, duplicates) = parse_record(chunk);
            stats.duplicate_fields += duplicates;

            if fields.is_empty() {
                stats.chunks_without_fields += 1;
                trace!("Ignoring chunk without tags: {:?}", chunk);
                continue;
            }

            records.push(ContactRecord::new(records.len(), fields));
        }

        stats.records_parsed = records.len();

        debug!(
            "Parsed {} records from {} chunks (header: {}, tagless chunks: {}, duplicate fields: {})",
            stats.records_parsed,
            stats.chunks_seen,
            stats.header_found,
            stats.chunks_without_fields,
            stats.duplicate_fields
        );

        ParseResult { records, stats }
    }
}

/// Parse ADIF text into records, discarding statistics
pub fn parse_adif(content: &str) -> Vec<ContactRecord> {
    AdifParser::new().parse(content).records
}

/// Scan one record chunk for tags
///
/// Returns the field mapping and the number of tags that overwrote an
/// earlier tag of the same name. Text that does not form a complete tag is
/// ignored.
pub fn parse_record(chunk: &str) -> (FieldMap, usize) {
    let mut fields = FieldMap::new();
    let mut duplicates = 0;

    for caps in FIELD_TAG.captures_iter(chunk) {
        let name = caps[1].to_uppercase();
        // Lengths too large for usize just mean "everything available"
        let length = caps[2].parse::<usize>().unwrap_or(usize::MAX);
        let value = take_chars(&caps[3], length).trim().to_string();

        if fields.insert(name, value).is_some() {
            duplicates += 1;
        }
    }

    (fields, duplicates)
}

/// First `count` characters of `value`, or all of it when shorter
fn take_chars(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
