//! Parsing statistics and result structures for ADIF processing
//!
//! This module provides types for tracking what the tokenizer saw and
//! organizing parsed records for downstream coordinate resolution.

use crate::app::models::ContactRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed contact records in file order
    pub records: Vec<ContactRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
///
/// Diagnostic only; never influences which records are produced.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Whether an `<EOH>` marker was found
    pub header_found: bool,

    /// Number of non-blank chunks between `<EOR>` markers
    pub chunks_seen: usize,

    /// Number of records produced
    pub records_parsed: usize,

    /// Number of non-blank chunks that contained no tag
    pub chunks_without_fields: usize,

    /// Number of tags that overwrote an earlier tag of the same name
    pub duplicate_fields: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            header_found: false,
            chunks_seen: 0,
            records_parsed: 0,
            chunks_without_fields: 0,
            duplicate_fields: 0,
        }
    }

    /// Share of non-blank chunks that produced a record, as a percentage
    pub fn record_rate(&self) -> f64 {
        if self.chunks_seen == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.chunks_seen as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
