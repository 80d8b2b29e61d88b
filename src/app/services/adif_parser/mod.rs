//! ADIF parser for amateur-radio contact logs
//!
//! This module turns ADIF text into an ordered list of contact records, one
//! upper-cased field mapping per `<EOR>`-terminated chunk. Parsing never
//! fails: malformed tags are ignored and chunks without any tag produce no
//! record.
//!
//! ## Architecture
//!
//! - [`parser`] - Header stripping, record splitting and tag scanning
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use adimap::app::services::adif_parser::AdifParser;
//!
//! let text = "<CALL:5>K1ABC<GRIDSQUARE:4>FN20<EOR>";
//! let result = AdifParser::new().parse(text);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].call(), Some("K1ABC"));
//! ```

pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{AdifParser, parse_adif, parse_record};
pub use stats::{ParseResult, ParseStats};
