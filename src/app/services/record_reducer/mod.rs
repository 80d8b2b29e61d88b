//! Record reduction for parsed ADIF contacts
//!
//! Folds parsed records and the coordinate resolver together into an ordered
//! list of resolved points. Records without a usable coordinate are counted
//! and set aside; they never abort the run.
//!
//! - [`reducer`] - The reduction itself
//! - [`stats`] - Reduction statistics and result structures
//!
//! # Example Usage
//!
//! ```rust
//! use adimap::{parse_adif, reduce};
//!
//! let records = parse_adif("<CALL:4>K1AB<GRIDSQUARE:4>FN20<EOR><CALL:4>W2CD<EOR>");
//! let result = reduce(records);
//!
//! assert_eq!(result.points.len(), 1);
//! assert_eq!(result.stats.skipped, 1);
//! assert_eq!(result.skipped[0].call(), Some("W2CD"));
//! ```

pub mod reducer;
pub mod stats;

pub use reducer::reduce;
pub use stats::{ReductionResult, ReductionStats};
