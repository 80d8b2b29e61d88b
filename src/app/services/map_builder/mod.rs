//! Interactive map composition
//!
//! This module turns resolved points into a layered Leaflet map: one marker
//! layer per band or mode (or a single base layer), optional heatmaps, a
//! line through the QSOs in log order, a home marker, a legend, a log
//! statistics panel and an optional time slider.
//!
//! ## Architecture
//!
//! - [`options`] - Map composition options
//! - [`layers`] - Layer grouping, marker colours and legend
//! - [`popup`] - Popup and tooltip content with HTML escaping
//! - [`log_stats`] - Statistics panel contents
//! - [`builder`] - Assembly of the [`MapDocument`]
//! - [`template`] - HTML rendering
//!
//! ## Usage
//!
//! ```rust
//! use adimap::app::services::map_builder::{MapOptions, build_map};
//! use adimap::{parse_adif, reduce};
//!
//! let reduced = reduce(parse_adif("<CALL:5>K1ABC<BAND:3>20m<GRIDSQUARE:4>FN20<EOR>"));
//! let options = MapOptions {
//!     layers_by_band: true,
//!     ..MapOptions::default()
//! };
//!
//! let document = build_map(&reduced.points, None, &options, 1).unwrap();
//! assert_eq!(document.layers[0].name, "Band: 20M");
//!
//! let html = document.render_html().unwrap();
//! assert!(html.contains("K1ABC"));
//! ```

pub mod builder;
pub mod layers;
pub mod log_stats;
pub mod options;
pub mod popup;
pub mod template;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{MapDocument, MarkerLayer, build_map};
pub use layers::{Grouping, Legend, LegendEntry};
pub use log_stats::LogStats;
pub use options::{HeatmapStyle, MapOptions};
pub use popup::{escape_html, format_popup};
