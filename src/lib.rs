//! ADIF Map Library
//!
//! A Rust library for turning amateur-radio contact logs in ADIF format into
//! geolocated records and interactive, layered HTML maps.
//!
//! This library provides tools for:
//! - Parsing ADIF text into per-contact field mappings
//! - Converting Maidenhead grid squares to cell-centre coordinates
//! - Resolving each contact to a coordinate with skip-on-failure semantics
//! - Composing band/mode layers, heatmaps, legends and a statistics panel
//! - Exporting plotted contacts as CSV and GeoJSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adif_parser;
        pub mod coordinate_resolver;
        pub mod dxcc;
        pub mod exporter;
        pub mod maidenhead;
        pub mod map_builder;
        pub mod record_reducer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ContactRecord, Coordinate, CoordinateSource, FieldMap, ResolvedPoint};
pub use app::services::adif_parser::parse_adif;
pub use app::services::coordinate_resolver::resolve;
pub use app::services::maidenhead::maidenhead_to_coordinate;
pub use app::services::record_reducer::reduce;
pub use config::Config;

/// Result type alias for ADIF map operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ADIF map operations
///
/// Parsing and coordinate resolution never fail; these variants cover the
/// outer surfaces (files, configuration, exports) and the run-level
/// "nothing to plot" condition.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file '{path}'")]
    ConfigurationParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Home QTH could not be turned into a coordinate
    #[error("Invalid home location: {message}")]
    InvalidHome { message: String },

    /// CSV export error
    #[error("CSV export error for '{path}'")]
    CsvExport {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// No record had a usable coordinate and no home location was given
    #[error(
        "No plottable QSO locations found (no LAT/LON or GRIDSQUARE) in {total_records} record(s)"
    )]
    NoPlottableRecords { total_records: usize },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn configuration_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigurationParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid home location error
    pub fn invalid_home(message: impl Into<String>) -> Self {
        Self::InvalidHome {
            message: message.into(),
        }
    }

    /// Create a CSV export error
    pub fn csv_export(path: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvExport {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON serialization error
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a no-plottable-records error
    pub fn no_plottable_records(total_records: usize) -> Self {
        Self::NoPlottableRecords { total_records }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
