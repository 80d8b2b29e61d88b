//! Application constants for the ADIF mapper
//!
//! This module contains ADIF field names, colour tables, default values
//! and fixed map settings used throughout the application.

// =============================================================================
// ADIF Markers and Field Names
// =============================================================================

/// ADIF field names the pipeline reads
pub mod fields {
    pub const CALL: &str = "CALL";
    pub const QSO_DATE: &str = "QSO_DATE";
    pub const TIME_ON: &str = "TIME_ON";
    pub const BAND: &str = "BAND";
    pub const FREQ: &str = "FREQ";
    pub const MODE: &str = "MODE";
    pub const RST_SENT: &str = "RST_SENT";
    pub const RST_RCVD: &str = "RST_RCVD";
    pub const COUNTRY: &str = "COUNTRY";
    pub const GRIDSQUARE: &str = "GRIDSQUARE";
    pub const MY_GRIDSQUARE: &str = "MY_GRIDSQUARE";
    pub const LAT: &str = "LAT";
    pub const LON: &str = "LON";
}

/// Grid-square fields consulted by the resolver, in priority order
pub const GRID_FIELDS: &[&str] = &[fields::GRIDSQUARE, fields::MY_GRIDSQUARE];

/// Fields shown in a marker popup, in display order
pub const POPUP_FIELDS: &[&str] = &[
    fields::CALL,
    fields::QSO_DATE,
    fields::TIME_ON,
    fields::BAND,
    fields::FREQ,
    fields::MODE,
    fields::RST_SENT,
    fields::RST_RCVD,
    fields::COUNTRY,
    fields::GRIDSQUARE,
    fields::LAT,
    fields::LON,
];

/// Group key used when a record has no band or mode
pub const OTHER_GROUP: &str = "OTHER";

// =============================================================================
// Maidenhead Grid
// =============================================================================

/// Maidenhead cell sizes in degrees, as (longitude, latitude) per pair
pub mod maidenhead {
    pub const FIELD: (f64, f64) = (20.0, 10.0);
    pub const SQUARE: (f64, f64) = (2.0, 1.0);
    pub const SUBSQUARE: (f64, f64) = (2.0 / 24.0, 1.0 / 24.0);
    pub const EXTENDED: (f64, f64) = (2.0 / 240.0, 1.0 / 240.0);

    /// Last valid field letter (A..=R)
    pub const FIELD_MAX_LETTER: u8 = b'R';

    /// Last valid subsquare letter (A..=X)
    pub const SUBSQUARE_MAX_LETTER: u8 = b'X';
}

// =============================================================================
// Colours
// =============================================================================

/// Marker colour used when a band or mode has no entry
pub const DEFAULT_COLOR: &str = "gray";

/// Marker colour per band
pub const BAND_COLORS: &[(&str, &str)] = &[
    ("160M", "darkpurple"),
    ("80M", "darkred"),
    ("60M", "lightred"),
    ("40M", "orange"),
    ("30M", "beige"),
    ("20M", "blue"),
    ("17M", "lightblue"),
    ("15M", "green"),
    ("12M", "lightgreen"),
    ("10M", "cadetblue"),
    ("6M", "purple"),
    ("4M", "pink"),
    ("2M", "darkgreen"),
    ("1.25M", "lightgray"),
    ("70CM", "gray"),
    ("33CM", "black"),
    ("23CM", "darkblue"),
];

/// Marker colour per mode
pub const MODE_COLORS: &[(&str, &str)] = &[
    ("SSB", "blue"),
    ("CW", "darkred"),
    ("FT8", "green"),
    ("FT4", "purple"),
    ("FM", "orange"),
    ("RTTY", "darkpurple"),
    ("AM", "gray"),
];

/// Look up a colour in one of the colour tables
pub fn color_for(table: &[(&str, &'static str)], key: &str) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

// =============================================================================
// Map Defaults
// =============================================================================

/// Default output HTML path
pub const DEFAULT_OUTPUT_PATH: &str = "adi_map.html";

/// Default map title
pub const DEFAULT_TITLE: &str = "ADIF QSO Map";

/// Initial zoom level before bounds fitting
pub const DEFAULT_ZOOM_START: u8 = 2;

/// Padding in pixels applied when fitting bounds
pub const FIT_BOUNDS_PADDING: u16 = 25;

/// Maximum popup width in pixels
pub const POPUP_MAX_WIDTH: u16 = 350;

/// Heatmap defaults
pub mod heatmap {
    pub const RADIUS: u32 = 15;
    pub const BLUR: u32 = 25;
    pub const MIN_OPACITY: f64 = 0.2;
}

/// Base tile layers as (name, url template, attribution)
pub const TILE_LAYERS: &[(&str, &str, &str)] = &[
    (
        "OpenStreetMap",
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        "&copy; OpenStreetMap contributors",
    ),
    (
        "CartoDB Positron",
        "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        "&copy; OpenStreetMap contributors, &copy; CARTO",
    ),
    (
        "CartoDB Dark Matter",
        "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        "&copy; OpenStreetMap contributors, &copy; CARTO",
    ),
];

/// External callsign lookup services as (label, url prefix)
pub const LOOKUP_LINKS: &[(&str, &str)] = &[
    ("QRZ", "https://www.qrz.com/lookup/"),
    ("Club Log", "https://clublog.org/logsearch/"),
];

// =============================================================================
// Configuration
// =============================================================================

/// Application name used for config directories and log filters
pub const APP_NAME: &str = "adimap";

/// Config file name inside the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the output HTML path
pub const ENV_OUTPUT: &str = "ADIMAP_OUTPUT";

/// Environment variable overriding the map title
pub const ENV_TITLE: &str = "ADIMAP_TITLE";

/// Default logging level
pub const DEFAULT_LOG_LEVEL: &str = "warn";
