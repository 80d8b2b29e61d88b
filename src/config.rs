//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command-line overrides applied by the CLI.
//! [`Config::validate`] runs last.

use crate::app::models::{Coordinate, is_valid_latitude, is_valid_longitude};
use crate::app::services::maidenhead::maidenhead_to_coordinate;
use crate::app::services::map_builder::{HeatmapStyle, MapOptions};
use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_PATH, DEFAULT_TITLE,
    DEFAULT_ZOOM_START, ENV_OUTPUT, ENV_TITLE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Highest zoom level the tile providers serve
const MAX_ZOOM: u8 = 18;

/// Accepted logging levels
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Map output and composition
    pub map: MapConfig,
    /// Heatmap rendering
    pub heatmap: HeatmapStyle,
    /// Logging
    pub logging: LoggingConfig,
}

/// Map output and composition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Output HTML path
    pub output: PathBuf,
    /// Map title
    pub title: String,
    /// Draw a line through QSOs in log order
    pub connect: bool,
    /// Cluster markers
    pub cluster: bool,
    /// One layer per band
    pub layers_by_band: bool,
    /// One layer per mode
    pub layers_by_mode: bool,
    /// Global heatmap
    pub heatmap: bool,
    /// Heatmap per band
    pub heatmap_by_band: bool,
    /// Heatmap per mode
    pub heatmap_by_mode: bool,
    /// Time slider from QSO date and time
    pub time_slider: bool,
    /// Initial zoom level
    pub zoom_start: u8,
    /// Home QTH as a Maidenhead locator; wins over `home_lat`/`home_lon`
    pub home_grid: Option<String>,
    /// Home QTH latitude in decimal degrees
    pub home_lat: Option<f64>,
    /// Home QTH longitude in decimal degrees
    pub home_lon: Option<f64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: DEFAULT_TITLE.to_string(),
            connect: false,
            cluster: true,
            layers_by_band: false,
            layers_by_mode: false,
            heatmap: false,
            heatmap_by_band: false,
            heatmap_by_mode: false,
            time_slider: false,
            zoom_start: DEFAULT_ZOOM_START,
            home_grid: None,
            home_lat: None,
            home_lon: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when neither `RUST_LOG` nor `-v`/`-q` apply
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/adimap/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::configuration_parse(origin, e))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Defaults, then the optional file, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(output) = value(ENV_OUTPUT) {
            debug!("{} overrides output path", ENV_OUTPUT);
            self.map.output = PathBuf::from(output);
        }
        if let Some(title) = value(ENV_TITLE) {
            debug!("{} overrides title", ENV_TITLE);
            self.map.title = title;
        }
    }

    /// Check that settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.map.output.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }

        if self.map.zoom_start > MAX_ZOOM {
            return Err(Error::configuration(format!(
                "zoom_start must be at most {}, got {}",
                MAX_ZOOM, self.map.zoom_start
            )));
        }

        if self.heatmap.radius == 0 {
            return Err(Error::configuration("Heatmap radius must be greater than 0"));
        }

        if !(0.0..=1.0).contains(&self.heatmap.min_opacity) {
            return Err(Error::configuration(format!(
                "Heatmap min_opacity must be between 0 and 1, got {}",
                self.heatmap.min_opacity
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Home QTH coordinate, if configured
    ///
    /// A grid that does not convert, or latitude/longitude out of range, is an
    /// error. A lone latitude or longitude is ignored.
    pub fn home_location(&self) -> Result<Option<Coordinate>> {
        if let Some(grid) = self.map.home_grid.as_deref().filter(|g| !g.trim().is_empty()) {
            return maidenhead_to_coordinate(grid)
                .map(Some)
                .ok_or_else(|| Error::invalid_home(format!("Could not parse home grid '{}'", grid)));
        }

        match (self.map.home_lat, self.map.home_lon) {
            (Some(lat), Some(lon)) => {
                if !is_valid_latitude(lat) || !is_valid_longitude(lon) {
                    return Err(Error::invalid_home(format!(
                        "Home lat/lon out of range ({}, {})",
                        lat, lon
                    )));
                }
                Ok(Coordinate::new(lat, lon))
            }
            (Some(_), None) | (None, Some(_)) => {
                warn!("Ignoring home location: both latitude and longitude are required");
                Ok(None)
            }
            (None, None) => Ok(None),
        }
    }

    /// Options for the map builder
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            title: self.map.title.clone(),
            connect: self.map.connect,
            layers_by_band: self.map.layers_by_band,
            layers_by_mode: self.map.layers_by_mode,
            heatmap: self.map.heatmap,
            heatmap_by_band: self.map.heatmap_by_band,
            heatmap_by_mode: self.map.heatmap_by_mode,
            cluster: self.map.cluster,
            time_slider: self.map.time_slider,
            heatmap_style: self.heatmap.clone(),
            zoom_start: self.map.zoom_start,
        }
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.map.output = output.into();
        self
    }

    /// Set the map title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.map.title = title.into();
        self
    }

    /// Set the home QTH from a grid locator
    pub fn with_home_grid(mut self, grid: impl Into<String>) -> Self {
        self.map.home_grid = Some(grid.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.map.output, PathBuf::from("adi_map.html"));
        assert_eq!(config.map.title, "ADIF QSO Map");
        assert!(config.map.cluster);
        assert_eq!(config.heatmap.radius, 15);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [map]
            title = "Field Day"
            layers_by_band = true

            [heatmap]
            radius = 20
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.map.title, "Field Day");
        assert!(config.map.layers_by_band);
        assert!(config.map.cluster);
        assert_eq!(config.heatmap.radius, 20);
        assert_eq!(config.heatmap.blur, 25);
        assert_eq!(config.map.output, PathBuf::from("adi_map.html"));
    }

    #[test]
    fn test_invalid_toml_is_reported_with_origin() {
        let err = Config::from_toml_str("[map]\ncluster = \"yes\"", "bad.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigurationParse { ref path, .. } if path == "bad.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[map]\noutput = \"qsos.html\"\nconnect = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.map.output, PathBuf::from("qsos.html"));
        assert!(config.map.connect);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/adimap.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("ADIMAP_OUTPUT", "env.html"), ("ADIMAP_TITLE", "  ")]
            .into_iter()
            .collect();

        let mut config = Config::default().with_title("From file");
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.map.output, PathBuf::from("env.html"));
        assert_eq!(config.map.title, "From file");
    }

    #[test]
    fn test_validation_failures() {
        let mut config = Config::default();
        config.heatmap.min_opacity = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.heatmap.radius = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let config = Config::default().with_output("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_home_from_grid() {
        let home = Config::default().with_home_grid("FN20").home_location().unwrap().unwrap();
        assert_eq!(home.as_lat_lon(), (40.5, -75.0));

        let err = Config::default().with_home_grid("ZZ99").home_location().unwrap_err();
        assert!(err.to_string().contains("Could not parse home grid"));
    }

    #[test]
    fn test_home_grid_wins_over_lat_lon() {
        let mut config = Config::default().with_home_grid("JN58");
        config.map.home_lat = Some(0.0);
        config.map.home_lon = Some(0.0);

        let home = config.home_location().unwrap().unwrap();
        assert_eq!(home.as_lat_lon(), (48.5, 11.0));
    }

    #[test]
    fn test_home_from_lat_lon() {
        let mut config = Config::default();
        config.map.home_lat = Some(51.5);
        config.map.home_lon = Some(-0.1);
        assert_eq!(config.home_location().unwrap().unwrap().as_lat_lon(), (51.5, -0.1));

        config.map.home_lat = Some(91.0);
        let err = config.home_location().unwrap_err();
        assert!(err.to_string().contains("Home lat/lon out of range"));

        config.map.home_lon = None;
        assert!(config.home_location().unwrap().is_none());
    }

    #[test]
    fn test_map_options_follow_config() {
        let mut config = Config::default().with_title("Contest");
        config.map.cluster = false;
        config.map.time_slider = true;
        config.heatmap.blur = 10;

        let options = config.map_options();
        assert_eq!(options.title, "Contest");
        assert!(!options.cluster);
        assert!(options.time_slider);
        assert_eq!(options.heatmap_style.blur, 10);
    }
}
