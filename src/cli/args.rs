//! Command-line argument definitions for the ADIF mapper
//!
//! This module defines the CLI interface using the clap derive API. Every
//! map option is optional here so that unset flags leave the configuration
//! file and environment values in place.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the ADIF mapper
///
/// Plots the QSOs of an ADIF log on an interactive HTML map, optionally
/// layered by band or mode, with heatmaps and CSV/GeoJSON exports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "adimap",
    version,
    about = "Plot QSOs from an ADIF log on an interactive HTML map",
    long_about = "Reads an ADIF (.adi) log, locates each QSO from its LAT/LON or Maidenhead \
                  grid square and writes a self-contained Leaflet map. Markers can be layered \
                  by band or mode, with optional heatmaps, a connecting path, a home QTH \
                  marker, a time slider and CSV/GeoJSON exports of the plotted QSOs."
)]
pub struct Args {
    /// Path to the ADIF .adi file
    #[arg(value_name = "ADI")]
    pub adi: PathBuf,

    /// Output HTML path (default: adi_map.html)
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Map title
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Draw a line connecting QSOs in log order
    #[arg(long = "connect")]
    pub connect: bool,

    /// Home QTH as a Maidenhead grid (e.g. FN20)
    #[arg(long = "home-grid", value_name = "GRID")]
    pub home_grid: Option<String>,

    /// Home QTH latitude (decimal degrees)
    #[arg(long = "home-lat", value_name = "DEG", allow_negative_numbers = true)]
    pub home_lat: Option<f64>,

    /// Home QTH longitude (decimal degrees)
    #[arg(long = "home-lon", value_name = "DEG", allow_negative_numbers = true)]
    pub home_lon: Option<f64>,

    /// Create a toggleable layer per band, markers coloured by mode
    #[arg(long = "layers-by-band")]
    pub layers_by_band: bool,

    /// Create a toggleable layer per mode (ignored with --layers-by-band)
    #[arg(long = "layers-by-mode")]
    pub layers_by_mode: bool,

    /// Add a global heatmap layer
    #[arg(long = "heatmap")]
    pub heatmap: bool,

    /// Add a heatmap per band
    #[arg(long = "heatmap-by-band")]
    pub heatmap_by_band: bool,

    /// Add a heatmap per mode
    #[arg(long = "heatmap-by-mode")]
    pub heatmap_by_mode: bool,

    /// Disable marker clustering
    #[arg(long = "no-cluster")]
    pub no_cluster: bool,

    /// Write plotted QSOs to a CSV file
    #[arg(long = "export-csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Write plotted QSOs to a GeoJSON file
    #[arg(long = "export-geojson", value_name = "PATH")]
    pub export_geojson: Option<PathBuf>,

    /// Add a time slider based on QSO date and time
    #[arg(long = "time-slider")]
    pub time_slider: bool,

    /// Configuration file (TOML)
    ///
    /// Defaults to adimap/config.toml in the user config directory when present.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.adi.exists() {
            return Err(Error::file_not_found(self.adi.display().to_string()));
        }

        if !self.adi.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.adi.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Log level requested on the command line, if any
    ///
    /// `None` means the configured level applies.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }
}
