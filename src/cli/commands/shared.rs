//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading with CLI overrides, and
//! reading ADIF files that may not be valid UTF-8.

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging
///
/// `RUST_LOG` wins; otherwise the level comes from `-v`/`-q`, then from the
/// configuration.
pub fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args
        .get_log_level()
        .map(str::to_string)
        .unwrap_or_else(|| config.logging.level.to_lowercase());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", APP_NAME, log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
///
/// Flags only ever switch features on (or clustering off); absent options
/// leave the configured value alone. Giving any home option on the command
/// line replaces the configured home location as a whole.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(out) = &args.out {
        config.map.output = out.clone();
    }
    if let Some(title) = &args.title {
        config.map.title = title.clone();
    }

    config.map.connect |= args.connect;
    config.map.layers_by_band |= args.layers_by_band;
    config.map.layers_by_mode |= args.layers_by_mode;
    config.map.heatmap |= args.heatmap;
    config.map.heatmap_by_band |= args.heatmap_by_band;
    config.map.heatmap_by_mode |= args.heatmap_by_mode;
    config.map.time_slider |= args.time_slider;
    if args.no_cluster {
        config.map.cluster = false;
    }

    if args.home_grid.is_some() || args.home_lat.is_some() || args.home_lon.is_some() {
        config.map.home_grid = args.home_grid.clone();
        config.map.home_lat = args.home_lat;
        config.map.home_lon = args.home_lon;
    }
}

/// Decode log bytes as UTF-8, falling back to ISO-8859-1 byte by byte
pub fn decode_log_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("Input is not valid UTF-8, decoding as ISO-8859-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Read an ADIF file into text
pub fn read_log_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read ADIF file {}", path.display()), e))?;
    info!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_log_bytes(bytes))
}
