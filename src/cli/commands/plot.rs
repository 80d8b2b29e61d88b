//! Plot command: parse, locate, compose, render and export

use crate::app::services::adif_parser::AdifParser;
use crate::app::services::exporter::{write_csv, write_geojson};
use crate::app::services::map_builder::build_map;
use crate::app::services::record_reducer::reduce;
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::path::PathBuf;
use tracing::{info, warn};

use super::shared::read_log_text;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    /// QSOs drawn on the map
    pub plotted: usize,
    /// Records without a usable coordinate
    pub skipped: usize,
    /// Written HTML map
    pub output: PathBuf,
    /// Written export files
    pub exports: Vec<PathBuf>,
}

impl PlotSummary {
    /// One-line result message
    pub fn message(&self) -> String {
        format!(
            "Saved map with {} QSOs to {}. Skipped {} record(s) without coordinates.",
            self.plotted,
            self.output.display(),
            self.skipped
        )
    }

    /// Print the result to stdout
    pub fn print(&self) {
        println!("{}", self.message());

        if self.skipped > 0 {
            println!(
                "  {} {}",
                "Skipped:".bright_yellow(),
                self.skipped.to_string().bright_yellow().bold()
            );
        }
        for export in &self.exports {
            println!(
                "  {} {}",
                "Exported:".bright_cyan(),
                export.display().to_string().bright_white()
            );
        }
    }
}

/// Run the full workflow for one ADIF file
pub fn run_plot(args: &Args, config: &Config) -> Result<PlotSummary> {
    let home = config.home_location()?;

    let text = read_log_text(&args.adi)?;
    let parsed = AdifParser::new().parse(&text);
    info!(
        "Parsed {} records from {}",
        parsed.stats.records_parsed,
        args.adi.display()
    );

    let reduced = reduce(parsed.records);
    info!("{}", reduced.summary());
    if reduced.is_empty() && home.is_some() {
        warn!("No QSO could be located; the map will only show the home QTH");
    }

    let document = build_map(
        &reduced.points,
        home,
        &config.map_options(),
        reduced.stats.total_records,
    )?;
    let html = document.render_html()?;

    let output = config.map.output.clone();
    std::fs::write(&output, html)
        .map_err(|e| Error::io(format!("Failed to write map {}", output.display()), e))?;
    info!("Wrote map to {}", output.display());

    let mut exports = Vec::new();
    if let Some(path) = &args.export_csv {
        write_csv(path, &reduced.points)?;
        exports.push(path.clone());
    }
    if let Some(path) = &args.export_geojson {
        write_geojson(path, &reduced.points)?;
        exports.push(path.clone());
    }

    Ok(PlotSummary {
        plotted: reduced.points.len(),
        skipped: reduced.stats.skipped,
        output,
        exports,
    })
}
