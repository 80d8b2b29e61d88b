//! Command implementations for the ADIF mapper CLI
//!
//! - `shared`: logging setup, layered configuration and input decoding
//! - `plot`: the parse, locate, compose and export workflow

pub mod plot;
pub mod shared;

pub use plot::PlotSummary;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for the ADIF mapper
pub fn run(args: Args) -> Result<PlotSummary> {
    args.validate()?;

    let config = shared::load_configuration(&args)?;
    shared::setup_logging(&args, &config)?;

    plot::run_plot(&args, &config)
}
