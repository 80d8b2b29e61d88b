use adimap::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(summary) => {
            summary.print();
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}
