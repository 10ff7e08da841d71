mod cli;
mod config;
mod convert;
mod io;
mod logging;
mod percentiles_cmd;
mod resample_cmd;
mod threshold_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Percentiles(args) => percentiles_cmd::run(args),
        Command::Resample(args) => resample_cmd::run(args),
        Command::Threshold(args) => threshold_cmd::run(args),
    }
}
