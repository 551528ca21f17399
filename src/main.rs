mod cli;
mod config;
mod convert;
mod generate;
mod logging;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = generate::run(cli.generate) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
