// autopop-cli/src/main.rs
//
// Entry point for the autopop binary.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging.
// - Running the conversion batch through autopop-core.
// - Printing any fatal error once and exiting with a failure status.

use autopop_cli::{Cli, logging, run_convert, terminal};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_convert(cli) {
        terminal::print_fatal(&e.to_string());
        process::exit(1);
    }
}
