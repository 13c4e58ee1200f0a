//! Mangen CLI binary.
//!
//! Thin wrapper around the library: parse arguments, initialize logging,
//! run, map the result to an exit code.

use clap::Parser;
use mangen::cli::{self, Cli};
use mangen::logging::init_logging;
use std::io::{self, Write};
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("{}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match cli::run(&cli, &mut out) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            1
        }
    };
    let _ = out.flush();
    process::exit(code);
}
