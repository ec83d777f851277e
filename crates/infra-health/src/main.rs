//! infra-health - Entry Point
//!
//! Binary entry point for the host health-check tool. Parses the CLI,
//! delegates to the library `run` entry point, and maps the outcome to the
//! process exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Overall status OK |
//! | 1 | Overall status WARN |
//! | 2 | Overall status ERROR, or a fatal failure (config, report write) |

use clap::Parser;
use infra_health::run::{Cli, run};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("infra-health: {err}");
            std::process::exit(2);
        }
    }
}
