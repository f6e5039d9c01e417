//! Reads a neighbouring local through an out-of-bounds array pointer.

use colored::Colorize;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use unsafe_access_demos::{array_overrun, report, DemoConfig, DEFAULT_CONFIG_FILE};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;

    let result = array_overrun::run(&config.array_overrun);
    report::render_array_overrun(&mut io::stdout().lock(), &result)?;
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
