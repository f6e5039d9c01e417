//! Rust and C each rewrite a variable owned by the other side.

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use unsafe_access_demos::{cross_boundary, report, DemoConfig, DEFAULT_CONFIG_FILE};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?.cross_boundary;

    let mut out = io::stdout().lock();
    report::render_managed_before(&mut out, config.managed_initial)?;
    // C writes to the same fd through its own buffer.
    out.flush()?;

    let result = cross_boundary::run(&config, true);

    report::render_cross_boundary(&mut out, &result)?;
    out.flush()?;
    cross_boundary::print_foreign_value();
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
