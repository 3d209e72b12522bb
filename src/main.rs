use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use depass::cli::{handle_depass_command, DepassArgs};
use depass::config::{paths::DepassPaths, settings::Settings};

fn main() -> ExitCode {
    let args = DepassArgs::parse();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &DepassArgs) -> Result<ExitCode> {
    let paths = DepassPaths::new()?;
    let settings = Settings::load_or_default(&paths)
        .with_context(|| format!("Failed to load {}", paths.settings_file().display()))?;

    let status = handle_depass_command(args, &settings, &paths)?;

    Ok(ExitCode::from(status.exit_code()))
}
