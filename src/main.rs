// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use word_tally::args::Args;
use word_tally::config::Config;
use word_tally::{app, logging};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_level);

    let stdout = std::io::stdout();
    match app::run(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
