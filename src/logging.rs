// src/logging.rs
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Route `log` records to stderr so stdout carries only the report.
///
/// A second call is a no-op.
pub fn init(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Debug)
        .set_target_level(LevelFilter::Trace)
        .build();

    // Ignore the error if a logger is already installed.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
