// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;
use word_tally_engine::config::{Config as EngineConfig, ConfigBuilder as EngineConfigBuilder};
use word_tally_engine::options::PoolKind;
use word_tally_shared_kernel::ConfigError;

use crate::args::Args;
use crate::options::OutputFormat;

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub engine: EngineConfig,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let log_level = log_level_from_args(&args);

        let mut builder = EngineConfigBuilder::default();
        if args.sequential {
            builder.pool(PoolKind::Inline);
        }
        if let Some(jobs) = args.jobs {
            builder.jobs(jobs);
        }
        let engine = builder
            .build()
            .map_err(|e| ConfigError::InvalidConfiguration { reason: e.to_string() })?;
        engine.validate()?;

        Ok(Self {
            input: args.path,
            engine,
            format: args.format,
            log_level,
        })
    }
}

fn log_level_from_args(args: &Args) -> LevelFilter {
    if args.quiet {
        return LevelFilter::Error;
    }
    match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
