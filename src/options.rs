// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<count> <word>` line per category, then the total
    #[default]
    Text,
    Json,
    Yaml,
}
