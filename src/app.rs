use std::io::Write;

use word_tally_engine::RunReport;
use word_tally_ports::LineSource;
use word_tally_shared_kernel::ErrorContext;

use crate::config::Config;
use crate::error::Result;
use crate::presentation;

/// Open the input, tally it and write the report to `out`.
///
/// Nothing is dispatched if the input cannot be opened.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunReport> {
    let mut source =
        word_tally_infra::open_source(&config.input).context("failed to open input")?;
    let report = word_tally_engine::run(&config.engine, &mut source)
        .with_context(|| format!("failed to tally {}", source.origin()))?;
    presentation::write_report(out, source.origin(), &report, config.format)
        .context("failed to emit report")?;
    Ok(report)
}
