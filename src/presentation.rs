// src/presentation.rs
use std::io::Write;

use serde::Serialize;
use word_tally_domain::TallyCounts;
use word_tally_engine::RunReport;
use word_tally_shared_kernel::Result;

use crate::options::OutputFormat;

#[derive(Serialize)]
struct ReportDocument<'a> {
    source: &'a str,
    counts: &'a TallyCounts,
    lines: usize,
    workers: usize,
}

/// Write the final report for `source` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    source: &str,
    report: &RunReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, &report.counts)?,
        OutputFormat::Json => {
            let doc = document(source, report);
            let json = serde_json::to_string_pretty(&doc)?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Yaml => {
            let doc = document(source, report);
            let yaml = serde_yaml::to_string(&doc)?;
            write!(out, "{yaml}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn document<'a>(source: &'a str, report: &'a RunReport) -> ReportDocument<'a> {
    ReportDocument {
        source,
        counts: &report.counts,
        lines: report.lines,
        workers: report.workers,
    }
}

fn write_text<W: Write>(out: &mut W, counts: &TallyCounts) -> std::io::Result<()> {
    for (category, count) in counts.by_category() {
        writeln!(out, "{count} {category}")?;
    }
    writeln!(out, "Total word count = {}", counts.total)
}
