// src/presentation.rs
use crate::config::ReportOptions;
use crate::error::Result;
use crate::options::ReportFormat;
use decomment_engine::progress::{Phase, ProgressSink};
use decomment_engine::stats::RunReport;
use std::fmt::Write;
use std::time::Duration;

/// Prints progress notifications to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn on_progress(&self, phase: Phase, percent: u8) {
        eprintln!("  {} : {percent}%", phase.label());
    }
}

/// Writes the run report to standard error, unless quiet.
///
/// # Errors
/// Returns an error if the report cannot be serialized.
pub fn print_report(report: &RunReport, options: ReportOptions) -> Result<()> {
    if options.quiet {
        return Ok(());
    }
    match options.format {
        ReportFormat::Text => eprint!("{}", render_text(report)),
        ReportFormat::Json => eprintln!("{}", render_json(report)?),
    }
    Ok(())
}

#[must_use]
pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    let stats = &report.stats;

    match &report.output {
        Some(path) => {
            let _ = writeln!(out, "[OK] output file: {}", path.display());
        }
        None => out.push_str("[OK] output: <stdout>\n"),
    }
    let _ = writeln!(
        out,
        "[OK] comments removed: {} (line {}, block {})",
        stats.comments(),
        stats.line_comments,
        stats.block_comments
    );
    let _ = writeln!(
        out,
        "[OK] bytes: {} -> {}, lines: {} -> {}",
        stats.bytes_in, stats.bytes_out, report.lines_in, report.lines_out
    );
    let t = &report.timings;
    let _ = writeln!(
        out,
        "[OK] time: read {}, scan {}, write {} (total {})",
        millis(t.read),
        millis(t.scan),
        millis(t.write),
        millis(t.total())
    );
    out
}

/// # Errors
/// Returns an error if the report cannot be serialized.
pub fn render_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn millis(d: Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1000.0)
}
