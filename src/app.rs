// src/app.rs
use crate::args::Args;
use crate::config::{Config, ReportOptions};
use crate::error::Result;
use crate::presentation::{self, StderrProgress};

/// Runs one invocation of the CLI.
///
/// # Errors
/// Returns an error for an invalid configuration, an unreadable source or an
/// unwritable destination. No destination file is created in those cases.
pub fn run(args: Args) -> Result<()> {
    let report_options = ReportOptions::from(&args);
    let config = Config::try_from(args)?;
    log::debug!("{config:?}");

    let report = decomment_engine::run(&config, &StderrProgress)?;
    presentation::print_report(&report, report_options)
}
