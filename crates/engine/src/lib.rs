// crates/engine/src/lib.rs
use std::io::Write;
use std::time::Instant;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod output_path;
pub mod processor;
pub mod progress;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::progress::{NoProgress, ProgressSink, StepNotifier};
use crate::stats::{RunReport, Timings, count_lines};

/// Strip comments from one source file: read it whole, scan, then deliver.
///
/// Standard output is used when the config asks for it.
///
/// # Errors
///
/// Fails if the source cannot be read or the destination cannot be written.
/// The destination is only created once the full text is ready.
pub fn run(config: &Config, sink: &dyn ProgressSink) -> Result<RunReport> {
    run_to(config, sink, std::io::stdout().lock())
}

/// Like [`run`], with `stdout` standing in for standard output.
///
/// # Errors
///
/// See [`run`].
pub fn run_to<W: Write>(config: &Config, sink: &dyn ProgressSink, stdout: W) -> Result<RunReport> {
    let output = processor::resolve_output(config)?;
    let sink: &dyn ProgressSink = if config.progress { sink } else { &NoProgress };
    let mut notifier = StepNotifier::new(sink, config.progress_step);
    let mut timings = Timings::default();

    log::info!("reading {}", config.input.display());
    let started = Instant::now();
    let source = filesystem::read_source(&config.input, &mut notifier)?;
    timings.read = started.elapsed();

    notifier.reset();
    let started = Instant::now();
    let outcome = processor::strip(&source, &mut notifier);
    timings.scan = started.elapsed();

    if let Some(open) = outcome.unterminated() {
        log::warn!("{}: {}", config.input.display(), open.describe());
    }

    match &output {
        Some(path) => log::info!("writing {}", path.display()),
        None => log::info!("writing to standard output"),
    }
    let started = Instant::now();
    processor::deliver(output.as_ref(), outcome.output(), stdout)?;
    timings.write = started.elapsed();

    Ok(RunReport {
        input: config.input.clone(),
        output,
        lines_in: count_lines(&source),
        lines_out: count_lines(outcome.output()),
        stats: *outcome.stats(),
        unterminated: outcome.unterminated(),
        timings,
    })
}
