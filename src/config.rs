// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::ReportFormat;
pub use decomment_engine::config::{Config, ConfigBuilder};
use decomment_engine::options::Destination;

/// Settings the CLI keeps for itself rather than passing to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub quiet: bool,
}

impl From<&Args> for ReportOptions {
    fn from(args: &Args) -> Self {
        Self {
            format: args.output.format,
            quiet: args.behavior.quiet,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let destination = if args.output.stdout {
            Destination::Stdout
        } else {
            Destination::File
        };

        let config = ConfigBuilder::default()
            .input(args.source)
            .output(args.destination)
            .suffix(args.output.suffix)
            .destination(destination)
            .progress(args.behavior.progress)
            .progress_step(args.behavior.progress_step)
            .build()
            .map_err(decomment_engine::error::EngineError::from)?;
        Ok(config)
    }
}
