use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Format of the run report written to standard error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
