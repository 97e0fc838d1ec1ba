use decomment_core::{ScanStats, Unterminated};
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

/// Wall-clock time spent in each phase of one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timings {
    #[serde(rename = "read_ms", serialize_with = "as_millis")]
    pub read: Duration,
    #[serde(rename = "scan_ms", serialize_with = "as_millis")]
    pub scan: Duration,
    #[serde(rename = "write_ms", serialize_with = "as_millis")]
    pub write: Duration,
}

impl Timings {
    #[must_use]
    pub fn total(&self) -> Duration {
        self.read + self.scan + self.write
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
}

/// Summary of one source file processed end to end.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    /// `None` when the text went to standard output.
    pub output: Option<PathBuf>,
    pub lines_in: usize,
    pub lines_out: usize,
    pub stats: ScanStats,
    pub unterminated: Option<Unterminated>,
    pub timings: Timings,
}

/// Number of lines, counting a final line without a trailing newline.
#[must_use]
pub fn count_lines(data: &[u8]) -> usize {
    let newlines = bytecount::count(data, b'\n');
    match data.last() {
        Some(&b) if b != b'\n' => newlines + 1,
        _ => newlines,
    }
}
