// crates/engine/src/progress.rs
use serde::Serialize;

/// Pipeline phase a progress notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Read,
    Scan,
    Write,
}

impl Phase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Read => "reading",
            Self::Scan => "scanning",
            Self::Write => "writing",
        }
    }
}

/// Receives percentage-complete notifications.
///
/// Purely observational: nothing a sink does can change the scan result.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, phase: Phase, percent: u8);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _phase: Phase, _percent: u8) {}
}

/// Forwards only percentages that reach a new multiple of `step`.
pub struct StepNotifier<'a> {
    sink: &'a dyn ProgressSink,
    step: u8,
    last: Option<u8>,
}

impl<'a> StepNotifier<'a> {
    #[must_use]
    pub fn new(sink: &'a dyn ProgressSink, step: u8) -> Self {
        Self {
            sink,
            step: step.clamp(1, 100),
            last: None,
        }
    }

    /// Reports `percent`, rounded down to the step, unless already reported.
    pub fn push(&mut self, phase: Phase, percent: u8) {
        let percent = percent.min(100);
        let bucket = if percent == 100 {
            100
        } else {
            percent - percent % self.step
        };
        if self.last.is_some_and(|last| bucket <= last) {
            return;
        }
        self.last = Some(bucket);
        self.sink.on_progress(phase, bucket);
    }

    /// Starts a new phase; the next push is always reported.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// `done` out of `total` as a whole percentage. An empty total counts as done.
#[must_use]
pub fn percent(done: u64, total: u64) -> u8 {
    if total == 0 || done >= total {
        return 100;
    }
    // done < total, so the quotient is below 100
    u8::try_from(u128::from(done) * 100 / u128::from(total)).unwrap_or(100)
}
