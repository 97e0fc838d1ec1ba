use serde::{Deserialize, Serialize};

/// Counters collected while scanning one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Bytes consumed.
    pub bytes_in: usize,
    /// Bytes written to the output.
    pub bytes_out: usize,
    /// Newlines consumed (every one of them is also emitted).
    pub newlines: usize,
    /// `//` comments removed.
    pub line_comments: usize,
    /// `/* */` comments removed.
    pub block_comments: usize,
}

impl ScanStats {
    /// Total comments removed.
    #[must_use]
    pub const fn comments(&self) -> usize {
        self.line_comments + self.block_comments
    }

    /// Bytes dropped from the input.
    #[must_use]
    pub const fn bytes_removed(&self) -> usize {
        self.bytes_in.saturating_sub(self.bytes_out)
    }
}
