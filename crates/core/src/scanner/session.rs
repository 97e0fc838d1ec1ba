// crates/core/src/scanner/session.rs
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::state::{Emit, ScanState};
use crate::stats::ScanStats;

/// Where an input ended without closing a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unterminated {
    BlockComment,
    CharLiteral,
    StringLiteral,
}

impl Unterminated {
    const fn from_state(state: ScanState) -> Option<Self> {
        match state {
            ScanState::BlockComment | ScanState::BlockCommentStar => Some(Self::BlockComment),
            ScanState::CharLiteral | ScanState::CharLiteralEscape => Some(Self::CharLiteral),
            ScanState::StringLiteral | ScanState::StringLiteralEscape => Some(Self::StringLiteral),
            _ => None,
        }
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::BlockComment => "unterminated block comment",
            Self::CharLiteral => "unterminated character literal",
            Self::StringLiteral => "unterminated string literal",
        }
    }
}

/// One pass of the scanner over one input.
///
/// The input may be fed in any number of chunks; the current [`ScanState`]
/// is the only value carried from one chunk to the next.
///
/// ```rust
/// use decomment_core::scanner::ScanSession;
///
/// let mut session = ScanSession::new();
/// session.feed(b"int a = 1; /");
/// session.feed(b"* note */ int b = 2;\n");
/// let outcome = session.finish();
/// assert_eq!(outcome.output(), b"int a = 1;  int b = 2;\n");
/// assert_eq!(outcome.stats().block_comments, 1);
/// ```
#[derive(Debug, Default)]
pub struct ScanSession {
    state: ScanState,
    output: Vec<u8>,
    stats: ScanStats,
}

impl ScanSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates the output buffer for an input of `len` bytes.
    #[must_use]
    pub fn with_capacity(len: usize) -> Self {
        Self {
            output: Vec::with_capacity(len),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Output accumulated so far.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Consumes `chunk`, appending whatever it produces to the output.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.output.reserve(chunk.len());
        for &b in chunk {
            self.push(b);
        }
        self.stats.bytes_in += chunk.len();
    }

    fn push(&mut self, b: u8) {
        let transition = self.state.step(b);

        match transition.emit {
            Emit::Nothing => {}
            Emit::Current => self.output.push(b),
            Emit::PendingSlashAndCurrent => {
                self.output.push(b'/');
                self.output.push(b);
            }
        }

        if self.state == ScanState::SawSlash {
            match transition.next {
                ScanState::LineComment => self.stats.line_comments += 1,
                ScanState::BlockComment => self.stats.block_comments += 1,
                _ => {}
            }
        }
        if b == b'\n' {
            self.stats.newlines += 1;
        }

        self.state = transition.next;
    }

    /// Ends the input and returns the result.
    ///
    /// A `/` still held back at end of input is code and is written out.
    #[must_use]
    pub fn finish(mut self) -> ScanOutcome {
        if self.state == ScanState::SawSlash {
            self.output.push(b'/');
            self.state = ScanState::Code;
        }
        self.stats.bytes_out = self.output.len();

        ScanOutcome {
            output: self.output,
            stats: self.stats,
            final_state: self.state,
        }
    }
}

/// Output and bookkeeping of a finished [`ScanSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    output: Vec<u8>,
    stats: ScanStats,
    final_state: ScanState,
}

impl ScanOutcome {
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    #[must_use]
    pub const fn stats(&self) -> &ScanStats {
        &self.stats
    }

    #[must_use]
    pub const fn final_state(&self) -> ScanState {
        self.final_state
    }

    /// The construct left open at end of input, if any.
    ///
    /// A `//` comment running to end of input is not reported; that is just a
    /// last line without a trailing newline.
    #[must_use]
    pub const fn unterminated(&self) -> Option<Unterminated> {
        Unterminated::from_state(self.final_state)
    }
}
