// crates/core/src/scanner/state.rs
//! Lexical states of the comment scanner and the transition function.
//!
//! The automaton is driven one byte at a time. Every delimiter it cares about
//! (`/`, `*`, `\n`, `'`, `"`, `\`) is ASCII, and UTF-8 never uses ASCII bytes
//! inside a multi-byte sequence, so running over bytes gives the same result
//! as running over `char`s while also tolerating non-UTF-8 input.

use serde::{Deserialize, Serialize};

/// 現在の字句モード
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanState {
    /// Ordinary code.
    #[default]
    Code,
    /// A `/` was seen in code and is held back until the next byte.
    SawSlash,
    /// Inside `/* ... */`.
    BlockComment,
    /// Inside a block comment, right after one or more `*`.
    BlockCommentStar,
    /// Inside `// ...`.
    LineComment,
    /// Inside a line comment, right after `\`.
    LineCommentBackslash,
    /// Inside `'...'`.
    CharLiteral,
    /// Inside a character literal, right after `\`.
    CharLiteralEscape,
    /// Inside `"..."`.
    StringLiteral,
    /// Inside a string literal, right after `\`.
    StringLiteralEscape,
}

/// What a single transition appends to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Nothing is written.
    Nothing,
    /// The byte just consumed is written.
    Current,
    /// The held-back `/` is written, followed by the byte just consumed.
    PendingSlashAndCurrent,
}

/// Result of [`ScanState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ScanState,
    pub emit: Emit,
}

impl Transition {
    const fn new(next: ScanState, emit: Emit) -> Self {
        Self { next, emit }
    }
}

impl ScanState {
    /// Computes the next state and the output action for byte `b`.
    ///
    /// Total over every `(state, byte)` pair.
    #[must_use]
    pub const fn step(self, b: u8) -> Transition {
        use Emit::{Current, Nothing, PendingSlashAndCurrent};
        use ScanState::{
            BlockComment, BlockCommentStar, CharLiteral, CharLiteralEscape, Code, LineComment,
            LineCommentBackslash, SawSlash, StringLiteral, StringLiteralEscape,
        };

        match self {
            Code => match b {
                b'/' => Transition::new(SawSlash, Nothing),
                b'\'' => Transition::new(CharLiteral, Current),
                b'"' => Transition::new(StringLiteral, Current),
                _ => Transition::new(Code, Current),
            },
            SawSlash => match b {
                b'/' => Transition::new(LineComment, Nothing),
                b'*' => Transition::new(BlockComment, Nothing),
                _ => Transition::new(Code, PendingSlashAndCurrent),
            },
            BlockComment => match b {
                b'*' => Transition::new(BlockCommentStar, Nothing),
                b'\n' => Transition::new(BlockComment, Current),
                _ => Transition::new(BlockComment, Nothing),
            },
            BlockCommentStar => match b {
                b'/' => Transition::new(Code, Nothing),
                // Keeps line parity: a newline after `*` is still a newline.
                b'\n' => Transition::new(BlockComment, Current),
                b'*' | b'\'' | b'"' | b'\\' => Transition::new(BlockCommentStar, Nothing),
                _ => Transition::new(BlockComment, Nothing),
            },
            LineComment => match b {
                b'\n' => Transition::new(Code, Current),
                b'\\' => Transition::new(LineCommentBackslash, Nothing),
                _ => Transition::new(LineComment, Nothing),
            },
            LineCommentBackslash => match b {
                b'\n' => Transition::new(LineCommentBackslash, Current),
                b'\\' | b'/' | b'*' | b'\'' | b'"' => {
                    Transition::new(LineCommentBackslash, Nothing)
                }
                _ => Transition::new(LineComment, Nothing),
            },
            CharLiteral => match b {
                b'\'' => Transition::new(Code, Current),
                b'\\' => Transition::new(CharLiteralEscape, Current),
                _ => Transition::new(CharLiteral, Current),
            },
            CharLiteralEscape => Transition::new(CharLiteral, Current),
            StringLiteral => match b {
                b'"' => Transition::new(Code, Current),
                b'\\' => Transition::new(StringLiteralEscape, Current),
                _ => Transition::new(StringLiteral, Current),
            },
            StringLiteralEscape => Transition::new(StringLiteral, Current),
        }
    }

    /// Whether the state is inside a comment span (the held-back slash excluded).
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::BlockComment
                | Self::BlockCommentStar
                | Self::LineComment
                | Self::LineCommentBackslash
        )
    }

    /// Whether the state is inside a character or string literal.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::CharLiteral
                | Self::CharLiteralEscape
                | Self::StringLiteral
                | Self::StringLiteralEscape
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ScanState; 10] = [
        ScanState::Code,
        ScanState::SawSlash,
        ScanState::BlockComment,
        ScanState::BlockCommentStar,
        ScanState::LineComment,
        ScanState::LineCommentBackslash,
        ScanState::CharLiteral,
        ScanState::CharLiteralEscape,
        ScanState::StringLiteral,
        ScanState::StringLiteralEscape,
    ];

    fn t(next: ScanState, emit: Emit) -> Transition {
        Transition { next, emit }
    }

    #[test]
    fn test_default_is_code() {
        assert_eq!(ScanState::default(), ScanState::Code);
    }

    #[test]
    fn test_code_row() {
        let s = ScanState::Code;
        assert_eq!(s.step(b'/'), t(ScanState::SawSlash, Emit::Nothing));
        assert_eq!(s.step(b'*'), t(ScanState::Code, Emit::Current));
        assert_eq!(s.step(b'\n'), t(ScanState::Code, Emit::Current));
        assert_eq!(s.step(b'\''), t(ScanState::CharLiteral, Emit::Current));
        assert_eq!(s.step(b'"'), t(ScanState::StringLiteral, Emit::Current));
        assert_eq!(s.step(b'\\'), t(ScanState::Code, Emit::Current));
        assert_eq!(s.step(b'x'), t(ScanState::Code, Emit::Current));
    }

    #[test]
    fn test_saw_slash_row() {
        let s = ScanState::SawSlash;
        assert_eq!(s.step(b'/'), t(ScanState::LineComment, Emit::Nothing));
        assert_eq!(s.step(b'*'), t(ScanState::BlockComment, Emit::Nothing));
        for b in [b'\n', b'\'', b'"', b'\\', b' ', b'b'] {
            assert_eq!(s.step(b), t(ScanState::Code, Emit::PendingSlashAndCurrent));
        }
    }

    #[test]
    fn test_block_comment_rows() {
        let s = ScanState::BlockComment;
        assert_eq!(s.step(b'*'), t(ScanState::BlockCommentStar, Emit::Nothing));
        assert_eq!(s.step(b'\n'), t(ScanState::BlockComment, Emit::Current));
        for b in [b'/', b'\'', b'"', b'\\', b'q'] {
            assert_eq!(s.step(b), t(ScanState::BlockComment, Emit::Nothing));
        }

        let s = ScanState::BlockCommentStar;
        assert_eq!(s.step(b'/'), t(ScanState::Code, Emit::Nothing));
        assert_eq!(s.step(b'*'), t(ScanState::BlockCommentStar, Emit::Nothing));
        assert_eq!(s.step(b'\n'), t(ScanState::BlockComment, Emit::Current));
        for b in [b'\'', b'"', b'\\'] {
            assert_eq!(s.step(b), t(ScanState::BlockCommentStar, Emit::Nothing));
        }
        assert_eq!(s.step(b'a'), t(ScanState::BlockComment, Emit::Nothing));
    }

    #[test]
    fn test_line_comment_rows() {
        let s = ScanState::LineComment;
        assert_eq!(s.step(b'\n'), t(ScanState::Code, Emit::Current));
        assert_eq!(s.step(b'\\'), t(ScanState::LineCommentBackslash, Emit::Nothing));
        for b in [b'/', b'*', b'\'', b'"', b'z'] {
            assert_eq!(s.step(b), t(ScanState::LineComment, Emit::Nothing));
        }

        let s = ScanState::LineCommentBackslash;
        assert_eq!(s.step(b'\n'), t(ScanState::LineCommentBackslash, Emit::Current));
        for b in [b'/', b'*', b'\'', b'"', b'\\'] {
            assert_eq!(s.step(b), t(ScanState::LineCommentBackslash, Emit::Nothing));
        }
        assert_eq!(s.step(b'b'), t(ScanState::LineComment, Emit::Nothing));
    }

    #[test]
    fn test_literal_rows() {
        let s = ScanState::CharLiteral;
        assert_eq!(s.step(b'\''), t(ScanState::Code, Emit::Current));
        assert_eq!(s.step(b'\\'), t(ScanState::CharLiteralEscape, Emit::Current));
        assert_eq!(s.step(b'"'), t(ScanState::CharLiteral, Emit::Current));
        assert_eq!(s.step(b'/'), t(ScanState::CharLiteral, Emit::Current));

        let s = ScanState::StringLiteral;
        assert_eq!(s.step(b'"'), t(ScanState::Code, Emit::Current));
        assert_eq!(s.step(b'\\'), t(ScanState::StringLiteralEscape, Emit::Current));
        assert_eq!(s.step(b'\''), t(ScanState::StringLiteral, Emit::Current));
        assert_eq!(s.step(b'\n'), t(ScanState::StringLiteral, Emit::Current));

        for b in [b'/', b'*', b'\n', b'\'', b'"', b'\\', b'n'] {
            assert_eq!(
                ScanState::CharLiteralEscape.step(b),
                t(ScanState::CharLiteral, Emit::Current)
            );
            assert_eq!(
                ScanState::StringLiteralEscape.step(b),
                t(ScanState::StringLiteral, Emit::Current)
            );
        }
    }

    #[test]
    fn test_literal_states_always_emit() {
        for state in ALL.into_iter().filter(|s| s.is_literal()) {
            for b in 0..=u8::MAX {
                assert_eq!(state.step(b).emit, Emit::Current, "{state:?} on {b:#04x}");
            }
        }
    }

    #[test]
    fn test_comment_states_only_emit_newlines() {
        for state in ALL.into_iter().filter(|s| s.is_comment()) {
            for b in 0..=u8::MAX {
                let expected = if b == b'\n' { Emit::Current } else { Emit::Nothing };
                assert_eq!(state.step(b).emit, expected, "{state:?} on {b:#04x}");
            }
        }
    }

    #[test]
    fn test_non_ascii_bytes_are_other() {
        for state in ALL {
            for b in 0x80..=u8::MAX {
                assert_eq!(state.step(b), state.step(b'x'), "{state:?} on {b:#04x}");
            }
        }
    }
}
