//! # Comment Scanner
//!
//! Removes `//` and `/* */` comments from C-family source text in one forward
//! pass.
//!
//! - Character and string literals are copied verbatim, so comment markers
//!   inside them are never treated as comments.
//! - Every newline inside a comment is kept, so the output has the same
//!   number of lines as the input and line numbers still match.
//! - A `\` right before a newline continues a `//` comment onto the next line.
//! - Malformed input never fails: an unterminated comment swallows the rest of
//!   the input, an unterminated literal is copied to the end.
//!
//! ## Usage Example
//!
//! ```rust
//! use decomment_core::scanner::scan;
//!
//! let src = "int x = 1; // one\n/* two\n   lines */ int y = x / 2;\n";
//! assert_eq!(scan(src), "int x = 1; \n\n int y = x / 2;\n");
//! ```

pub mod session;
pub mod state;

use alloc::string::String;
use alloc::vec::Vec;

pub use session::{ScanOutcome, ScanSession, Unterminated};
pub use state::{Emit, ScanState, Transition};

/// Strips comments from `input`.
#[must_use]
pub fn scan(input: &str) -> String {
    // Only whole ASCII-delimited spans are dropped, so valid UTF-8 stays valid.
    String::from_utf8(scan_bytes(input.as_bytes()))
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Strips comments from raw bytes, which need not be UTF-8.
#[must_use]
pub fn scan_bytes(input: &[u8]) -> Vec<u8> {
    let mut session = ScanSession::with_capacity(input.len());
    session.feed(input);
    session.finish().into_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(""), "");
    }

    #[test]
    fn test_plain_code_is_unchanged() {
        let src = "int main() {\n    return 2 * 3;\n}\n";
        assert_eq!(scan(src), src);
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(scan("x = 1; // set x\ny = 2;"), "x = 1; \ny = 2;");
        assert_eq!(scan("// only a comment"), "");
    }

    #[test]
    fn test_block_comment_keeps_newlines() {
        assert_eq!(scan("a /* one\ntwo\nthree */ b"), "a \n\n b");
    }

    #[test]
    fn test_block_comment_star_runs() {
        assert_eq!(scan("/***/x"), "x");
        assert_eq!(scan("/** doc **/x"), "x");
        assert_eq!(scan("/* a * b */x"), "x");
        assert_eq!(scan("/* a **/ b */"), " b */");
    }

    #[test]
    fn test_newline_after_star_in_block_comment() {
        assert_eq!(scan("/* *\n*/x"), "\nx");
    }

    #[test]
    fn test_division_is_not_a_comment() {
        assert_eq!(scan("a / b"), "a / b");
        assert_eq!(scan("a /b"), "a /b");
        assert_eq!(scan("x /= 2;"), "x /= 2;");
    }

    #[test]
    fn test_slash_before_quote_is_emitted() {
        assert_eq!(scan("a/\"b\""), "a/\"b\"");
        assert_eq!(scan("a/'b'"), "a/'b'");
    }

    #[test]
    fn test_block_markers_in_string_literal() {
        assert_eq!(scan("\"/* not a comment */\""), "\"/* not a comment */\"");
    }

    #[test]
    fn test_line_marker_in_string_literal() {
        let src = "puts(\"http://example.com\"); // link";
        assert_eq!(scan(src), "puts(\"http://example.com\"); ");
    }

    #[test]
    fn test_escaped_quote_in_char_literal() {
        assert_eq!(scan("'\\''"), "'\\''");
        assert_eq!(scan("c = '\\''; // q"), "c = '\\''; ");
    }

    #[test]
    fn test_escaped_quote_in_string_literal() {
        let src = "s = \"say \\\"/*hi*/\\\"\"; /* gone */";
        assert_eq!(scan(src), "s = \"say \\\"/*hi*/\\\"\"; ");
    }

    #[test]
    fn test_line_comment_continuation() {
        assert_eq!(scan("// a\\\nb\ncode"), "\n\ncode");
    }

    #[test]
    fn test_backslash_not_before_newline_does_not_continue() {
        assert_eq!(scan("// a \\ b\ncode"), "\ncode");
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(scan("code /* unterminated"), "code ");
    }

    #[test]
    fn test_unterminated_string_literal() {
        assert_eq!(scan("s = \"open // still"), "s = \"open // still");
    }

    #[test]
    fn test_rejoined_slashes_form_one_line_comment() {
        let joined = alloc::format!("{}{}", "/", "/x");
        assert_eq!(scan(&joined), "");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(scan("// コメント\nlet 変数 = \"日本語\"; /* 中文 */"), "\nlet 変数 = \"日本語\"; ");
    }

    #[test]
    fn test_non_utf8_bytes() {
        let input = b"a = '\xe9'; /* \xff */ b\n";
        assert_eq!(scan_bytes(input), b"a = '\xe9';  b\n");
    }

    #[test]
    fn test_crlf_inside_line_comment() {
        assert_eq!(scan("x; // c\r\ny;"), "x; \ny;");
        assert_eq!(scan("x;\r\ny;"), "x;\r\ny;");
    }
}
