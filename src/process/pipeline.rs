//! Single-pass stripping pipeline
//!
//! Reads physical lines, classifies them with [`CommentFilter`], and writes
//! every kept line with its line breaks removed straight to the output.

use std::io::{self, BufRead, Write};

use crate::parser::{strip_line_breaks, CommentFilter, LineAction, LineStream};

/// Counters collected during one stripping pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripStats {
    /// Physical lines read from the input
    pub lines_read: usize,
    /// Lines that survived comment removal
    pub lines_kept: usize,
    /// Bytes written to the output
    pub bytes_written: usize,
}

impl StripStats {
    /// Lines that were part of a block comment
    #[must_use]
    pub fn lines_dropped(&self) -> usize {
        self.lines_read - self.lines_kept
    }
}

/// Strip block comments and line breaks from `input`, writing to `output`
///
/// The output carries no line breaks at all: kept lines are concatenated
/// without a separator. The comment state starts closed for every call.
pub fn strip_source<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<StripStats> {
    let mut stream = LineStream::new(input);
    let mut filter = CommentFilter::new();
    let mut stats = StripStats::default();

    while let Some(line) = stream.next_line()? {
        if filter.classify(&line) == LineAction::Keep {
            let kept = strip_line_breaks(&line);
            output.write_all(kept.as_bytes())?;
            stats.lines_kept += 1;
            stats.bytes_written += kept.len();
        }
    }

    stats.lines_read = stream.line_number();
    Ok(stats)
}

/// Strip an in-memory source text
#[must_use]
pub fn strip_str(source: &str) -> String {
    let mut filter = CommentFilter::new();
    let mut result = String::with_capacity(source.len());

    // In-memory text is already valid UTF-8, so reading it cannot fail
    for line in LineStream::new(source.as_bytes()).map_while(Result::ok) {
        if filter.classify(&line) == LineAction::Keep {
            result.push_str(&strip_line_breaks(&line));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(input: &str) -> (String, StripStats) {
        let mut output = Vec::new();
        let stats = strip_source(Cursor::new(input.as_bytes()), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn test_no_comments() {
        let (result, stats) = run("a: 1$\nb: 2$\nc: a + b$\n");
        assert_eq!(result, "a: 1$b: 2$c: a + b$");
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.lines_kept, 3);
        assert_eq!(stats.bytes_written, result.len());
    }

    #[test]
    fn test_multiline_comment() {
        let (result, stats) = run("a=1\n/* comment\nb=2\n*/\nc=3\n");
        assert_eq!(result, "a=1c=3");
        assert_eq!(stats.lines_dropped(), 3);
    }

    #[test]
    fn test_single_line_comment() {
        let (result, _) = run("x /* start-end */ y\n");
        assert_eq!(result, "");
    }

    #[test]
    fn test_whitespace_preserved() {
        let (result, _) = run("  f(x) :=\n\tx^2;\n");
        assert_eq!(result, "  f(x) :=\tx^2;");
    }

    #[test]
    fn test_crlf_input() {
        let (result, _) = run("a=1\r\n/* c */\r\nb=2\r\n");
        assert_eq!(result, "a=1b=2");
    }

    #[test]
    fn test_lone_carriage_return_splits_lines() {
        // Old Mac line endings: the comment sits on its own line
        let (result, stats) = run("x\r/* c */\ry");
        assert_eq!(result, "xy");
        assert_eq!(stats.lines_read, 3);
    }

    #[test]
    fn test_unterminated_comment_drops_rest() {
        let (result, _) = run("a;\n/* never closed\nb;\nc;\n");
        assert_eq!(result, "a;");
    }

    #[test]
    fn test_empty_input() {
        let (result, stats) = run("");
        assert_eq!(result, "");
        assert_eq!(stats, StripStats::default());
    }

    #[test]
    fn test_idempotent() {
        let once = strip_str("a=1\n/* comment\nb=2\n*/\nc=3\n");
        let twice = strip_str(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_str_matches_strip_source() {
        let input = "load(\"x\")$\n/* header\n   text */\nf(x):=x;\r\ng(x):=x^2;";
        let (from_reader, _) = run(input);
        assert_eq!(strip_str(input), from_reader);
    }
}
