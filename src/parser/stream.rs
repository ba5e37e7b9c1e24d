/// `LineStream` - Splits a reader into physical lines
///
/// This module handles:
/// - Universal newlines: `\n`, `\r\n` and a lone `\r` all end a line
/// - Keeping each line's terminator attached so callers decide what to strip
/// - Counting physical lines for diagnostics
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// `LineStream` reads physical lines from a reader
///
/// `BufRead::read_line` only splits on `\n`; lone carriage returns inside a
/// chunk are split out here and buffered.
pub struct LineStream<R: BufRead> {
    reader: R,
    line_buffer: VecDeque<String>,
    line_number: usize,
}

impl<R: BufRead> LineStream<R> {
    /// Create a new `LineStream`
    ///
    /// # Arguments
    /// * `reader` - The underlying reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: VecDeque::new(),
            line_number: 0,
        }
    }

    /// Number of physical lines returned so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next physical line, terminator included
    ///
    /// Returns None at EOF. Fails with `InvalidData` on non UTF-8 input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.line_buffer.is_empty() {
            let mut raw_line = String::new();
            if self.reader.read_line(&mut raw_line)? == 0 {
                return Ok(None);
            }
            split_carriage_returns(raw_line, &mut self.line_buffer);
        }

        let line = self.line_buffer.pop_front();
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }
}

impl<R: BufRead> Iterator for LineStream<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Split a `\n`-terminated chunk at every `\r` that is not part of `\r\n`
///
/// A `\r` at the very end of the chunk stays put: the following chunk
/// starts a new line either way.
fn split_carriage_returns(chunk: String, out: &mut VecDeque<String>) {
    if !chunk.contains('\r') {
        out.push_back(chunk);
        return;
    }

    let mut start = 0;
    let bytes = chunk.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\r' && bytes.get(i + 1) != Some(&b'\n') && i + 1 < bytes.len() {
            out.push_back(chunk[start..=i].to_string());
            start = i + 1;
        }
    }
    out.push_back(chunk[start..].to_string());
}
