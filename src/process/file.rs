//! File-level stripping
//!
//! Wraps the pipeline with the I/O around it: size and line-count limits,
//! reading the whole file before touching it, and the destructive rewrite.

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use super::pipeline::{strip_source, StripStats};
use crate::config::Config;
use crate::error::{Result, StripError};

/// Name used in error messages for standard input
pub const STDIN_NAME: &str = "<stdin>";

/// Name used in error messages for standard output
pub const STDOUT_NAME: &str = "<stdout>";

/// Why a file was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// File size in bytes exceeds `Config::max_file_size`
    TooLarge { size: u64, limit: u64 },
    /// Line count exceeds `Config::max_lines`
    TooManyLines { lines: usize, limit: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLarge { size, limit } => {
                write!(f, "{size} bytes exceeds limit of {limit} bytes")
            }
            SkipReason::TooManyLines { lines, limit } => {
                write!(f, "{lines} lines exceeds limit of {limit}")
            }
        }
    }
}

/// Result of a successful run over one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// Input was stripped and the output written
    Stripped(StripStats),
    /// Input was left untouched
    Skipped(SkipReason),
}

/// Count the number of lines in a byte buffer
///
/// Uses the same universal-newline rule as `LineStream`: `\n`, `\r\n` and a
/// lone `\r` each end a line.
fn count_lines(contents: &[u8]) -> usize {
    let terminators = contents
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && contents.get(i + 1) != Some(&b'\n')))
        .count();
    // A trailing fragment without a terminator still counts as a line
    match contents.last() {
        None => 0,
        Some(b'\n' | b'\r') => terminators,
        Some(_) => terminators + 1,
    }
}

fn check_size_limit(size: u64, config: &Config) -> Option<SkipReason> {
    let limit = config.max_file_size?;
    (size > limit).then_some(SkipReason::TooLarge { size, limit })
}

fn check_line_limit(contents: &[u8], config: &Config) -> Option<SkipReason> {
    let limit = config.max_lines?;
    let lines = count_lines(contents);
    (lines > limit).then_some(SkipReason::TooManyLines { lines, limit })
}

/// Strip a buffer that has already been read, reporting decode errors against `name`
fn strip_buffer(contents: &[u8], name: &Path) -> Result<(Vec<u8>, StripStats)> {
    let mut output = Vec::with_capacity(contents.len());
    let stats = strip_source(Cursor::new(contents), &mut output)
        .map_err(|e| StripError::io(name, e))?;
    Ok((output, stats))
}

enum Source {
    Contents(Vec<u8>),
    Skipped(SkipReason),
}

/// Read a file completely, unless it exceeds the configured limits
fn read_source(path: &Path, config: &Config) -> Result<Source> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path).map_err(|e| StripError::io(path, e))?;
    if let Some(reason) = check_size_limit(metadata.len(), config) {
        return Ok(Source::Skipped(reason));
    }

    let mut contents = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut contents))
        .map_err(|e| StripError::io(path, e))?;

    if let Some(reason) = check_line_limit(&contents, config) {
        return Ok(Source::Skipped(reason));
    }

    Ok(Source::Contents(contents))
}

/// Strip a file in place
///
/// The file is read and closed before it is reopened for writing, and is
/// only rewritten once the whole input decoded successfully. No backup is kept.
pub fn strip_file(path: &Path, config: &Config) -> Result<StripOutcome> {
    let contents = match read_source(path, config)? {
        Source::Contents(contents) => contents,
        Source::Skipped(reason) => return Ok(StripOutcome::Skipped(reason)),
    };

    let (output, stats) = strip_buffer(&contents, path)?;
    std::fs::write(path, &output).map_err(|e| StripError::io(path, e))?;

    Ok(StripOutcome::Stripped(stats))
}

/// Strip a file and write the result to `output`, leaving the file untouched
pub fn strip_file_to<W: Write>(path: &Path, config: &Config, output: &mut W) -> Result<StripOutcome> {
    let contents = match read_source(path, config)? {
        Source::Contents(contents) => contents,
        Source::Skipped(reason) => return Ok(StripOutcome::Skipped(reason)),
    };

    let (stripped, stats) = strip_buffer(&contents, path)?;
    output
        .write_all(&stripped)
        .and_then(|()| output.flush())
        .map_err(|e| StripError::io(STDOUT_NAME, e))?;

    Ok(StripOutcome::Stripped(stats))
}

/// Strip a whole stream, e.g. stdin to stdout
///
/// The size limit can only be checked after reading; a skipped stream
/// produces no output at all.
pub fn strip_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<StripOutcome> {
    let mut contents = Vec::new();
    input
        .read_to_end(&mut contents)
        .map_err(|e| StripError::io(STDIN_NAME, e))?;

    if let Some(reason) = check_size_limit(contents.len() as u64, config) {
        return Ok(StripOutcome::Skipped(reason));
    }
    if let Some(reason) = check_line_limit(&contents, config) {
        return Ok(StripOutcome::Skipped(reason));
    }

    let (stripped, stats) = strip_buffer(&contents, Path::new(STDIN_NAME))?;
    output
        .write_all(&stripped)
        .and_then(|()| output.flush())
        .map_err(|e| StripError::io(STDOUT_NAME, e))?;

    Ok(StripOutcome::Stripped(stats))
}
