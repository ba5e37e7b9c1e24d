//! Stripping pipeline and file handling.
//!
//! One forward pass over the physical lines of the input:
//!
//! - Lines that open, lie inside, or close a `/* ... */` block comment are dropped
//! - Every other line has its `\r`/`\n` characters removed
//! - Surviving lines are concatenated with no separator
//!
//! [`strip_source`] runs the pass between any reader and writer.
//! [`strip_file`] applies it to a file in place, after checking the
//! configured size and line limits.

pub mod file;
pub mod pipeline;

pub use file::{strip_file, strip_file_to, strip_stream, SkipReason, StripOutcome};
pub use pipeline::{strip_source, strip_str, StripStats};
