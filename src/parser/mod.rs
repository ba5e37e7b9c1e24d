//! Source reading and comment classification.
//!
//! This module provides the line-level building blocks of the stripper:
//! - [`LineStream`]: Reads physical lines with universal-newline splitting
//! - [`CommentFilter`]: Tracks `/* ... */` block comments line by line
//! - [`strip_line_breaks`]: Removes `\r` and `\n` from a kept line
//!
//! Comments are recognised by plain substring search. There is no tokenizer,
//! so markers inside Maxima string literals count as well.

pub mod comment_filter;
pub mod stream;

pub use comment_filter::{strip_line_breaks, CommentFilter, LineAction, COMMENT_END, COMMENT_START};
pub use stream::LineStream;
