//! maxstrip - Block comment and line break stripper for Maxima source files
//!
//! Rewrites a source file in place as a single line with every `/* ... */`
//! block comment removed.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{ErrorKind, Result, StripError};
pub use process::{strip_file, strip_file_to, strip_source, strip_str, StripOutcome, StripStats};
