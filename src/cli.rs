//! Command-line interface for maxstrip.
//!
//! Defines CLI arguments using clap builder API

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};

use crate::error::{Result, StripError};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// File to strip in place (`-` reads stdin and writes stdout)
    pub input: Option<PathBuf>,

    /// Output to stdout instead of in-place
    pub stdout: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Skip files with more than this many lines
    pub exclude_max_lines: Option<usize>,

    /// Skip files larger than this many bytes
    pub max_file_size: Option<u64>,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (no skip notices or warnings)
    pub silent: bool,
}

impl CliArgs {
    /// The input path, or an argument error if none was given
    pub fn input_path(&self) -> Result<&Path> {
        let path = self.input.as_deref().ok_or(StripError::MissingPath)?;
        if path.as_os_str().is_empty() {
            return Err(StripError::EmptyPath);
        }
        Ok(path)
    }

    /// Whether the input is standard input
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        self.input.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("maxstrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip /* */ block comments and line breaks from Maxima source files in place")
        .arg(
            // Optional and accepting empty values, so the crate reports
            // StripError::MissingPath / EmptyPath instead of a clap usage error
            Arg::new("input")
                .help("File to strip in place (- reads stdin, writes stdout)")
                .value_name("FILE")
                .required(false)
                .value_parser(clap::value_parser!(OsString)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Output to stdout instead of modifying the file in-place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude-max-lines")
                .short('m')
                .long("exclude-max-lines")
                .help("Skip files with more than this many lines")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("max-file-size")
                .long("max-file-size")
                .help("Skip files larger than this many bytes [default: no limit]")
                .value_name("BYTES")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config and line counts)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no skip notices or config warnings)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<OsString>("input").map(PathBuf::from),
        stdout: matches.get_flag("stdout"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        exclude_max_lines: matches.get_one::<usize>("exclude-max-lines").copied(),
        max_file_size: matches.get_one::<u64>("max-file-size").copied(),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}
