//! maxstrip - Block comment and line break stripper for Maxima source files

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use maxstrip::process::{strip_stream, SkipReason};
use maxstrip::{
    parse_args, strip_file, strip_file_to, CliArgs, Config, Result, StripError, StripOutcome,
};

fn main() -> ExitCode {
    let args = parse_args();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Errors go to stdout; stderr only carries notices and diagnostics
            println!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    if args.is_stdin() {
        let config = build_config(args, None)?;
        return process_stdin(&config, args);
    }

    let path = args.input_path()?;
    let config = build_config(args, Some(path))?;
    process_single_file(path, &config, args)
}

/// Build configuration from CLI args and optional config file
///
/// If `for_path` is provided and no explicit config file is specified,
/// uses auto-discovery to find config files in parent directories.
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        let start = discovery_start(for_path, std::env::current_dir, args.debug);
        let start = start.as_path();
        if args.debug {
            let discovered = Config::discover_config_files(start);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", start.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", start.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(start, args.silent)
    };

    // Override with CLI arguments
    if let Some(max_file_size) = args.max_file_size {
        config.max_file_size = Some(max_file_size);
    }
    if let Some(max_lines) = args.exclude_max_lines {
        config.max_lines = Some(max_lines);
    }

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   max_file_size: {:?}", config.max_file_size);
        eprintln!("[DEBUG]   max_lines: {:?}", config.max_lines);
    }

    if let Some(error) = config.validate() {
        return Err(StripError::InvalidConfig(error));
    }

    Ok(config)
}

/// Directory or file that config discovery starts from
///
/// Stdin has no path, so discovery starts from the current directory. When that
/// cannot be read, discovery only sees the home directory config.
fn discovery_start(
    for_path: Option<&Path>,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
    debug: bool,
) -> PathBuf {
    if let Some(path) = for_path {
        return path.to_path_buf();
    }
    match current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            if debug {
                eprintln!("[DEBUG] Cannot read current directory: {e}");
            }
            PathBuf::new()
        }
    }
}

/// Print the outcome of one run on stderr
fn report_outcome(name: &str, outcome: &StripOutcome, args: &CliArgs) {
    match outcome {
        StripOutcome::Stripped(stats) => {
            if args.debug {
                eprintln!(
                    "[DEBUG] {name}: read {} lines, kept {}, dropped {}, wrote {} bytes",
                    stats.lines_read,
                    stats.lines_kept,
                    stats.lines_dropped(),
                    stats.bytes_written
                );
            }
        }
        StripOutcome::Skipped(reason) => {
            if !args.silent {
                eprintln!("Skipping {name} ({reason})");
            }
            if args.debug {
                let flag = match reason {
                    SkipReason::TooLarge { .. } => "--max-file-size",
                    SkipReason::TooManyLines { .. } => "--exclude-max-lines",
                };
                eprintln!("[DEBUG]   raise the limit with {flag}");
            }
        }
    }
}

/// Process a single file
fn process_single_file(path: &Path, config: &Config, args: &CliArgs) -> Result<()> {
    let outcome = if args.stdout {
        strip_file_to(path, config, &mut io::stdout().lock())?
    } else {
        strip_file(path, config)?
    };

    report_outcome(&path.display().to_string(), &outcome, args);
    Ok(())
}

/// Process input from stdin, output to stdout
fn process_stdin(config: &Config, args: &CliArgs) -> Result<()> {
    let outcome = strip_stream(&mut io::stdin().lock(), &mut io::stdout().lock(), config)?;
    report_outcome("stdin", &outcome, args);
    Ok(())
}
