//! Parsed command-line arguments

use crate::error::{ValidationError, ValidationResult};
use clap::ArgMatches;
use std::path::PathBuf;

/// Default output file name, a placeholder to be replaced per project
pub const DEFAULT_OUTPUT: &str = "DEFAUT.OUT";

/// Arguments for one invocation
#[derive(Debug, Clone)]
pub struct Args {
    /// Validated input file path
    pub input: Option<PathBuf>,

    /// Output file path (not required to exist)
    pub output: PathBuf,

    /// Whether verbose logging was requested
    pub verbose: bool,
}

impl Args {
    /// Extract the arguments record from parsed matches
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Args {
            input: matches.get_one::<PathBuf>("input").cloned(),
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            verbose: matches.get_flag("verbose"),
        }
    }
}

/// Check that a regular file exists at the given path
///
/// Installed as the value parser for `--input`, so a bad path surfaces as a
/// usage error before logging setup or the program routine run.
pub fn existing_file(value: &str) -> ValidationResult<PathBuf> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ValidationError::NotAFile(path))
    }
}
