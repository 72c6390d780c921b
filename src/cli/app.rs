//! Main CLI application

use crate::cli::args::{existing_file, Args, DEFAULT_OUTPUT};
use crate::cli::completion::print_completions;
use crate::error::Result;
use crate::{logging, program};
use clap::{value_parser, Arg, ArgAction, Command};
use clap_complete::Shell;
use std::path::PathBuf;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("stencil")
        .version(crate::VERSION)
        .about("PROGRAM DESCRIPTION")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Path to input")
                .value_parser(existing_file),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file")
                .default_value(DEFAULT_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Utilize verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Generate shell completions and exit")
                .value_parser(value_parser!(Shell)),
        )
}

/// Run the CLI application
///
/// Parsing and validation come first; a malformed invocation or a bad input
/// path exits through clap's usage error before logging is configured or the
/// program routine runs.
pub fn run() -> Result<()> {
    let matches = build_command().get_matches();

    if let Some(shell) = matches.get_one::<Shell>("completions") {
        print_completions(*shell, &mut build_command());
        return Ok(());
    }

    let args = Args::from_matches(&matches);
    logging::init(args.verbose);
    program::run(&args)
}
