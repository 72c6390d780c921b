//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Write a completion script for the given shell
pub fn write_completions(shell: Shell, cmd: &mut Command, buf: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, buf);
}

/// Print a completion script for the given shell to stdout
pub fn print_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut io::stdout());
}
