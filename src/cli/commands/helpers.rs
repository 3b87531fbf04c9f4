//! Shared helpers for CLI commands.

use std::fmt::Display;
use std::io::{self, Write};

use clap::CommandFactory;
use console::style;

use super::Cli;

/// Report invalid user input: the message, a blank line, then the help text
/// of the subcommand at `path` (e.g. `["get", "quote"]`).
pub fn report_invalid_input(err: &impl Display, path: &[&str]) -> io::Result<()> {
    {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", style(err).yellow())?;
        writeln!(out)?;
    }

    let mut command = Cli::command();
    command.build();

    let mut target = command;
    for name in path {
        match target.find_subcommand(name) {
            Some(sub) => target = sub.clone(),
            None => break,
        }
    }
    target.print_help()
}
