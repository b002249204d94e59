//! Interactive prompt
//!
//! Each round first asks whether to continue, then reads one command line,
//! splits it with shell quoting rules and runs it through the same command
//! set as batch mode. Errors are printed and the loop carries on.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;

use super::console::Console;
use super::expense::{handle_expense_command, ExpenseCommands};
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

const GATE_PROMPT: &str = "Do you want to enter a command? (y/n): ";
const COMMAND_PROMPT: &str = "expense> ";
const NO_VALID_COMMAND: &str = "No valid command. Type 'help' to see available commands.";

/// A single command line typed at the prompt
#[derive(Parser, Debug)]
#[command(
    name = "expense",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct PromptLine {
    #[command(subcommand)]
    command: ExpenseCommands,
}

/// Greeting shown when the prompt starts
pub fn format_welcome(first_run: bool) -> String {
    if first_run {
        "Welcome to the Expense Tracker!\n\
         To get started, use the following commands:\n  \
         add <amount> <category> <date> \"<description>\"\n  \
         view\n  \
         delete <entry_id>\n  \
         delete_all\n  \
         help\n"
            .to_string()
    } else {
        "Welcome back to the Expense Tracker!\n\
         To see available commands, use: help\n"
            .to_string()
    }
}

/// Split a line into command tokens
pub fn tokenize(line: &str) -> ExpenseResult<Vec<String>> {
    shlex::split(line)
        .ok_or_else(|| ExpenseError::Argument("unbalanced quotes in command line".into()))
}

/// Run one command line
///
/// Unknown commands print a notice rather than failing.
pub fn run_line<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    console: &mut Console<R, W>,
    line: &str,
) -> ExpenseResult<()> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(());
    }

    match PromptLine::try_parse_from(&tokens) {
        Ok(parsed) => handle_expense_command(storage, settings, console, parsed.command),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                console.print(&err.to_string())
            }
            ErrorKind::InvalidSubcommand => {
                tracing::debug!(command = %tokens[0], "unrecognized command");
                console.println(NO_VALID_COMMAND)
            }
            _ => Err(ExpenseError::Argument(clap_message(&err))),
        },
    }
}

/// First line of a clap error, without its `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Run the prompt loop until the user declines or input ends
pub fn run_interactive<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    loop {
        if !console.confirm(GATE_PROMPT)? {
            console.println("Goodbye!")?;
            return Ok(());
        }

        let Some(line) = console.read_line(COMMAND_PROMPT)? else {
            return Ok(());
        };

        if let Err(err) = run_line(storage, settings, console, &line) {
            tracing::debug!(error = %err, "command failed");
            console.println(&err.to_string())?;
        }
    }
}
