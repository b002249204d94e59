use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use expense::cli::{format_welcome, handle_expense_command, run_interactive, Console, ExpenseCommands};
use expense::config::{ExpensePaths, Settings};
use expense::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Expense Tracker CLI",
    long_about = "Record expenses in a local SQLite database and review them from \
                  the command line. Run without a command to start the interactive prompt.\n\n\
                  The welcome message is shown only when the interactive prompt starts.",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    expense::logging::init();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths)?;
    let first_run = !storage.database_exists();
    storage.initialize().with_context(|| {
        format!(
            "Failed to initialize database at {}",
            storage.paths().database_file().display()
        )
    })?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match cli.command {
        Some(cmd) => handle_expense_command(&storage, &settings, &mut console, cmd)?,
        None => {
            console.print(&format_welcome(first_run))?;
            run_interactive(&storage, &settings, &mut console)?;
        }
    }

    Ok(())
}
