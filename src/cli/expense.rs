//! Expense CLI commands
//!
//! The command set shared by batch invocations and the interactive prompt,
//! plus the handler that dispatches each command to storage.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{Command, Subcommand};

use super::console::Console;
use crate::config::Settings;
use crate::display::{format_added_expense, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::date::parse_display_date;
use crate::storage::Storage;

/// Expense tracker commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ExpenseCommands {
    /// Add a new expense. Example: add 50.0 Grocery 23-04-2024 "Weekly grocery shopping"
    Add {
        /// Expense amount
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        amount: f64,
        /// Expense category
        category: String,
        /// Expense date (DD-MM-YYYY)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
        /// Expense description
        description: String,
    },

    /// View all expenses
    View,

    /// Delete a specific entry by ID
    Delete {
        /// ID of the entry to delete
        #[arg(allow_negative_numbers = true)]
        entry_id: i64,
    },

    /// Delete all entries
    #[command(name = "delete_all")]
    DeleteAll,

    /// Show help information for available commands
    Help,
}

fn parse_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s.trim().parse().map_err(|e| format!("{}", e))?;
    if !amount.is_finite() {
        return Err("amount must be a finite number".to_string());
    }
    Ok(amount)
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_display_date(s).map_err(|e| e.to_string())
}

/// Help text listing every command
pub fn command_help() -> String {
    let cmd = Command::new("expense")
        .about("Expense Tracker CLI")
        .disable_help_subcommand(true);
    let mut cmd = ExpenseCommands::augment_subcommands(cmd);
    cmd.render_help().to_string()
}

/// Handle an expense command
pub fn handle_expense_command<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    console: &mut Console<R, W>,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let expense = storage.add_expense(amount, &category, date, &description)?;
            console.print(&format_added_expense(&expense, &settings.date_format))?;
        }

        ExpenseCommands::View => {
            let listing = storage.list_expenses()?;
            console.print(&format_expense_table(&listing, &settings.date_format))?;
        }

        ExpenseCommands::Delete { entry_id } => {
            storage.delete_entry(entry_id)?;
            console.println(&format!("Entry with ID {} deleted successfully.", entry_id))?;
        }

        ExpenseCommands::DeleteAll => {
            if settings.confirm_delete_all
                && !console.confirm("Delete ALL entries? This cannot be undone. (y/n): ")?
            {
                console.println("Delete cancelled.")?;
                return Ok(());
            }

            storage.delete_all()?;
            console.println("All entries deleted successfully.")?;
        }

        ExpenseCommands::Help => {
            console.print(&command_help())?;
        }
    }

    Ok(())
}
