//! CLI command handlers
//!
//! Bridges clap argument parsing (batch or interactive) with the storage layer.

pub mod console;
pub mod expense;
pub mod interactive;

pub use console::Console;
pub use expense::{command_help, handle_expense_command, ExpenseCommands};
pub use interactive::{format_welcome, run_interactive, run_line};
