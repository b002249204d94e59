//! Expense Tracker - personal expense tracking from the terminal
//!
//! Records expenses (amount, category, date, description) in a local SQLite
//! database and supports listing, deleting one entry and deleting everything.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, categories and date handling
//! - `storage`: SQLite storage layer
//! - `display`: Terminal formatting
//! - `cli`: Command definitions, dispatch and the interactive prompt
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense::config::ExpensePaths;
//! use expense::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! storage.initialize()?;
//! storage.add_expense(50.0, "Grocery", "23-04-2024", "Weekly shopping")?;
//! let listing = storage.list_expenses()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
