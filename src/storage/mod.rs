//! Storage layer for the expense tracker
//!
//! Owns the SQLite database file. Every operation opens its own connection
//! and drops it before returning, so nothing is held across commands.

pub mod categories;
pub mod expenses;
pub mod schema;

use rusqlite::Connection;

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, DateInput, Expense, ExpenseListing};

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Check whether the database file is already on disk
    pub fn database_exists(&self) -> bool {
        self.paths.database_file().exists()
    }

    fn connect(&self) -> ExpenseResult<Connection> {
        Connection::open(self.paths.database_file()).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to open {}: {}",
                self.paths.database_file().display(),
                e
            ))
        })
    }

    /// Ensure tables and the numbering view exist
    ///
    /// Safe to call on every start.
    pub fn initialize(&self) -> ExpenseResult<()> {
        self.paths.ensure_directories()?;
        let conn = self.connect()?;
        schema::create_tables(&conn)?;
        schema::refresh_view(&conn)?;
        Ok(())
    }

    /// Record an expense, creating its category on first use
    ///
    /// `date` may be a `NaiveDate` or text in `DD-MM-YYYY` / `YYYY-MM-DD`.
    /// The date is validated before the database is touched; the category
    /// and expense inserts commit together or not at all.
    pub fn add_expense(
        &self,
        amount: f64,
        category: &str,
        date: impl Into<DateInput>,
        description: &str,
    ) -> ExpenseResult<Expense> {
        let date = date.into().resolve()?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        categories::ensure(&tx, category)?;
        let expense = expenses::insert(&tx, amount, category, date, description)?;
        schema::refresh_view(&tx)?;
        tx.commit()?;

        tracing::info!(id = expense.id, category, "expense added");
        Ok(expense)
    }

    /// List all expenses with dense display numbers, in id order
    pub fn list_expenses(&self) -> ExpenseResult<ExpenseListing> {
        let conn = self.connect()?;
        expenses::list(&conn)
    }

    /// Delete the expense with the given stored id
    ///
    /// A missing id is not an error.
    pub fn delete_entry(&self, id: i64) -> ExpenseResult<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let removed = expenses::delete(&tx, id)?;
        schema::refresh_view(&tx)?;
        tx.commit()?;

        tracing::info!(id, removed, "delete entry");
        Ok(())
    }

    /// Remove every expense and every category
    pub fn delete_all(&self) -> ExpenseResult<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let expenses_removed = expenses::clear(&tx)?;
        let categories_removed = categories::clear(&tx)?;
        schema::refresh_view(&tx)?;
        tx.commit()?;

        tracing::info!(expenses_removed, categories_removed, "all entries deleted");
        Ok(())
    }

    /// Drop and recreate the numbering view
    pub fn refresh_display_numbering(&self) -> ExpenseResult<()> {
        let conn = self.connect()?;
        schema::refresh_view(&conn)
    }

    /// All category rows in id order
    pub fn list_categories(&self) -> ExpenseResult<Vec<Category>> {
        let conn = self.connect()?;
        categories::list(&conn)
    }
}
