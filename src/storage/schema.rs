//! Schema management
//!
//! Tables are created idempotently. The numbering view is always dropped
//! and recreated so its row numbers stay dense after deletions.

use rusqlite::Connection;

use crate::error::ExpenseResult;

/// Name of the row-numbering view
pub const VIEW_NAME: &str = "expenses_view";

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount REAL,
        category TEXT,
        date DATE,
        description TEXT
    );

    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT
    );
";

const RECREATE_VIEW: &str = "
    DROP VIEW IF EXISTS expenses_view;
    CREATE VIEW expenses_view AS
        SELECT ROW_NUMBER() OVER (ORDER BY id) AS row_number,
               amount, category, date, description
        FROM expenses;
";

/// Create the expenses and categories tables if missing
pub fn create_tables(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(CREATE_TABLES)?;
    tracing::debug!("schema tables ensured");
    Ok(())
}

/// Drop and recreate the row-numbering view
pub fn refresh_view(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(RECREATE_VIEW)?;
    tracing::debug!(view = VIEW_NAME, "display numbering refreshed");
    Ok(())
}
