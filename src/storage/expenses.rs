//! Expense queries
//!
//! Listing reads through the numbering view, so it must be refreshed
//! after every mutation made here.

use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension};

use crate::error::ExpenseResult;
use crate::models::date::{from_stored, to_stored};
use crate::models::{CorruptRow, Expense, ExpenseListing, ExpenseRow};

/// Insert an expense row and return it with its assigned id
pub fn insert(
    conn: &Connection,
    amount: f64,
    category: &str,
    date: NaiveDate,
    description: &str,
) -> ExpenseResult<Expense> {
    conn.execute(
        "INSERT INTO expenses (amount, category, date, description) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![amount, category, to_stored(date), description],
    )?;

    Ok(Expense {
        id: conn.last_insert_rowid(),
        amount,
        category: category.to_string(),
        date,
        description: description.to_string(),
    })
}

/// List expenses through the numbering view, stopping at the first unreadable date
pub fn list(conn: &Connection) -> ExpenseResult<ExpenseListing> {
    let mut stmt = conn.prepare(
        "SELECT row_number, amount, category, date, description
         FROM expenses_view
         ORDER BY row_number",
    )?;
    let mut rows = stmt.query([])?;
    let mut listing = ExpenseListing::default();

    while let Some(row) = rows.next()? {
        let display_number: i64 = row.get(0)?;
        let stored_date: Value = row.get(3)?;

        let date = match &stored_date {
            Value::Text(text) => from_stored(text),
            _ => None,
        };

        let Some(date) = date else {
            tracing::warn!(display_number, "unreadable stored date, listing stopped");
            listing.corrupt = Some(CorruptRow {
                display_number,
                expense_id: id_at_position(conn, display_number)?,
                stored_value: render_value(&stored_date),
            });
            break;
        };

        listing.rows.push(ExpenseRow {
            display_number,
            amount: row.get::<_, Option<f64>>(1)?.unwrap_or_default(),
            category: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            date,
            description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        });
    }

    Ok(listing)
}

/// Delete one expense by stored id, returning the number of rows removed
pub fn delete(conn: &Connection, id: i64) -> ExpenseResult<usize> {
    Ok(conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?)
}

/// Remove every expense
pub fn clear(conn: &Connection) -> ExpenseResult<usize> {
    Ok(conn.execute("DELETE FROM expenses", [])?)
}

/// Stored id of the expense at a 1-based display position
fn id_at_position(conn: &Connection, display_number: i64) -> ExpenseResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM expenses ORDER BY id LIMIT 1 OFFSET ?1",
            [display_number - 1],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(text) => text.clone(),
        Value::Blob(bytes) => format!("<{} byte blob>", bytes.len()),
    }
}
