//! Category queries
//!
//! Category rows are looked up by exact, case-sensitive name.

use rusqlite::{Connection, OptionalExtension};

use crate::error::ExpenseResult;
use crate::models::Category;

/// Find a category id by exact name
pub fn find_by_name(conn: &Connection, name: &str) -> ExpenseResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM categories WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// Return the id of the named category, inserting it first if absent
pub fn ensure(conn: &Connection, name: &str) -> ExpenseResult<i64> {
    if let Some(id) = find_by_name(conn, name)? {
        return Ok(id);
    }

    conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
    let id = conn.last_insert_rowid();
    tracing::debug!(id, category = name, "category created");
    Ok(id)
}

/// All categories in id order
pub fn list(conn: &Connection) -> ExpenseResult<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;
    let categories = stmt
        .query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

/// Remove every category
pub fn clear(conn: &Connection) -> ExpenseResult<usize> {
    Ok(conn.execute("DELETE FROM categories", [])?)
}
