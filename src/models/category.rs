//! Category model
//!
//! Categories are plain labels, created on first use by an expense.
//! Expenses refer to them by name, not by id.

use serde::{Deserialize, Serialize};

/// A row of the `categories` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
