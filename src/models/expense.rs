//! Expense model
//!
//! A stored expense plus the read model returned by listings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An expense as stored in the `expenses` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Stored identifier, assigned on insert and never reused
    pub id: i64,

    /// Amount spent (no currency)
    pub amount: f64,

    /// Category label
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,
}

/// One listed expense, numbered by position rather than stored id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// Dense 1-based display number
    pub display_number: i64,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// A listed row whose stored date could not be read back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptRow {
    /// Display number of the offending row
    pub display_number: i64,

    /// Stored identifier, when it could be resolved
    pub expense_id: Option<i64>,

    /// Raw stored value, rendered as text
    pub stored_value: String,
}

/// Result of listing expenses
///
/// Listing stops at the first row with an unreadable date: `rows` holds
/// everything before it and `corrupt` describes the row itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseListing {
    pub rows: Vec<ExpenseRow>,
    pub corrupt: Option<CorruptRow>,
}

impl ExpenseListing {
    /// True when nothing was listed and no corrupt row was hit
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.corrupt.is_none()
    }

    /// Number of rows successfully read
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        let listing = ExpenseListing::default();
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn test_listing_with_only_corrupt_row_is_not_empty() {
        let listing = ExpenseListing {
            rows: vec![],
            corrupt: Some(CorruptRow {
                display_number: 1,
                expense_id: Some(7),
                stored_value: "garbage".into(),
            }),
        };
        assert!(!listing.is_empty());
        assert_eq!(listing.len(), 0);
    }
}
