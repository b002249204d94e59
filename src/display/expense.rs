//! Expense display formatting
//!
//! Renders listings as a fixed-width table and confirms added expenses.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::date::DISPLAY_FORMAT;
use crate::models::{Expense, ExpenseListing, ExpenseRow};

/// Column widths: row, amount, category, date, description
const WIDTHS: [usize; 5] = [5, 10, 10, 20, 50];

/// Format an amount the way a decimal literal reads (`50.0`, `12.5`)
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

/// Render a date, falling back to `DD-MM-YYYY` when `date_format` cannot
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut rendered = String::new();
    match write!(rendered, "{}", date.format(date_format)) {
        Ok(()) => rendered,
        Err(_) => date.format(DISPLAY_FORMAT).to_string(),
    }
}

fn format_columns(columns: [&str; 5]) -> String {
    let line = format!(
        "{:<w0$} {:<w1$} {:<w2$} {:<w3$} {:<w4$}",
        columns[0],
        columns[1],
        columns[2],
        columns[3],
        columns[4],
        w0 = WIDTHS[0],
        w1 = WIDTHS[1],
        w2 = WIDTHS[2],
        w3 = WIDTHS[3],
        w4 = WIDTHS[4],
    );
    line.trim_end().to_string()
}

/// Format one listed expense
pub fn format_expense_row(row: &ExpenseRow, date_format: &str) -> String {
    let number = row.display_number.to_string();
    let amount = format_amount(row.amount);
    let date = format_date(row.date, date_format);

    format_columns([
        number.as_str(),
        amount.as_str(),
        row.category.as_str(),
        date.as_str(),
        row.description.as_str(),
    ])
}

/// Format a listing as a table
///
/// A corrupt row ends the table with an error line naming it.
pub fn format_expense_table(listing: &ExpenseListing, date_format: &str) -> String {
    if listing.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format_columns([
        "Row",
        "Amount",
        "Category",
        "Date",
        "Description",
    ]));
    output.push('\n');
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for row in &listing.rows {
        output.push_str(&format_expense_row(row, date_format));
        output.push('\n');
    }

    if let Some(corrupt) = &listing.corrupt {
        output.push_str(&format!(
            "Error: Unable to format date for expense ID {}.",
            corrupt.display_number
        ));
        if let Some(id) = corrupt.expense_id {
            output.push_str(&format!(" Stored id {} has date '{}'.", id, corrupt.stored_value));
        }
        output.push('\n');
    }

    output
}

/// Format the confirmation printed after adding an expense
pub fn format_added_expense(expense: &Expense, date_format: &str) -> String {
    format!(
        "Expense added\nAmount: {}\nCategory: {}\nDate: {}\nDescription: {}\n",
        format_amount(expense.amount),
        expense.category,
        format_date(expense.date, date_format),
        expense.description
    )
}
