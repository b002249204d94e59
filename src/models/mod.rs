//! Core data models for the expense tracker

pub mod category;
pub mod date;
pub mod expense;

pub use category::Category;
pub use date::DateInput;
pub use expense::{CorruptRow, Expense, ExpenseListing, ExpenseRow};
