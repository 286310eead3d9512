//! Core data models for the expense tracker
//!
//! This module contains the value types that flow through one logging cycle:
//! the expense itself, its category and the money amount.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
