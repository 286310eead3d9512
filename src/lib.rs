//! Expense Tracker - log expenses against a monthly budget
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary: an interactive loop that records expenses to a CSV ledger and
//! prints how much of the month's budget is left.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense, category and money types
//! - `storage`: CSV ledger with header repair and atomic writes
//! - `reports`: Budget summary derived from the ledger
//! - `display`: Terminal formatting of summaries
//! - `cli`: Interactive prompts, the session loop and command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use expense_tracker::models::Money;
//! use expense_tracker::reports::summarize;
//! use expense_tracker::storage::Ledger;
//!
//! let ledger = Ledger::new("expenses.csv");
//! let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
//! if let Some(summary) = summarize(&ledger, Money::from_cents(200_000), today)? {
//!     println!("{}", summary.remaining_budget);
//! }
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
