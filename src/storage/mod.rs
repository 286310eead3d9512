//! Storage layer for the expense tracker
//!
//! Provides the CSV ledger and the atomic file writers shared with the
//! settings file.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_csv_atomic, write_json_atomic};
pub use ledger::{AppendOutcome, Ledger, LedgerEntry, LEDGER_HEADER};
