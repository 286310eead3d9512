//! Reports module
//!
//! Derived views over the ledger. Nothing here is persisted; every report is
//! computed fresh from the ledger file.

pub mod summary;

pub use summary::{
    days_in_month, remaining_days_in_month, summarize, CategoryTotal, Summary,
};
