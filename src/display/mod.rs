//! Display formatting for CLI output

pub mod report;

pub use report::{render, SummaryFormatter};
