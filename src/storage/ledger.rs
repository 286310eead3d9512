//! Ledger repository for CSV storage
//!
//! The ledger is a flat CSV file with the header `name,amount,category` and
//! one row per expense. Appends rewrite the whole file.
//!
//! A missing, empty, unparseable or wrongly-headed ledger is re-initialised
//! on append and its previous contents are discarded. This matches how the
//! ledger has always been repaired; rows are not migrated.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::Deserialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

use super::file_io::write_csv_atomic;

/// Expected ledger columns, in order
pub const LEDGER_HEADER: [&str; 3] = ["name", "amount", "category"];

/// Upper bound on the sum of absolute row amounts, in cents
///
/// Half of `i64::MAX`, so the budget can still be subtracted from any total.
const MAX_LEDGER_MAGNITUDE: i64 = i64::MAX / 2;

/// A row read back from the ledger
///
/// The category is kept as written so that rows edited by hand (or written
/// with a category this build does not know) still aggregate under their own
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerEntry {
    pub name: String,
    pub amount: Money,
    pub category: String,
}

/// What happened to the ledger file during an append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// A new ledger file was created
    Created,
    /// Existing rows were kept and the expense was added after them
    Appended,
    /// The file was malformed; it was reset to the header before appending
    Repaired,
}

impl AppendOutcome {
    pub fn was_repaired(&self) -> bool {
        matches!(self, Self::Repaired)
    }
}

/// State of the ledger file as seen before a write
enum LedgerState {
    Missing,
    Valid(Vec<StringRecord>),
    Malformed(String),
}

/// Repository for the expense ledger
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    /// Create a new ledger repository backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an expense, repairing the file first if needed
    pub fn append(&self, expense: &Expense) -> TrackerResult<AppendOutcome> {
        let (outcome, mut rows) = match self.inspect()? {
            LedgerState::Missing => (AppendOutcome::Created, Vec::new()),
            LedgerState::Valid(rows) => (AppendOutcome::Appended, rows),
            LedgerState::Malformed(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "ledger is malformed, discarding its contents"
                );
                (AppendOutcome::Repaired, Vec::new())
            }
        };

        rows.push(StringRecord::from(expense.to_ledger_fields().to_vec()));

        let header = StringRecord::from(LEDGER_HEADER.to_vec());
        write_csv_atomic(&self.path, std::iter::once(&header).chain(rows.iter()))?;

        tracing::info!(
            path = %self.path.display(),
            rows = rows.len(),
            ?outcome,
            "expense appended to ledger"
        );

        Ok(outcome)
    }

    /// Read every row of the ledger
    ///
    /// Returns `None` when the file does not exist or is empty. A wrong header
    /// or an unparseable row is an error.
    pub fn entries(&self) -> TrackerResult<Option<Vec<LedgerEntry>>> {
        let Some(mut reader) = self.open_reader()? else {
            return Ok(None);
        };

        let headers = reader.headers().map_err(|e| self.read_error(e))?.clone();
        if headers.is_empty() {
            return Ok(None);
        }
        if !header_matches(&headers) {
            return Err(TrackerError::ledger(
                &self.path,
                format!("unexpected header '{}'", join_record(&headers)),
            ));
        }

        let mut entries = Vec::new();
        for result in reader.deserialize::<LedgerEntry>() {
            entries.push(result.map_err(|e| self.read_error(e))?);
        }

        Ok(Some(entries))
    }

    fn inspect(&self) -> TrackerResult<LedgerState> {
        let Some(mut reader) = self.open_reader()? else {
            return Ok(LedgerState::Missing);
        };

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => return Ok(LedgerState::Malformed(e.to_string())),
        };

        if headers.is_empty() {
            return Ok(LedgerState::Malformed("file is empty".into()));
        }
        if !header_matches(&headers) {
            return Ok(LedgerState::Malformed(format!(
                "unexpected header '{}'",
                join_record(&headers)
            )));
        }

        // Rows are kept verbatim but must read back as entries, and their
        // amounts must total without overflow, or summarizing would fail.
        let mut rows = Vec::new();
        let mut magnitude: i64 = 0;
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => return Ok(LedgerState::Malformed(e.to_string())),
            };

            let entry = match record.deserialize::<LedgerEntry>(Some(&headers)) {
                Ok(entry) => entry,
                Err(e) => {
                    let line = record.position().map_or(0, |p| p.line());
                    return Ok(LedgerState::Malformed(format!("line {}: {}", line, e)));
                }
            };

            match magnitude.checked_add(entry.amount.cents().saturating_abs()) {
                Some(total) if total <= MAX_LEDGER_MAGNITUDE => magnitude = total,
                _ => {
                    return Ok(LedgerState::Malformed(
                        "amounts are too large to total".into(),
                    ))
                }
            }

            rows.push(record);
        }

        Ok(LedgerState::Valid(rows))
    }

    fn open_reader(&self) -> TrackerResult<Option<csv::Reader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(
                csv::ReaderBuilder::new()
                    .has_headers(true)
                    .from_reader(file),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::Io(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn read_error(&self, err: csv::Error) -> TrackerError {
        if err.is_io_error() {
            err.into()
        } else {
            TrackerError::ledger(&self.path, err.to_string())
        }
    }
}

fn header_matches(headers: &StringRecord) -> bool {
    headers.iter().eq(LEDGER_HEADER.iter().copied())
}

fn join_record(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
