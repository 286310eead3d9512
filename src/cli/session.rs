//! The interactive logging loop
//!
//! Each cycle collects an expense, saves it, summarizes the ledger and prints
//! the summary, then asks whether to go again.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::SummaryFormatter;
use crate::error::TrackerResult;
use crate::reports::summarize;
use crate::storage::Ledger;

use super::collector::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Collecting,
    Done,
}

/// Runs collection cycles against one ledger until the user stops
pub struct Session<'a> {
    ledger: Ledger,
    settings: &'a Settings,
    formatter: SummaryFormatter,
}

impl<'a> Session<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            ledger: Ledger::new(settings.ledger_path()),
            settings,
            formatter: SummaryFormatter::new(settings.currency_symbol.clone()),
        }
    }

    /// Run the loop, returning how many expenses were recorded
    ///
    /// `today` is called once per cycle, so a session left open over midnight
    /// picks up the new date.
    pub fn run<R, W, C>(
        &self,
        prompter: &mut Prompter<R, W>,
        mut today: C,
    ) -> TrackerResult<usize>
    where
        R: BufRead,
        W: Write,
        C: FnMut() -> NaiveDate,
    {
        writeln!(prompter.output(), "Running Expense Tracker!")?;

        let mut recorded = 0;
        let mut state = SessionState::Collecting;

        while state == SessionState::Collecting {
            let expense = match prompter.collect_expense() {
                Ok(expense) => expense,
                Err(e) if e.is_input_closed() => {
                    tracing::warn!(error = %e, "input closed before the expense was complete");
                    writeln!(
                        prompter.output(),
                        "Input closed; the unfinished expense was not saved."
                    )?;
                    break;
                }
                Err(e) => return Err(e),
            };

            writeln!(
                prompter.output(),
                "Saving User Expense: {} to {}",
                expense,
                self.ledger.path().display()
            )?;
            let outcome = self.ledger.append(&expense)?;
            if outcome.was_repaired() {
                writeln!(
                    prompter.output(),
                    "CSV file is missing headers. Fixing file format..."
                )?;
            }
            recorded += 1;

            writeln!(prompter.output(), "Summarizing User Expense")?;
            let summary = summarize(&self.ledger, self.settings.monthly_budget, today())?;
            if summary.is_none() {
                writeln!(prompter.output(), "No expenses recorded yet.")?;
            }
            write!(prompter.output(), "{}", self.formatter.render(summary.as_ref()))?;

            state = if prompter.confirm_another()? {
                SessionState::Collecting
            } else {
                SessionState::Done
            };
        }

        writeln!(prompter.output())?;
        writeln!(prompter.output(), "Exiting Expense Tracker. Have a great day!")?;

        tracing::info!(recorded, "session finished");
        Ok(recorded)
    }
}
