//! CLI command handlers
//!
//! The default command is the interactive session. The other commands inspect
//! the ledger or the configuration without prompting.

pub mod collector;
pub mod session;

use chrono::NaiveDate;

use crate::config::{Settings, TrackerPaths};
use crate::display::SummaryFormatter;
use crate::error::TrackerResult;
use crate::reports::summarize;
use crate::storage::Ledger;

pub use collector::Prompter;
pub use session::Session;

/// Print the summary of the existing ledger once
pub fn handle_summary_command(settings: &Settings, today: NaiveDate) -> TrackerResult<()> {
    let ledger = Ledger::new(settings.ledger_path());
    let summary = summarize(&ledger, settings.monthly_budget, today)?;

    match summary {
        Some(summary) => {
            let formatter = SummaryFormatter::new(settings.currency_symbol.clone());
            print!("{}", formatter.render(Some(&summary)));
        }
        None => println!("No expenses recorded yet."),
    }

    Ok(())
}

/// Show resolved paths and effective settings
pub fn handle_config_command(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Config file:    {}", paths.settings_file().display());
    println!(
        "                ({})",
        if paths.is_initialized() {
            "present"
        } else {
            "not created, using defaults"
        }
    );
    println!("Ledger file:    {}", settings.ledger_path().display());
    println!(
        "Monthly budget: {}",
        settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
    );
    println!("Currency:       {}", settings.currency_symbol);
}

/// Write the settings file so it can be edited
pub fn handle_init_command(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings already exist at {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!("Wrote settings to {}", paths.settings_file().display());
    Ok(())
}
