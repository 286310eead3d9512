//! User settings for the expense tracker
//!
//! Holds the monthly budget, the ledger location and the currency symbol used
//! in the summary. Every field has a default, so a missing or partial
//! `config.json` still loads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Default monthly budget (2000.00)
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_cents(200_000);

/// Default ledger file, relative to the working directory
pub const DEFAULT_LEDGER_FILE: &str = "expenses.csv";

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget for one calendar month
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Ledger CSV location; relative paths resolve against the working directory
    #[serde(default = "default_ledger_file")]
    pub ledger_file: PathBuf,

    /// Currency symbol shown in summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    DEFAULT_MONTHLY_BUDGET
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_FILE)
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            ledger_file: default_ledger_file(),
            currency_symbol: default_currency(),
        }
    }
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub ledger_file: Option<PathBuf>,
    pub monthly_budget: Option<Money>,
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Nothing is written; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();
        let settings: Settings = read_json(&settings_path)?;

        tracing::debug!(
            path = %settings_path.display(),
            found = settings_path.exists(),
            "settings loaded"
        );

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self, TrackerError> {
        if let Some(ledger_file) = overrides.ledger_file {
            self.ledger_file = ledger_file;
        }
        if let Some(budget) = overrides.monthly_budget {
            self.monthly_budget = budget;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_file
    }

    fn validate(&self) -> Result<(), TrackerError> {
        if self.monthly_budget.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Monthly budget cannot be negative: {}",
                self.monthly_budget
            )));
        }
        if self.ledger_file.as_os_str().is_empty() {
            return Err(TrackerError::Validation("Ledger file path is empty".into()));
        }
        Ok(())
    }
}
