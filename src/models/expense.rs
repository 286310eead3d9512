//! Expense model
//!
//! An expense is created from validated user input, written to the ledger and
//! then dropped. It is never modified after creation.

use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    name: String,
    amount: Money,
    category: Category,
}

impl Expense {
    /// Create a new expense, validating the name and amount
    ///
    /// The name is trimmed before it is stored.
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Result<Self, ExpenseValidationError> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        Ok(Self {
            name,
            amount,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The three ledger fields in column order: name, amount, category
    pub fn to_ledger_fields(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.amount.to_decimal_string(),
            self.category.display_name(),
        ]
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Expense: {}, {}, {}>", self.name, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
