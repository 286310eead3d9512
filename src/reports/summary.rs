//! Budget summary
//!
//! Aggregates the ledger by category and works out how much of the monthly
//! budget is left, both in total and per remaining day of the month.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money};
use crate::storage::{Ledger, LedgerEntry};

/// Total spending for one ledger category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category as shown to the user ("Food 🍔", or the raw ledger text)
    pub category: String,
    pub total: Money,
}

/// Budget summary derived from the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Spending per category: known categories in menu order, then any other
    /// ledger categories in order of first appearance
    pub by_category: Vec<CategoryTotal>,
    pub total_spent: Money,
    /// Budget minus total spent; negative when overspent
    pub remaining_budget: Money,
    /// Days left in the month after `today`
    pub remaining_days: u32,
    /// Remaining budget spread over the remaining days, zero if none remain
    pub budget_per_day: Money,
}

impl Summary {
    /// Build a summary from ledger entries
    ///
    /// Returns `None` if a total does not fit in `Money`.
    pub fn from_entries(
        entries: &[LedgerEntry],
        budget: Money,
        today: NaiveDate,
    ) -> Option<Self> {
        let mut known: [Option<Money>; 5] = [None; 5];
        let mut others: Vec<CategoryTotal> = Vec::new();

        for entry in entries {
            match Category::from_ledger(&entry.category) {
                Some(category) => {
                    let slot = &mut known[category.index()];
                    *slot = Some(slot.unwrap_or_default().checked_add(entry.amount)?);
                }
                None => {
                    let name = entry.category.trim();
                    match others.iter_mut().find(|t| t.category == name) {
                        Some(existing) => {
                            existing.total = existing.total.checked_add(entry.amount)?;
                        }
                        None => others.push(CategoryTotal {
                            category: name.to_string(),
                            total: entry.amount,
                        }),
                    }
                }
            }
        }

        let by_category: Vec<CategoryTotal> = Category::all()
            .iter()
            .filter_map(|category| {
                known[category.index()].map(|total| CategoryTotal {
                    category: category.display_name(),
                    total,
                })
            })
            .chain(others)
            .collect();

        let total_spent = by_category
            .iter()
            .try_fold(Money::zero(), |acc, t| acc.checked_add(t.total))?;
        let remaining_budget = budget.checked_sub(total_spent)?;
        let remaining_days = remaining_days_in_month(today);
        let budget_per_day = remaining_budget.divide_evenly(remaining_days);

        Some(Self {
            by_category,
            total_spent,
            remaining_budget,
            remaining_days,
            budget_per_day,
        })
    }

    /// Whether the per-day budget line applies
    pub fn has_daily_budget(&self) -> bool {
        self.remaining_days > 0
    }
}

/// Summarize the ledger against a monthly budget
///
/// Returns `None` when there is no ledger yet (nothing to report).
pub fn summarize(
    ledger: &Ledger,
    budget: Money,
    today: NaiveDate,
) -> TrackerResult<Option<Summary>> {
    let Some(entries) = ledger.entries()? else {
        tracing::debug!(path = %ledger.path().display(), "no ledger to summarize");
        return Ok(None);
    };

    let summary = Summary::from_entries(&entries, budget, today).ok_or_else(|| {
        TrackerError::ledger(ledger.path(), "amounts are too large to total")
    })?;
    tracing::debug!(
        rows = entries.len(),
        total_spent = %summary.total_spent,
        remaining_days = summary.remaining_days,
        "ledger summarized"
    );

    Ok(Some(summary))
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .map(|last| last.day())
        .unwrap_or_else(|| date.day())
}

/// Days left in the month after `date` (zero on the last day)
pub fn remaining_days_in_month(date: NaiveDate) -> u32 {
    days_in_month(date) - date.day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn build(entries: &[LedgerEntry], budget_cents: i64, today: NaiveDate) -> Summary {
        Summary::from_entries(entries, Money::from_cents(budget_cents), today).unwrap()
    }

    fn entry(category: &str, cents: i64) -> LedgerEntry {
        LedgerEntry {
            name: "x".into(),
            amount: Money::from_cents(cents),
            category: category.into(),
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2025, 1, 15)), 31);
        assert_eq!(days_in_month(date(2025, 4, 1)), 30);
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2025, 12, 31)), 31);
    }

    #[test]
    fn test_remaining_days() {
        assert_eq!(remaining_days_in_month(date(2025, 6, 10)), 20);
        assert_eq!(remaining_days_in_month(date(2025, 6, 30)), 0);
        assert_eq!(remaining_days_in_month(date(2025, 1, 1)), 30);
    }

    #[test]
    fn test_groups_in_category_order() {
        let entries = vec![
            entry("Misc ✨", 100),
            entry("Food 🍔", 250),
            entry("Misc ✨", 50),
            entry("Food 🍔", 1000),
        ];

        let summary = build(&entries, 200_000, date(2025, 6, 10));

        assert_eq!(
            summary.by_category,
            vec![
                CategoryTotal {
                    category: "Food 🍔".into(),
                    total: Money::from_cents(1250),
                },
                CategoryTotal {
                    category: "Misc ✨".into(),
                    total: Money::from_cents(150),
                },
            ]
        );
        assert_eq!(summary.total_spent.cents(), 1400);
        assert_eq!(summary.remaining_budget.cents(), 198_600);
    }

    #[test]
    fn test_unknown_categories_follow_known_ones() {
        let entries = vec![
            entry("Travel", 500),
            entry("fun", 100),
            entry("Gifts", 200),
            entry("Travel", 500),
            entry("Fun 🎉", 100),
        ];

        let summary = build(&entries, 0, date(2025, 6, 10));
        let names: Vec<_> = summary
            .by_category
            .iter()
            .map(|t| t.category.as_str())
            .collect();

        assert_eq!(names, vec!["Fun 🎉", "Travel", "Gifts"]);
        assert_eq!(summary.by_category[0].total.cents(), 200);
        assert_eq!(summary.by_category[1].total.cents(), 1000);
        assert_eq!(summary.total_spent.cents(), 1400);
    }

    #[test]
    fn test_overspend_is_negative() {
        let entries = vec![entry("Home 🏠", 250_000)];
        let summary = build(&entries, 200_000, date(2025, 6, 20));

        assert_eq!(summary.remaining_budget.cents(), -50_000);
        assert_eq!(summary.remaining_days, 10);
        assert_eq!(summary.budget_per_day.cents(), -5_000);
    }

    #[test]
    fn test_last_day_of_month_has_no_daily_budget() {
        let entries = vec![entry("Food 🍔", 1000)];
        let summary = build(&entries, 200_000, date(2025, 2, 28));

        assert_eq!(summary.remaining_days, 0);
        assert_eq!(summary.budget_per_day, Money::zero());
        assert!(!summary.has_daily_budget());
    }

    #[test]
    fn test_daily_budget_rounds_to_cents() {
        let summary = build(&[], 100_000, date(2025, 6, 27));

        assert_eq!(summary.remaining_days, 3);
        assert_eq!(summary.budget_per_day.cents(), 33_333);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_summarize_missing_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(temp_dir.path().join("expenses.csv"));

        let summary = summarize(&ledger, Money::from_cents(200_000), date(2025, 6, 1)).unwrap();
        assert_eq!(summary, None);
    }

    #[test]
    fn test_summarize_total_matches_appended_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(temp_dir.path().join("expenses.csv"));

        let amounts = [1, 10, 333, 12_34, 99_99, 5];
        for (i, cents) in amounts.iter().enumerate() {
            let category = Category::all()[i % Category::all().len()];
            let expense =
                Expense::new(format!("item {}", i), Money::from_cents(*cents), category).unwrap();
            ledger.append(&expense).unwrap();
        }

        let summary = summarize(&ledger, Money::from_cents(200_000), date(2025, 6, 1))
            .unwrap()
            .unwrap();

        assert_eq!(summary.total_spent.cents(), amounts.iter().sum::<i64>());
        assert_eq!(summary.by_category.len(), 5);
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let huge = i64::MAX / 2 + 1;

        let same_category = vec![entry("Food 🍔", huge), entry("Food 🍔", huge)];
        assert_eq!(
            Summary::from_entries(&same_category, Money::zero(), date(2025, 6, 1)),
            None
        );

        let across_categories = vec![entry("Food 🍔", huge), entry("Travel", huge)];
        assert_eq!(
            Summary::from_entries(&across_categories, Money::zero(), date(2025, 6, 1)),
            None
        );

        let negative_budget = vec![entry("Food 🍔", 1)];
        let lowest = Money::from_cents(i64::MIN);
        assert_eq!(
            Summary::from_entries(&negative_budget, lowest, date(2025, 6, 1)),
            None
        );
    }

    #[test]
    fn test_largest_amounts_still_total() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(temp_dir.path().join("expenses.csv"));
        let largest = Money::parse_amount("999999999999.99").unwrap();

        for _ in 0..3 {
            let expense = Expense::new("Yacht", largest, Category::Fun).unwrap();
            ledger.append(&expense).unwrap();
        }

        let summary = summarize(&ledger, Money::from_cents(200_000), date(2025, 6, 1))
            .unwrap()
            .unwrap();

        assert_eq!(summary.total_spent.cents(), 3 * 99_999_999_999_999);
        assert!(summary.remaining_budget.is_negative());
    }
}
