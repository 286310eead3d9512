//! Summary formatting for terminal output

use std::fmt::Write;

use crate::models::Money;
use crate::reports::Summary;

/// Formats budget summaries using a fixed currency symbol
#[derive(Debug, Clone)]
pub struct SummaryFormatter {
    currency_symbol: String,
}

impl SummaryFormatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Render a summary, or nothing at all when there is no summary
    pub fn render(&self, summary: Option<&Summary>) -> String {
        let Some(summary) = summary else {
            return String::new();
        };

        // Writing into a String cannot fail
        let mut out = String::new();

        let _ = writeln!(out, "Expenses by Category:");
        for total in &summary.by_category {
            let _ = writeln!(out, "  {}: {}", total.category, self.money(total.total));
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Total Spent: {}", self.money(summary.total_spent));
        let _ = writeln!(
            out,
            "Budget Remaining: {}",
            self.money(summary.remaining_budget)
        );
        let _ = writeln!(
            out,
            "Remaining days in the current month: {}",
            summary.remaining_days
        );

        if summary.has_daily_budget() {
            let _ = writeln!(out, "Budget Per Day 👉: {}", self.money(summary.budget_per_day));
        }

        out
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

/// Render a summary with the default `$` symbol
pub fn render(summary: Option<&Summary>) -> String {
    SummaryFormatter::default().render(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::CategoryTotal;

    fn summary(remaining_days: u32) -> Summary {
        Summary {
            by_category: vec![
                CategoryTotal {
                    category: "Food 🍔".into(),
                    total: Money::from_cents(1250),
                },
                CategoryTotal {
                    category: "Fun 🎉".into(),
                    total: Money::from_cents(248_750),
                },
            ],
            total_spent: Money::from_cents(250_000),
            remaining_budget: Money::from_cents(-50_000),
            remaining_days,
            budget_per_day: if remaining_days > 0 {
                Money::from_cents(-50_000).divide_evenly(remaining_days)
            } else {
                Money::zero()
            },
        }
    }

    #[test]
    fn test_render_none_is_empty() {
        assert_eq!(render(None), "");
    }

    #[test]
    fn test_render_full_summary() {
        let text = render(Some(&summary(10)));

        assert_eq!(
            text,
            "Expenses by Category:\n\
             \x20 Food 🍔: $12.50\n\
             \x20 Fun 🎉: $2487.50\n\
             \n\
             Total Spent: $2500.00\n\
             Budget Remaining: -$500.00\n\
             Remaining days in the current month: 10\n\
             Budget Per Day 👉: -$50.00\n"
        );
    }

    #[test]
    fn test_no_daily_line_on_last_day() {
        let text = render(Some(&summary(0)));

        assert!(text.contains("Remaining days in the current month: 0\n"));
        assert!(!text.contains("Budget Per Day"));
    }

    #[test]
    fn test_custom_symbol() {
        let text = SummaryFormatter::new("€").render(Some(&summary(10)));
        assert!(text.contains("Budget Remaining: -€500.00"));
    }
}
