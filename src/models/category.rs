//! Expense categories
//!
//! The category list is fixed. Its order is the order of the numbered menu
//! shown to the user and the order categories appear in the summary.

use std::fmt;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
}

impl Category {
    /// Get all categories in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Home, Self::Work, Self::Fun, Self::Misc]
    }

    /// Plain label without the icon
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Fun => "Fun",
            Self::Misc => "Misc",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Home => "🏠",
            Self::Work => "💼",
            Self::Fun => "🎉",
            Self::Misc => "✨",
        }
    }

    /// Label and icon, as written to the ledger ("Food 🍔")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.label(), self.icon())
    }

    /// Look up a category by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::all().get(index))
            .copied()
    }

    /// Recognise a ledger category string
    ///
    /// Matches the display name or the bare label, ignoring case and
    /// surrounding whitespace, so lightly hand-edited ledgers still sort into
    /// the right bucket.
    pub fn from_ledger(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all().iter().copied().find(|category| {
            value == category.display_name() || value.eq_ignore_ascii_case(category.label())
        })
    }

    /// Position in menu order (0-based)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = Category::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Food", "Home", "Work", "Fun", "Misc"]);
    }

    #[test]
    fn test_from_menu_number() {
        for (i, expected) in Category::all().iter().enumerate() {
            assert_eq!(Category::from_menu_number(i + 1), Some(*expected));
        }
        assert_eq!(Category::from_menu_number(0), None);
        assert_eq!(Category::from_menu_number(6), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Category::Food.display_name(), "Food 🍔");
        assert_eq!(Category::Misc.to_string(), "Misc ✨");
    }

    #[test]
    fn test_from_ledger() {
        assert_eq!(Category::from_ledger("Work 💼"), Some(Category::Work));
        assert_eq!(Category::from_ledger("fun"), Some(Category::Fun));
        assert_eq!(Category::from_ledger(" Home "), Some(Category::Home));
        assert_eq!(Category::from_ledger("Travel"), None);
    }

    #[test]
    fn test_index() {
        assert_eq!(Category::Food.index(), 0);
        assert_eq!(Category::Misc.index(), 4);
    }
}
