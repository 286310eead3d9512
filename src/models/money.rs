//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that ledger sums are exact.
//! Amounts travel through the ledger and the settings file as plain decimal
//! strings ("12.50").

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Longest whole-number part accepted when parsing (999,999,999,999.99 max)
pub const MAX_WHOLE_DIGITS: usize = 12;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a decimal amount as stored in the ledger or settings file
    ///
    /// Accepts an optional leading `-`, an optional whole part and an optional
    /// fractional part of one or two digits: "10", "10.5", "-10.50", ".75".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let cents = parse_unsigned_cents(digits, s)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse an expense amount typed by the user
    ///
    /// Only unsigned decimals without a currency symbol are accepted, with at
    /// most two fractional digits, and the result must be greater than zero.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// assert_eq!(Money::parse_amount("12.3").unwrap().cents(), 1230);
    /// assert!(Money::parse_amount("12.345").is_err());
    /// assert!(Money::parse_amount("-5").is_err());
    /// ```
    pub fn parse_amount(s: &str) -> Result<Self, MoneyParseError> {
        let cents = parse_unsigned_cents(s, s)?;

        if cents == 0 {
            return Err(MoneyParseError::NotPositive(s.to_string()));
        }

        Ok(Self(cents))
    }

    /// Addition that reports overflow instead of wrapping
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction that reports overflow instead of wrapping
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Split this amount into `parts` equal shares, rounded to the nearest
    /// cent (half away from zero). Zero parts yields zero.
    pub fn divide_evenly(&self, parts: u32) -> Self {
        if parts == 0 {
            return Self::zero();
        }

        let parts = i64::from(parts);
        let quotient = self.0 / parts;
        let remainder = self.0 % parts;

        if remainder.abs() * 2 >= parts {
            Self(quotient + self.0.signum())
        } else {
            Self(quotient)
        }
    }

    /// Plain decimal representation without a currency symbol ("-12.50")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

/// Parse `\d*(\.\d{1,2})?` into cents, requiring at least one digit
///
/// `original` is the full input, used in error values.
fn parse_unsigned_cents(s: &str, original: &str) -> Result<i64, MoneyParseError> {
    let invalid = || MoneyParseError::InvalidFormat(original.to_string());

    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };

    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let fraction_cents = match fraction {
        None => {
            if whole.is_empty() {
                return Err(invalid());
            }
            0
        }
        Some(f) => {
            if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: i64 = f.parse().map_err(|_| invalid())?;
            if f.len() == 1 {
                value * 10
            } else {
                value
            }
        }
    };

    let whole = whole.trim_start_matches('0');
    if whole.len() > MAX_WHOLE_DIGITS {
        return Err(MoneyParseError::TooLarge(original.to_string()));
    }

    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };

    Ok(whole_value * 100 + fraction_cents)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse(raw.trim()).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotPositive(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotPositive(s) => write!(f, "Amount must be greater than zero: {}", s),
            MoneyParseError::TooLarge(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
