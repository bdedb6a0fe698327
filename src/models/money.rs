//! Fixed-point amounts
//!
//! Amounts are integer cents. There is no currency attached: an expense
//! carries its currency code separately and nothing is ever converted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from input: one trillion units
    ///
    /// Ledger totals stay far below `i64::MAX` at this size.
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Create an amount from cents
    ///
    /// # Examples
    /// ```
    /// use splitbook::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole units and cents
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
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

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Split into `parts` amounts that sum exactly to `self`
    ///
    /// The leftover cents go one each to the first parts, so
    /// `10.00` split three ways is `[3.34, 3.33, 3.33]`.
    /// Zero parts yields an empty vector.
    pub fn split_evenly(&self, parts: usize) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }
        let n = parts as i64;
        let base = self.0 / n;
        let remainder = self.0 % n;
        (0..n)
            .map(|i| {
                if i < remainder.abs() {
                    Self(base + remainder.signum())
                } else {
                    Self(base)
                }
            })
            .collect()
    }

    /// Share of this amount for a percentage, rounded toward zero to the cent
    pub fn percentage(&self, percent: f64) -> Money {
        let raw = (self.0 as f64) * percent / 100.0;
        // nudge past float noise such as 332.99999999 before truncating
        Self((raw + raw.signum() * 1e-6).trunc() as i64)
    }

    /// Amount as a floating-point number of units, for ratios and charts
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse an amount
    ///
    /// Accepts "10.50", "-10.50", "10", "10.5". Digits past the second
    /// decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let cents = match digits.split_once('.') {
            Some((whole, fraction)) => {
                if fraction.contains('.') || !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let units: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                let fraction_cents: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                units
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction_cents))
                    .ok_or_else(invalid)?
            }
            None => digits
                .parse::<i64>()
                .ok()
                .and_then(|units| units.checked_mul(100))
                .ok_or_else(invalid)?,
        };

        if cents > Self::MAX.0 {
            return Err(MoneyParseError::TooLarge(trimmed.to_string()));
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a leading currency code, e.g. `USD 12.00`
    pub fn format_with_currency(&self, currency: &str) -> String {
        format!("{} {}", currency, self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part());
        f.pad(&text)
    }
}

// Sums saturate at the i64 bounds instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount too large: {} (max {})", s, Money::MAX)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
