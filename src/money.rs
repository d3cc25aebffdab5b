//! Monetary values in integer minor currency units.
//!
//! Amounts are stored as `i64` cents to keep all pricing arithmetic exact,
//! with locale-aware currency formatting applied only at render time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// An amount of money in minor currency units (e.g. cents for USD).
///
/// # Examples
///
/// ```
/// use statement_engine::Money;
///
/// let amount = Money::from_minor(65_000);
/// assert_eq!(amount.to_string(), "650.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Creates an amount from a count of minor units.
    pub const fn from_minor(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount as minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Returns `true` if this amount is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Locale and currency configuration for rendering amounts.
///
/// Passed explicitly to the renderer rather than held as global state,
/// so statements can be formatted for any supported locale in tests
/// and by alternate renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// BCP 47 locale tag controlling digit grouping (e.g. `en-US`).
    pub locale: String,

    /// ISO 4217 currency code controlling the symbol (e.g. `USD`).
    pub currency: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Creates a format for the given locale and currency.
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        CurrencyFormat {
            locale: locale.into(),
            currency: currency.into(),
        }
    }

    /// Formats an amount with symbol, digit grouping, and two fraction digits.
    ///
    /// ```
    /// use statement_engine::{CurrencyFormat, Money};
    ///
    /// let format = CurrencyFormat::default();
    /// assert_eq!(format.format(Money::from_minor(123_000)), "$1,230.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let (group_sep, decimal_sep) = self.separators();
        let sign = if amount.minor_units() < 0 { "-" } else { "" };
        let abs = amount.minor_units().unsigned_abs();
        let major = group_digits(abs / 100, group_sep);
        let body = format!("{}{}{}{:02}", sign, major, decimal_sep, abs % 100);

        match self.symbol() {
            Some(symbol) if self.symbol_is_suffix() => format!("{}\u{a0}{}", body, symbol),
            Some(symbol) => format!("{}{}", symbol, body),
            None => format!("{} {}", self.currency, body),
        }
    }

    /// Grouping and decimal separators for the configured locale.
    ///
    /// Unrecognized locales fall back to en-US conventions.
    fn separators(&self) -> (char, char) {
        match self.locale.as_str() {
            "de-DE" => ('.', ','),
            "fr-FR" => ('\u{a0}', ','),
            _ => (',', '.'),
        }
    }

    /// Symbol for the configured currency, if recognized.
    fn symbol(&self) -> Option<&'static str> {
        match self.currency.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{a3}"),
            _ => None,
        }
    }

    /// German and French conventions place the symbol after the amount.
    fn symbol_is_suffix(&self) -> bool {
        matches!(self.locale.as_str(), "de-DE" | "fr-FR")
    }
}

/// Renders a non-negative integer with a separator every three digits.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
