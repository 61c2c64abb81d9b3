//! Money type for representing ledger amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues when summing many records. Arithmetic is checked; callers decide
//! what an overflow means.

use std::fmt;

use thiserror::Error;

/// Largest accepted magnitude in whole units
pub const MAX_UNITS: i64 = 1_000_000_000_000_000;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use ledger_cli::models::Money;
    /// let amount = Money::from_cents(960); // 9.60
    /// assert_eq!(amount.to_string(), "9.60");
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

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Convert to a float for plotting
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a plain decimal amount
    ///
    /// Accepts "10", "10.5", "10.50", "-3.25" and ".75". More than two
    /// decimal places, or a magnitude above [`MAX_UNITS`], is an error.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (body, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(trimmed.to_string()))?
        };
        if units > MAX_UNITS {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = units * 100 + cents;
        if total > MAX_UNITS * 100 {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. "$9.60" or "-$3.00"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

/// Plain decimal form, as written to the ledger file
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid amount: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid amount: '{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("Invalid amount: '{0}' is out of range")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(960).to_string(), "9.60");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-300).format_with_symbol("€"), "-€3.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("9.6").unwrap().cents(), 960);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse(" 100 ").unwrap().cents(), 10000);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("-3.25").unwrap().cents(), -325);
    }

    #[test]
    fn test_parse_rejects_sub_cent_digits() {
        for input in ["1.999", "0.009", "9.999", "10.500"] {
            assert_eq!(
                Money::parse(input),
                Err(MoneyParseError::TooPrecise(input.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_bounds_magnitude() {
        let max = MAX_UNITS.to_string();
        assert_eq!(Money::parse(&max).unwrap().cents(), MAX_UNITS * 100);
        assert_eq!(
            Money::parse(&format!("-{}", max)).unwrap().cents(),
            -MAX_UNITS * 100
        );

        for input in [
            "1000000000000000.01",
            "1000000000000001",
            "92233720368547758",
            "99999999999999999999999",
        ] {
            assert_eq!(
                Money::parse(input),
                Err(MoneyParseError::OutOfRange(input.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", ".", "abc", "$10", "1,000.00", "1.2.3", "1.-5", "--1", "1e3"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(400);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1400)));
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(600)));
        assert_eq!(b.checked_sub(a), Some(Money::from_cents(-600)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(b), None);
    }
}
