//! Record category
//!
//! Only `Income` and `Expense` take part in totals. Any other stored value is
//! kept verbatim so that rows written by other tools survive a round trip.

use std::fmt;

/// Category of a ledger record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
    /// Anything else found in the ledger file, including an empty field
    Other(String),
}

impl Category {
    /// Map a stored category field to a Category (exact match)
    pub fn from_stored(value: &str) -> Self {
        match value {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }

    /// Resolve user input to Income or Expense
    ///
    /// Accepts "I", "E", "Income" and "Expense" in any case.
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "i" | "income" => Some(Self::Income),
            "e" | "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The value written to the ledger file
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(value) => value,
        }
    }

    /// Whether this category participates in totals
    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::Income | Self::Expense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
