//! Income/expense totals
//!
//! Sums a filtered record set into total income, total expense and net.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Record};

/// Totals over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of `Income` amounts
    pub income: Money,
    /// Sum of `Expense` amounts
    pub expense: Money,
    /// `income - expense`
    pub net: Money,
}

impl Totals {
    /// Format the totals for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Summary:\n");
        output.push_str(&format!(
            "Total Income:  {}\n",
            self.income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Total Expense: {}\n",
            self.expense.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Net Savings:   {}\n",
            self.net.format_with_symbol(currency_symbol)
        ));
        output
    }
}

/// Compute income, expense and net totals
///
/// Records whose category is neither `Income` nor `Expense` count toward
/// neither sum. A sum that leaves the amount range is an
/// [`LedgerError::Overflow`].
pub fn totals(records: &[Record]) -> LedgerResult<Totals> {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for record in records {
        let (sum, name) = match record.category {
            Category::Income => (&mut income, "total income"),
            Category::Expense => (&mut expense, "total expense"),
            Category::Other(_) => continue,
        };
        *sum = sum
            .checked_add(record.amount)
            .ok_or_else(|| LedgerError::Overflow(name.to_string()))?;
    }

    let net = income
        .checked_sub(expense)
        .ok_or_else(|| LedgerError::Overflow("net savings".to_string()))?;

    Ok(Totals {
        income,
        expense,
        net,
    })
}
