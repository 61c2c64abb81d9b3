//! Interactive input prompter
//!
//! Reads and validates transaction fields line by line. Invalid input prints
//! the reason and asks again.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Category, Money};

/// Parse a user-supplied `dd/mm/yyyy` date
pub fn validate_date(value: &str) -> LedgerResult<NaiveDate> {
    parse_date(value).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Please enter the date in dd/mm/yyyy format",
            value.trim()
        ))
    })
}

/// Parse a user-supplied amount, which must be greater than zero
pub fn validate_amount(value: &str) -> LedgerResult<Money> {
    let amount = Money::parse(value).map_err(|e| LedgerError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(LedgerError::Validation(
            "Amount must be a non-negative non-zero value".into(),
        ));
    }
    Ok(amount)
}

/// Resolve user input to Income or Expense
pub fn validate_category(value: &str) -> LedgerResult<Category> {
    Category::from_input(value).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid category: '{}'. Please enter 'I' for Income or 'E' for Expense",
            value.trim()
        ))
    })
}

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts, also available for regular output
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line, `None` at end of input
    pub fn read_line_opt(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print `prompt` and read one line; end of input is an error
    pub fn read_line(&mut self, prompt: &str) -> LedgerResult<String> {
        self.read_line_opt(prompt)?
            .ok_or_else(|| LedgerError::Io("unexpected end of input".into()))
    }

    /// Ask for a date; a blank answer means today when `allow_default` is set
    pub fn date(&mut self, prompt: &str, allow_default: bool) -> LedgerResult<NaiveDate> {
        loop {
            let line = self.read_line(prompt)?;
            if allow_default && line.trim().is_empty() {
                return Ok(chrono::Local::now().date_naive());
            }
            match validate_date(&line) {
                Ok(date) => return Ok(date),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    pub fn amount(&mut self) -> LedgerResult<Money> {
        loop {
            let line = self.read_line("Enter the amount: ")?;
            match validate_amount(&line) {
                Ok(amount) => return Ok(amount),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    pub fn category(&mut self) -> LedgerResult<Category> {
        loop {
            let line = self.read_line("Enter the category ('I' for Income or 'E' for Expense): ")?;
            match validate_category(&line) {
                Ok(category) => return Ok(category),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    pub fn description(&mut self) -> LedgerResult<String> {
        let line = self.read_line("Enter a description (optional): ")?;
        Ok(line.trim().to_string())
    }

    /// Yes/no question; anything but "y"/"yes" is no
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        let line = self.read_line(prompt)?;
        Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}
