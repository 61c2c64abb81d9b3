//! Daily series for charting
//!
//! Income and expense series built from the same record set share one date
//! axis, so they can be plotted together.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Record};

/// Per-date sums of one category, ascending by date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    points: Vec<(NaiveDate, Money)>,
}

impl DailySeries {
    pub fn points(&self) -> &[(NaiveDate, Money)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value for a date, if the date is on the axis
    pub fn get(&self, date: NaiveDate) -> Option<Money> {
        self.points
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|i| self.points[i].1)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|(d, _)| *d)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(d, _)| *d)
    }

    /// Largest single-day value, zero for an empty series
    pub fn max_value(&self) -> Money {
        self.points
            .iter()
            .map(|(_, m)| *m)
            .max()
            .unwrap_or_default()
    }

    /// Fill every calendar day between the first and last date with zero
    pub fn resampled(&self) -> DailySeries {
        let (Some(first), Some(last)) = (self.first_date(), self.last_date()) else {
            return self.clone();
        };

        let points = first
            .iter_days()
            .take_while(|d| *d <= last)
            .map(|d| (d, self.get(d).unwrap_or_default()))
            .collect();

        DailySeries { points }
    }
}

/// Build the daily series of `category` over every distinct date in `records`
///
/// Dates with no record of `category` get zero. Same-date amounts are summed;
/// a day whose sum leaves the amount range is an [`LedgerError::Overflow`].
pub fn daily_series(records: &[Record], category: &Category) -> LedgerResult<DailySeries> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();

    for record in records {
        let entry = by_date.entry(record.date).or_default();
        if &record.category == category {
            *entry = entry.checked_add(record.amount).ok_or_else(|| {
                LedgerError::Overflow(format!("{} on {}", category, record.date))
            })?;
        }
    }

    Ok(DailySeries {
        points: by_date.into_iter().collect(),
    })
}
