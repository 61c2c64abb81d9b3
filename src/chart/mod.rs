//! Terminal chart of daily income and expenses
//!
//! Plots the Income and Expense daily series as two lines on a shared date
//! axis using ratatui's `Chart` widget.

pub mod terminal;

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::models::{format_date, Money};
use crate::reports::DailySeries;

pub use terminal::show_chart;

/// Plot-ready points for the two series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// (day offset from `first`, amount)
    pub income: Vec<(f64, f64)>,
    pub expense: Vec<(f64, f64)>,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub max_amount: Money,
}

impl ChartData {
    /// Build chart points from two series over the same dates
    ///
    /// Returns `None` when there is nothing to plot.
    pub fn from_series(income: &DailySeries, expense: &DailySeries) -> Option<Self> {
        let first = match (income.first_date(), expense.first_date()) {
            (Some(a), Some(b)) => a.min(b),
            (a, b) => a.or(b)?,
        };
        let last = match (income.last_date(), expense.last_date()) {
            (Some(a), Some(b)) => a.max(b),
            (a, b) => a.or(b)?,
        };

        Some(Self {
            income: to_points(income, first),
            expense: to_points(expense, first),
            first,
            last,
            max_amount: income.max_value().max(expense.max_value()),
        })
    }

    /// Width of the x axis in days (at least one so the axis is never empty)
    pub fn x_max(&self) -> f64 {
        ((self.last - self.first).num_days() as f64).max(1.0)
    }

    /// Top of the y axis with some headroom
    pub fn y_max(&self) -> f64 {
        let max = self.max_amount.as_f64();
        if max <= 0.0 {
            1.0
        } else {
            max * 1.1
        }
    }
}

fn to_points(series: &DailySeries, first: NaiveDate) -> Vec<(f64, f64)> {
    series
        .points()
        .iter()
        .map(|(date, amount)| ((*date - first).num_days() as f64, amount.as_f64()))
        .collect()
}

/// Draw the chart into `area`
pub fn draw_chart(frame: &mut Frame, area: Rect, data: &ChartData) {
    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&data.income),
        Dataset::default()
            .name("Expense")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&data.expense),
    ];

    let y_max = data.y_max();
    let x_labels = vec![
        Span::styled(
            format_date(data.first),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_date(data.last),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{:.0}", y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Income and Expenses Over Time (press any key) "),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, data.x_max()])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Record};
    use crate::reports::daily_series;
    use ratatui::{backend::TestBackend, Terminal};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn scenario() -> Vec<Record> {
        vec![
            Record::new(date(1), Money::from_cents(10000), Category::Income, "Salary"),
            Record::new(date(2), Money::from_cents(4000), Category::Expense, "Food"),
            Record::new(date(4), Money::from_cents(1000), Category::Expense, "Bus"),
        ]
    }

    fn chart_data(records: &[Record]) -> Option<ChartData> {
        let income = daily_series(records, &Category::Income).unwrap().resampled();
        let expense = daily_series(records, &Category::Expense).unwrap().resampled();
        ChartData::from_series(&income, &expense)
    }

    #[test]
    fn test_points_share_day_offsets() {
        let data = chart_data(&scenario()).unwrap();

        assert_eq!(
            data.income,
            vec![(0.0, 100.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]
        );
        assert_eq!(
            data.expense,
            vec![(0.0, 0.0), (1.0, 40.0), (2.0, 0.0), (3.0, 10.0)]
        );
        assert_eq!(data.first, date(1));
        assert_eq!(data.last, date(4));
        assert_eq!(data.x_max(), 3.0);
        assert_eq!(data.max_amount, Money::from_cents(10000));
    }

    #[test]
    fn test_nothing_to_plot() {
        assert!(chart_data(&[]).is_none());
    }

    #[test]
    fn test_single_day_axis_is_not_empty() {
        let records = vec![Record::new(
            date(5),
            Money::from_cents(500),
            Category::Expense,
            "Lunch",
        )];
        let data = chart_data(&records).unwrap();
        assert_eq!(data.x_max(), 1.0);
        assert!(data.y_max() > 5.0);
    }

    #[test]
    fn test_draw_renders_labels_and_legend() {
        let data = chart_data(&scenario()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| draw_chart(frame, frame.area(), &data))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Income and Expenses Over Time"));
        assert!(text.contains("01/01/2025"));
        assert!(text.contains("04/01/2025"));
        assert!(text.contains("Amount"));
    }
}
