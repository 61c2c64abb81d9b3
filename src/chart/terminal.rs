//! Terminal setup and teardown for the chart view
//!
//! Enters the alternate screen, draws the chart until a key is pressed, and
//! always restores the terminal, including on panic.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use super::{draw_chart, ChartData};
use crate::error::{LedgerError, LedgerResult};
use crate::reports::DailySeries;

type ChartTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Show the income/expense chart full screen until a key is pressed
///
/// Does nothing when both series are empty.
pub fn show_chart(income: &DailySeries, expense: &DailySeries) -> LedgerResult<()> {
    let Some(data) = ChartData::from_series(income, expense) else {
        debug!("no data points, skipping chart");
        return Ok(());
    };

    install_panic_hook();
    enable_raw_mode().map_err(chart_error)?;

    let drawn = enter_and_run(&data);
    let restored = restore_terminal();
    first_error(drawn, restored)
}

fn enter_and_run(data: &ChartData) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run(&mut terminal, data)
}

fn run(terminal: &mut ChartTerminal, data: &ChartData) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_chart(frame, frame.area(), data))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });
}

/// Leave raw mode and the alternate screen, attempting both steps
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    raw.and(screen)
}

/// The drawing error wins; a restore error surfaces only after a clean draw
fn first_error(drawn: io::Result<()>, restored: io::Result<()>) -> LedgerResult<()> {
    drawn.and(restored).map_err(chart_error)
}

fn chart_error(err: io::Error) -> LedgerError {
    LedgerError::Chart(err.to_string())
}
