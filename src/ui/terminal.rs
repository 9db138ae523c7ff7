use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::App;

type Backend = CrosstermBackend<Stdout>;

/// Spin up the terminal backend, draw, and keep processing key presses until
/// the user quits. The terminal is restored even when setup or the loop fails.
pub fn run_app(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut terminal = or_rollback(setup_terminal, abandon_setup)?;

    let result = event_loop(&mut terminal, app);
    let cleanup = cleanup_terminal(&mut terminal);
    result.and(cleanup)
}

fn setup_terminal() -> Result<Terminal<Backend>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("failed to create terminal backend")
}

/// Run `setup`; if it fails, run `rollback` before handing the error back.
fn or_rollback<T>(setup: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    let result = setup();
    if result.is_err() {
        rollback();
    }
    result
}

/// Undo a half-finished setup. The setup error is what gets reported, so
/// failures here are only logged.
fn abandon_setup() {
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        log::warn!("failed to leave alternate screen: {}", err);
    }
    if let Err(err) = disable_raw_mode() {
        log::warn!("failed to disable raw mode: {}", err);
    }
}

/// Blocks on one key at a time; every press, mapped or not, is followed by a
/// title update and a full redraw.
fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App) -> Result<()> {
    refresh(terminal, app)?;
    loop {
        match event::read().context("failed to read event")? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if app.handle_key(key_event.code) {
                    log::debug!("quit requested");
                    return Ok(());
                }
                refresh(terminal, app)?;
            }
            Event::Resize(..) => refresh(terminal, app)?,
            _ => {}
        }
    }
}

fn refresh(terminal: &mut Terminal<Backend>, app: &App) -> Result<()> {
    execute!(terminal.backend_mut(), SetTitle(app.title())).context("failed to set title")?;
    terminal
        .draw(|frame| app.draw(frame))
        .context("failed to draw frame")?;
    Ok(())
}

fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}
