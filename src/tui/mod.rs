// Module declarations
pub mod action;
pub mod app;
pub mod keys;
pub mod renderer;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use app::App;
pub use keys::key_to_action;

use std::io;
use std::time::Duration;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use crate::config::DisplayConfig;
use crate::dashboard::Dashboard;
use crate::view::MatchCard;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Puts the terminal back on drop, so an early `?` or a panic while drawing
/// never leaves it in raw mode
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard { restore: restore_terminal };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Main entry point for TUI mode
pub fn run(dashboard: &Dashboard, display: &DisplayConfig) -> Result<(), io::Error> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    // Matches never change after load, so the cards are derived once
    let cards = dashboard.view().cards();
    info!("Starting dashboard with {} matches", cards.len());
    let mut app = App::new(cards.len());

    run_loop(&mut terminal, &mut app, &cards, display)
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    cards: &[MatchCard],
    display: &DisplayConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            renderer::render(area, f.buffer_mut(), app, cards, display);
        })?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(key) {
                    app.reduce(action);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
