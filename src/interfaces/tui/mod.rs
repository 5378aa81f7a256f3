//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal panel for managing course templates

use std::io;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{info, warn};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use crate::errors::{Result, TemplateError};
use crate::runtime::lifetime::PanelContext;
use app::App;
use constants::TICK_RATE;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(panel: PanelContext) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(panel);
    app.start_refresh();
    info!("Admin panel started");

    let res = run_app(&mut terminal, &mut app).await;
    app.shutdown();

    // Restore terminal
    restore_terminal();
    terminal.show_cursor()?;

    res.map_err(|e| TemplateError::unexpected(format!("Terminal error: {}", e)))
}

/// Leave raw mode and the alternate screen, ignoring failures
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stderr(), LeaveAlternateScreen) {
        warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| ui(f, app))?;

        // Poll so notifications expire and spinners move without input
        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            info!("Admin panel closed");
            return Ok(());
        }
    }
}
