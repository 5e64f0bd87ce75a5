//! Terminal UI: a synchronous draw/input loop over a match session.

mod app;
mod ui;
mod view;

pub use app::{App, AppTransition};
pub use view::StatusView;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, instrument};

use crate::config::MatchConfig;

/// Runs the match TUI until the user quits.
///
/// Owns the terminal lifecycle: raw mode and the alternate screen are
/// entered here and restored before returning, on error as well as on a
/// clean quit.
#[instrument(skip(config))]
pub fn run(config: &MatchConfig) -> Result<()> {
    info!("starting match TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The draw/input loop. Each accepted key runs one fully resolved state
/// change through the session before the next frame is drawn.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &MatchConfig,
) -> Result<()> {
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Crossterm reports press and release; act on press only.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == AppTransition::Quit {
                info!("exiting match TUI");
                return Ok(());
            }
        }
    }
}
