//! Terminal front end for rewind tic-tac-toe.
//!
//! Draws the board, the status line, the order toggle and the move list, and
//! turns clicks and key presses into game operations. Events are handled one
//! at a time, each to completion.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use app::App;
use config::TuiConfig;

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.game().history().len() - 1,
        status = %app.game().current_status(),
        "Exiting"
    );

    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut layout = None;
        terminal.draw(|frame| layout = Some(ui::draw(frame, app)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(layout) = &layout {
                    app.handle_click(mouse.column, mouse.row, layout);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
