//! Application state and input handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

use crate::config::TuiConfig;
use crate::input::{digit_position, move_cursor};
use crate::ui::ScreenLayout;

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    show_key_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameState::with_order(*config.order_ascending()),
            cursor: Position::Center,
            show_key_hints: *config.show_key_hints(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether key numbers and the legend are drawn.
    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('t') => self.game.toggle_order(),
            KeyCode::Char('[') | KeyCode::PageUp => {
                if let Some(step) = self.game.current_step().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                if !self.game.is_at_latest() {
                    self.jump(self.game.current_step() + 1);
                }
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.history().len() - 1),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    /// Handles a left click at a screen coordinate.
    #[instrument(skip(self, layout))]
    pub fn handle_click(&mut self, column: u16, row: u16, layout: &ScreenLayout) {
        if let Some(pos) = layout.cell_at(column, row) {
            self.cursor = pos;
            self.play(pos);
        } else if layout.on_toggle(column, row) {
            self.game.toggle_order();
        } else if let Some(line) = layout.move_line_at(column, row) {
            let step = self.game.move_list().get(line).map(|item| item.step);
            if let Some(step) = step {
                self.jump(step);
            }
        }
    }

    fn play(&mut self, pos: Position) {
        if let MoveOutcome::Applied { step } = self.game.apply_move(pos) {
            debug!(step, status = %self.game.current_status(), "Board updated");
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(err) = self.game.jump_to(step) {
            warn!(%err, "Rejected jump to a step the UI offered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use rewind_tictactoe::{Player, Status};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.game().current_status(), Status::InProgress(Player::O));
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().current_entry().played(), Some(Position::TopCenter));
    }

    #[test]
    fn test_stepping_through_history() {
        let mut app = app();
        for c in ['1', '2', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().current_step(), 2);
        app.handle_key(KeyCode::Home);
        assert_eq!(app.game().current_step(), 0);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().current_step(), 0);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().current_step(), 1);
        app.handle_key(KeyCode::End);
        assert_eq!(app.game().current_step(), 3);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.game().current_step(), 3);
    }

    #[test]
    fn test_toggle_and_quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('t'));
        assert!(!app.game().order_ascending());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_clicks_play_toggle_and_jump() {
        let mut app = app();
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 30));

        let center = layout.cells[Position::Center.to_index()];
        app.handle_click(center.x + 1, center.y + 1, &layout);
        assert_eq!(app.game().history().len(), 2);

        // Clicking the same cell again changes nothing.
        app.handle_click(center.x + 1, center.y + 1, &layout);
        assert_eq!(app.game().history().len(), 2);

        // First list line is the game start while ascending.
        app.handle_click(layout.moves.x + 2, layout.moves.y + 1, &layout);
        assert_eq!(app.game().current_step(), 0);

        app.handle_click(layout.toggle.x + 1, layout.toggle.y + 1, &layout);
        assert!(!app.game().order_ascending());

        // Descending: first line is now the newest move.
        app.handle_click(layout.moves.x + 2, layout.moves.y + 1, &layout);
        assert_eq!(app.game().current_step(), 1);

        // Below the last entry: nothing to jump to.
        app.handle_click(layout.moves.x + 2, layout.moves.y + 5, &layout);
        assert_eq!(app.game().current_step(), 1);
    }

    #[test]
    fn test_descending_config() {
        let config: TuiConfig = toml::from_str("order_ascending = false").unwrap();
        let app = App::new(&config);
        assert!(!app.game().order_ascending());
    }
}
