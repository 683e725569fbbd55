//! The game state machine: history, step pointer and display order.
//!
//! States are implicit in the data. The entry at the current step decides
//! whether the game is in progress, won or tied; nothing about the status is
//! stored separately.

use crate::contracts::{Contract, MoveContract};
use crate::error::{GameError, GameErrorKind};
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::rules::{self, WinningLine};
use crate::{Board, HistoryEntry, IgnoredMove, MoveOutcome, Player, Position, Status};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Authoritative game state.
///
/// Owns every board snapshot reached so far. Moving back through history
/// only moves the pointer; the first move played from an earlier step
/// discards the entries beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) order_ascending: bool,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Creates a new game holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            order_ascending: true,
        }
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order_ascending: bool) -> Self {
        Self {
            order_ascending,
            ..Self::new()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Plays the next mark at `pos` on the displayed board.
    ///
    /// X plays from even steps and O from odd ones. Any history beyond the
    /// current step is discarded before the new entry is appended, and the
    /// new entry becomes current.
    ///
    /// The move is ignored, leaving the state untouched, when the displayed
    /// board already has a winner or `pos` is occupied.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &pos) {
            return MoveOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = Player::to_move_at(self.current_step);
        let entry = HistoryEntry::after(self.current_board(), pos, mover);
        let discarded = self.history.len() - (self.current_step + 1);

        self.history.truncate(self.current_step + 1);
        self.history.push(entry);
        self.current_step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        self.assert_postcondition(&before);

        debug!(
            player = %mover,
            position = %pos,
            discarded,
            step = self.current_step,
            "Move applied"
        );
        if let Some(winner) = entry.winner() {
            info!(%winner, step = self.current_step, "Game won");
        }

        MoveOutcome::Applied {
            step: self.current_step,
        }
    }

    /// Plays at a raw board index (0-8).
    ///
    /// Indices outside the board are ignored like any other illegal click.
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => MoveOutcome::Ignored(IgnoredMove::OutOfRange(index)),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_postcondition(&self, before: &GameState) {
        if let Err(violations) = MoveContract::post(before, self) {
            panic!("move postcondition violated: {violations:?}");
        }
    }

    /// Moves the pointer to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidStep`] if `step` is not an index into
    /// the history. Front ends only ever offer steps taken from
    /// [`GameState::move_list`], so this indicates a caller bug.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            return Err(GameError::new(GameErrorKind::InvalidStep { step, len }));
        }

        self.current_step = step;
        debug!(step, "Jumped to step");
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(was_ascending = self.order_ascending))]
    pub fn toggle_order(&mut self) {
        self.order_ascending = !self.order_ascending;
        debug!(ascending = self.order_ascending, "Move order toggled");
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors and derived state
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Every entry, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed entry.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is shown oldest first.
    pub fn order_ascending(&self) -> bool {
        self.order_ascending
    }

    /// The displayed entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Whether the displayed entry is the newest one.
    pub fn is_at_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Status of the displayed board.
    pub fn current_status(&self) -> Status {
        let entry = self.current_entry();
        if let Some(winner) = entry.winner() {
            Status::Won(winner)
        } else if rules::is_full(entry.board()) {
            Status::Tied
        } else {
            Status::InProgress(Player::to_move_at(self.current_step))
        }
    }

    /// The player to move on the displayed board, if the game is still open.
    pub fn next_player(&self) -> Option<Player> {
        match self.current_status() {
            Status::InProgress(player) => Some(player),
            _ => None,
        }
    }

    /// The completed line on the displayed board, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate(self.current_board()).map(|win| win.line)
    }

    /// Checks every history invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut GameState, moves: &[usize]) {
        for &index in moves {
            assert!(game.apply_index(index).is_applied(), "move {index} refused");
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert!(game.order_ascending());
        assert_eq!(game.current_status(), Status::InProgress(Player::X));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let mut game = GameState::new();
        let outcome = game.apply_move(Position::Center);
        assert_eq!(outcome, MoveOutcome::Applied { step: 1 });
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.current_entry().played(), Some(Position::Center));
        assert_eq!(game.next_player(), Some(Player::O));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = GameState::new();
        play(&mut game, &[4]);
        let before = game.clone();

        let outcome = game.apply_move(Position::Center);
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(IgnoredMove::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_index(9),
            MoveOutcome::Ignored(IgnoredMove::OutOfRange(9))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 3, 4, 6]);
        let before = game.clone();

        assert_eq!(game.apply_index(8), MoveOutcome::Ignored(IgnoredMove::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_to_moves_only_the_pointer() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0, 8]);
        let history = game.history().to_vec();

        game.jump_to(1).unwrap();
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_status(), Status::InProgress(Player::O));
        assert!(!game.is_at_latest());
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut game = GameState::new();
        play(&mut game, &[4]);

        let err = game.jump_to(2).unwrap_err();
        assert_eq!(err.kind(), GameErrorKind::InvalidStep { step: 2, len: 2 });
        assert_eq!(game.current_step(), 1);
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0]);
        let before = game.clone();
        game.jump_to(game.current_step()).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_replay_from_won_position_in_past() {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 3, 4, 6]);
        assert_eq!(game.current_status(), Status::Won(Player::X));

        // Rewinding before the win reopens the board.
        game.jump_to(4).unwrap();
        assert_eq!(game.current_status(), Status::InProgress(Player::X));
        assert_eq!(game.winning_line(), None);
        play(&mut game, &[8]);
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.current_status(), Status::InProgress(Player::O));
    }

    #[test]
    fn test_toggle_order_leaves_history_alone() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0]);
        let history = game.history().to_vec();

        game.toggle_order();
        assert!(!game.order_ascending());
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_step(), 2);

        game.toggle_order();
        assert!(game.order_ascending());
    }

    #[test]
    fn test_with_order() {
        assert!(!GameState::with_order(false).order_ascending());
        assert_eq!(GameState::with_order(false).history().len(), 1);
    }

    #[test]
    fn test_invariants_hold_through_play() {
        let mut game = GameState::new();
        play(&mut game, &[0, 4, 8]);
        game.jump_to(1).unwrap();
        play(&mut game, &[2]);
        assert!(game.check_invariants().is_ok());
    }
}
