//! Single-cell step invariant: consecutive snapshots differ by one mark.

use super::Invariant;
use crate::{Cell, GameState, Position};

/// Invariant: each entry after the first changes exactly one cell of its
/// predecessor, the recorded move, from empty to occupied.
pub struct SingleCellStepInvariant;

impl Invariant<GameState> for SingleCellStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(played) = after.played() else {
                return false;
            };

            Position::ALL.iter().all(|&pos| {
                let (old, new) = (before.board().get(pos), after.board().get(pos));
                if pos == played {
                    old == Cell::Empty && new != Cell::Empty
                } else {
                    old == new
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Player};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            let _ = game.apply_move(pos);
        }
        assert!(SingleCellStepInvariant::holds(&game));
    }

    #[test]
    fn test_two_cells_in_one_step_violates() {
        let mut game = GameState::new();
        let board = Board::new().with_mark(Position::TopLeft, Player::O);
        game.history
            .push(HistoryEntry::after(&board, Position::Center, Player::X));
        assert!(!SingleCellStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut game = GameState::new();
        let _ = game.apply_move(Position::Center);
        let overwritten = HistoryEntry::after(game.current_board(), Position::Center, Player::O);
        game.history.push(overwritten);
        assert!(!SingleCellStepInvariant::holds(&game));
    }
}
