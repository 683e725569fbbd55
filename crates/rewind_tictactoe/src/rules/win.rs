//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in evaluation priority order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions forming a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [Position; 3]);

impl WinningLine {
    /// Returns the three positions.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three raw indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// A detected win: who won and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The completed line.
    pub line: WinningLine,
}

/// Evaluates a board, returning the first completed line in [`LINES`] order.
///
/// Total over every board; returns `None` when no line is complete.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Occupied(player) if cell == board.get(b) && cell == board.get(c) => Some(Win {
                player,
                line: WinningLine([a, b, c]),
            }),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, player)| board.with_mark(pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_in_priority_order_wins() {
        // Impossible in play, but the detector is total: the row beats the column.
        let board = Board::from_cells([Cell::Occupied(Player::O); 9]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.line.indices(), [0, 1, 2]);

        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line.indices(), [0, 3, 6]);
    }

    #[test]
    fn test_line_contains() {
        let line = WinningLine(LINES[6]);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopRight));
    }
}
