//! History entries: immutable board snapshots.

use crate::rules;
use crate::{Board, Player, Position};
use serde::Serialize;

/// One snapshot of the board plus the move that produced it.
///
/// The winner is computed once, when the entry is created, so every entry
/// carries the verdict for its own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) played: Option<Position>,
    pub(crate) winner: Option<Player>,
}

impl HistoryEntry {
    /// The empty board at the start of every game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
            winner: None,
        }
    }

    /// Builds the entry reached by `player` marking `pos` on `previous`.
    pub(crate) fn after(previous: &Board, pos: Position, player: Player) -> Self {
        let board = previous.with_mark(pos, player);
        Self {
            board,
            played: Some(pos),
            winner: rules::check_winner(&board),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell played to reach this entry; `None` only for the initial entry.
    pub fn played(&self) -> Option<Position> {
        self.played
    }

    /// The winner detected on this board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Label offered to the player for jumping to this entry.
    ///
    /// Coordinates are printed column first, then row.
    pub fn label(&self, step: usize) -> String {
        match self.played {
            None => "Go to game start".to_string(),
            Some(pos) => format!("Go to move #{} ({}, {})", step, pos.column(), pos.row()),
        }
    }
}
