//! Presentation boundary.
//!
//! Everything a front end needs to draw the game, derived on demand from the
//! history and the step pointer.

use crate::rules::WinningLine;
use crate::{Cell, GameState, Status};
use serde::Serialize;
use tracing::instrument;

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// History step this item jumps to.
    pub step: usize,
    /// Text shown to the player.
    pub label: String,
    /// Whether this is the displayed step (drawn emphasised).
    pub is_current: bool,
}

/// Snapshot of everything shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The displayed board, row-major.
    pub cells: [Cell; 9],
    /// Status of the displayed board.
    pub status: Status,
    /// Status line text.
    pub status_text: String,
    /// The move list in display order.
    pub moves: Vec<MoveListItem>,
    /// Cells to highlight, if the displayed board is won.
    pub winning_line: Option<WinningLine>,
    /// Label of the order toggle.
    pub order_toggle_label: &'static str,
    /// Index of the displayed entry.
    pub current_step: usize,
}

impl GameState {
    /// The move list, oldest first when ascending and newest first otherwise.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: entry.label(step),
                is_current: step == self.current_step(),
            })
            .collect();

        if !self.order_ascending() {
            items.reverse();
        }
        items
    }

    /// Label of the control that flips the move-list order.
    ///
    /// Names the order the list switches to, not the one it is in.
    pub fn order_toggle_label(&self) -> &'static str {
        if self.order_ascending() {
            "Latest move first"
        } else {
            "First move first"
        }
    }

    /// Builds a full snapshot for the display layer.
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn view(&self) -> GameView {
        let status = self.current_status();
        GameView {
            cells: *self.current_board().cells(),
            status,
            status_text: status.to_string(),
            moves: self.move_list(),
            winning_line: self.winning_line(),
            order_toggle_label: self.order_toggle_label(),
            current_step: self.current_step(),
        }
    }
}
