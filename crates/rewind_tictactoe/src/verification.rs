//! Kani proof harnesses.
//!
//! Arbitrary boards cover all 3^9 configurations, reachable or not.

use crate::rules::{self, LINES};
use crate::{Board, Cell, GameState, Player, Position};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::ALL[index as usize]
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Board::from_cells(cells)
    }
}

/// The detector never panics and only reports lines that are really complete.
#[kani::proof]
fn evaluate_reports_complete_line() {
    let board: Board = kani::any();
    if let Some(win) = rules::evaluate(&board) {
        for pos in win.line.positions() {
            assert_eq!(board.get(pos), Cell::Occupied(win.player));
        }
        assert!(LINES.contains(&win.line.positions()));
    }
}

/// No line is complete when the detector reports none.
#[kani::proof]
fn evaluate_none_means_no_line() {
    let board: Board = kani::any();
    if rules::evaluate(&board).is_none() {
        for [a, b, c] in LINES {
            let cell = board.get(a);
            assert!(cell == Cell::Empty || cell != board.get(b) || cell != board.get(c));
        }
    }
}

/// Two moves from an arbitrary pair of cells keep every invariant.
#[kani::proof]
#[kani::unwind(10)]
fn apply_move_preserves_invariants() {
    let mut game = GameState::new();
    let first: Position = kani::any();
    let second: Position = kani::any();

    let _ = game.apply_move(first);
    let _ = game.apply_move(second);

    assert!(game.check_invariants().is_ok());
    assert_eq!(game.current_step() + 1, game.history().len());
}
