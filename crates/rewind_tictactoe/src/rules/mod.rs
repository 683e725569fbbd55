//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history or turns, so any of the 3^9 boards can be evaluated, reachable or
//! not.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, WinningLine, check_winner, evaluate};
