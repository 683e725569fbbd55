//! Keyboard mapping.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.column(), cursor.row());

    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right => ((col + 1).min(2), row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down => (col, (row + 1).min(2)),
        _ => return cursor,
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps the keys `1`-`9` to cells, numbered like the board text.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}
