//! Cursor movement and direct cell selection for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col
            .checked_sub(1)
            .and_then(|col| Position::from_row_col(row, col)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row
            .checked_sub(1)
            .and_then(|row| Position::from_row_col(row, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps the keys `1`-`9` to board positions in reading order.
pub fn digit_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .and_then(|d| (d as usize).checked_sub(1))
        .and_then(Position::from_index)
}
