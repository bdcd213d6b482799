//! Board coordinates as seen from either side.
//!
//! The rendering layer draws the board from the player's side. These helpers
//! translate between a square and its on-screen (column, row) cell, where
//! cell (1, 1) is the bottom-left corner from the viewer's seat. Rules logic
//! never uses them.

use crate::game_state::chess_types::{Color, Square};

/// On-screen (column, row) of `square` for a viewer seated at `viewer`.
#[inline]
pub fn view_coords(square: Square, viewer: Color) -> (u8, u8) {
    match viewer {
        Color::White => (square.column(), square.row()),
        Color::Black => (9 - square.column(), 9 - square.row()),
    }
}

/// Square shown at on-screen cell (column, row) for a viewer seated at
/// `viewer`, or `None` outside the board.
#[inline]
pub fn square_at_view(column: u8, row: u8, viewer: Color) -> Option<Square> {
    if !(1..=8).contains(&column) || !(1..=8).contains(&row) {
        return None;
    }
    let (column, row) = match viewer {
        Color::White => (column, row),
        Color::Black => (9 - column, 9 - row),
    };
    Square::from_coords(column as i8, row as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_view_reflects_both_axes() {
        let a1: Square = "a1".parse().expect("a1 should parse");
        assert_eq!(view_coords(a1, Color::White), (1, 1));
        assert_eq!(view_coords(a1, Color::Black), (8, 8));

        let e2: Square = "e2".parse().expect("e2 should parse");
        assert_eq!(view_coords(e2, Color::Black), (4, 7));
    }

    #[test]
    fn view_mapping_inverts() {
        for viewer in [Color::White, Color::Black] {
            for square in Square::all() {
                let (column, row) = view_coords(square, viewer);
                assert_eq!(square_at_view(column, row, viewer), Some(square));
            }
        }
        assert_eq!(square_at_view(0, 4, Color::White), None);
        assert_eq!(square_at_view(3, 9, Color::Black), None);
    }
}
