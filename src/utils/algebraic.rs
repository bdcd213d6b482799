//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the 1..=64
//! square indices used by the board model. Reused by notation and `Display`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{FILES, RANKS};
use crate::game_state::chess_types::Square;

/// File letter of a square, `a`..`h`.
#[inline]
pub fn square_file(square: Square) -> char {
    FILES[square.column() as usize - 1]
}

/// Rank digit of a square, `1`..`8`.
#[inline]
pub fn square_rank(square: Square) -> char {
    RANKS[square.row() as usize - 1]
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(square_file(square));
    out.push(square_rank(square));
    out
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    let column = (file - b'a') as i8 + 1;
    let row = (rank - b'1') as i8 + 1;
    Square::from_coords(column, row).ok_or_else(|| ChessErrors::InvalidAlgebraicSquare(square.to_owned()))
}
