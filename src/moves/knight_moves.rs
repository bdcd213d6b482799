use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

/// (column, row) jumps, counter-clockwise from east-north-east.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Pseudo-legal knight destinations. Off-board and same-color squares are
/// dropped; column arithmetic keeps jumps from wrapping around an edge.
pub fn knight_moves(from: Square, color: Color, position: &Position) -> Vec<Square> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(d_column, d_row)| from.offset(d_column, d_row))
        .filter(|&to| position.get(to).is_none_or(|piece| piece.color != color))
        .collect()
}
