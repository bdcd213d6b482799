use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Union of rook and bishop destinations.
#[inline]
pub fn queen_moves(from: Square, color: Color, position: &Position) -> Vec<Square> {
    let mut moves = rook_moves(from, color, position);
    moves.extend(bishop_moves(from, color, position));
    moves
}
