//! Attack and check queries.

use crate::game_state::chess_types::{Color, Move, Square};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// True if any piece opposing `defender` has `target` among its pseudo-legal
/// destinations.
pub fn is_attacked(target: Square, defender: Color, last_move: Option<&Move>, position: &Position) -> bool {
    position
        .pieces_of(defender.opposite())
        .any(|(square, _)| pseudo_legal_moves(square, position, last_move).contains(&target))
}

/// True if `color` has a king and it is attacked. A side without a king is
/// never in check.
#[inline]
pub fn is_king_in_check(color: Color, last_move: Option<&Move>, position: &Position) -> bool {
    position
        .king_square(color)
        .is_some_and(|king| is_attacked(king, color, last_move, position))
}
