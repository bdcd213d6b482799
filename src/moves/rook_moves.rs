use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::sliding_moves::{trace_rays, ORTHOGONAL_STEPS};

/// Pseudo-legal rook destinations along ranks and files.
#[inline]
pub fn rook_moves(from: Square, color: Color, position: &Position) -> Vec<Square> {
    trace_rays(from, color, position, &ORTHOGONAL_STEPS)
}
