//! Pseudo-legal move generation entry point.
//!
//! Dispatches on the kind of the piece standing on a square. The match is
//! exhaustive over `PieceKind`, so a new kind cannot be added without giving
//! it movement rules. Generation never mutates the position and depends only
//! on the square, the position and the last committed move.

use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Pseudo-legal destinations of the piece on `square`; empty if unoccupied.
pub fn pseudo_legal_moves(square: Square, position: &Position, last_move: Option<&Move>) -> Vec<Square> {
    let Some(piece) = position.get(square) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(square, piece, position, last_move),
        PieceKind::Knight => knight_moves(square, piece.color, position),
        PieceKind::Bishop => bishop_moves(square, piece.color, position),
        PieceKind::Rook => rook_moves(square, piece.color, position),
        PieceKind::Queen => queen_moves(square, piece.color, position),
        PieceKind::King => king_moves(square, piece, position),
    }
}
