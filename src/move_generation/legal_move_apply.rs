//! Move application.
//!
//! `apply_move` is the one function that turns a position and a move into the
//! next position. It is used both to commit real moves and to simulate
//! candidates inside the legality filter, so the two can never disagree.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::castling_rook_column;
use crate::game_state::chess_types::{Color, Move, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::pawn_moves::is_en_passant_capture;

/// Returns the position after `mv`. The moving piece is marked moved and
/// takes the promotion kind when one is given. Castling also relocates the
/// rook; en passant also removes the passed pawn.
pub fn apply_move(position: &Position, mv: &Move) -> Result<Position, ChessErrors> {
    let piece = *position.get(mv.from).ok_or(ChessErrors::EmptySquare(mv.from))?;
    let mut next = position.clone();

    let is_castling = piece.kind == PieceKind::King && mv.from.column().abs_diff(mv.to.column()) == 2;
    let is_en_passant = !is_castling && is_en_passant_capture(mv, &piece, position);

    next.remove(mv.from);
    let kind = mv.promotion.map_or(piece.kind, |promotion| promotion.piece_kind());
    next.insert(mv.to, Piece { kind, ..piece }.moved());

    if is_castling {
        relocate_castling_rook(&mut next, mv);
    } else if is_en_passant {
        if let Some(behind) = mv.to.offset(0, -piece.color.forward()) {
            next.remove(behind);
        }
    }

    debug_assert!(
        next.king_count(Color::White) <= 1 && next.king_count(Color::Black) <= 1,
        "applying {mv} produced more than one king of a color"
    );
    Ok(next)
}

fn relocate_castling_rook(next: &mut Position, mv: &Move) {
    let row = mv.to.row() as i8;
    let rook_from = Square::from_coords(castling_rook_column(mv.to.column()) as i8, row);
    let step_back = if mv.to.column() > mv.from.column() { -1 } else { 1 };
    let rook_to = mv.to.offset(step_back, 0);

    if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
        if let Some(rook) = next.remove(rook_from) {
            next.insert(rook_to, rook.moved());
        }
    }
}
