use crate::game_state::chess_types::{Move, Piece, PieceKind, Square};
use crate::game_state::position::Position;

/// Pseudo-legal pawn destinations: single and double steps onto empty
/// squares, diagonal captures onto opposing pieces, and en passant when
/// `last_move` was an adjacent opposing double step.
pub fn pawn_moves(from: Square, pawn: &Piece, position: &Position, last_move: Option<&Move>) -> Vec<Square> {
    let forward = pawn.color.forward();
    let mut moves = Vec::with_capacity(4);

    if let Some(one_step) = from.offset(0, forward) {
        if position.is_empty_square(one_step) {
            moves.push(one_step);
            if !pawn.has_moved && from.row() == pawn.color.pawn_row() {
                if let Some(two_steps) = from.offset(0, 2 * forward) {
                    if position.is_empty_square(two_steps) {
                        moves.push(two_steps);
                    }
                }
            }
        }
    }

    for d_column in [-1, 1] {
        if let Some(target) = from.offset(d_column, forward) {
            if position.get(target).is_some_and(|piece| piece.color != pawn.color) {
                moves.push(target);
            }
        }
    }

    if let Some(target) = en_passant_target(from, pawn, position, last_move) {
        moves.push(target);
    }
    moves
}

/// The square behind an opposing pawn that just double-stepped next to `from`.
pub fn en_passant_target(
    from: Square,
    pawn: &Piece,
    position: &Position,
    last_move: Option<&Move>,
) -> Option<Square> {
    let last = last_move?;
    let victim = position.get(last.to)?;
    let is_double_step = last.from.column() == last.to.column() && last.from.row().abs_diff(last.to.row()) == 2;
    if victim.kind != PieceKind::Pawn || victim.color == pawn.color || !is_double_step {
        return None;
    }
    if last.to.row() != from.row() || last.to.column().abs_diff(from.column()) != 1 {
        return None;
    }
    last.to.offset(0, pawn.color.forward())
}

/// True when `mv` by `pawn` is an en passant capture in `position`: diagonal
/// onto an empty square with an opposing pawn directly behind the target.
pub fn is_en_passant_capture(mv: &Move, pawn: &Piece, position: &Position) -> bool {
    if pawn.kind != PieceKind::Pawn || !position.is_empty_square(mv.to) {
        return false;
    }
    let forward = pawn.color.forward();
    let diagonal = mv.from.column().abs_diff(mv.to.column()) == 1
        && mv.to.row() as i8 - mv.from.row() as i8 == forward;
    diagonal
        && mv
            .to
            .offset(0, -forward)
            .and_then(|behind| position.get(behind))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color != pawn.color)
}
