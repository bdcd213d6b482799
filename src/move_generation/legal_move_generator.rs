//! Legality filter and legal-move maps.
//!
//! Every pseudo-legal destination is simulated with `apply_move` and kept
//! only if the mover's own king is not attacked afterwards. The king square
//! checked is the destination when the king itself moves and the king's
//! current square otherwise. Castling is additionally required not to start
//! from, or pass through, an attacked square.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{Color, Move, PieceKind, PromotionKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_attacked;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Origin square to its legal destinations. Squares without a legal move are
/// absent.
pub type LegalMoves = BTreeMap<Square, Vec<Square>>;

/// Legal destinations of the piece on `square`.
pub fn legal_moves(square: Square, last_move: Option<&Move>, position: &Position) -> Vec<Square> {
    let Some(piece) = position.get(square).copied() else {
        return Vec::new();
    };
    let is_king = piece.kind == PieceKind::King;
    let king_square = position.king_square(piece.color);

    pseudo_legal_moves(square, position, last_move)
        .into_iter()
        .filter(|&to| {
            let guarded = if is_king { Some(to) } else { king_square };
            if !leaves_square_safe(Move::new(square, to), guarded, piece.color, last_move, position) {
                return false;
            }
            if is_king && square.column().abs_diff(to.column()) == 2 {
                return castling_path_is_safe(square, to, piece.color, last_move, position);
            }
            true
        })
        .collect()
}

/// Legal-move map for every `color` piece that has at least one legal move.
pub fn legal_move_map(color: Color, position: &Position, last_move: Option<&Move>) -> LegalMoves {
    position
        .pieces_of(color)
        .filter_map(|(square, _)| {
            let moves = legal_moves(square, last_move, position);
            (!moves.is_empty()).then_some((square, moves))
        })
        .collect()
}

/// Total number of destinations in a legal-move map.
#[inline]
pub fn count_moves(moves: &LegalMoves) -> usize {
    moves.values().map(Vec::len).sum()
}

/// Flattens a legal-move map into moves. A pawn reaching its promotion row
/// yields one move per promotion kind.
pub fn move_list(position: &Position, moves: &LegalMoves) -> Vec<Move> {
    let mut out = Vec::with_capacity(count_moves(moves));
    for (&from, destinations) in moves {
        let pawn = position.get(from).filter(|piece| piece.kind == PieceKind::Pawn);
        for &to in destinations {
            let mv = Move::new(from, to);
            match pawn {
                Some(pawn) if to.row() == pawn.color.promotion_row() => {
                    out.extend(PromotionKind::ALL.iter().map(|&kind| mv.with_promotion(kind)));
                }
                _ => out.push(mv),
            }
        }
    }
    out
}

fn leaves_square_safe(
    candidate: Move,
    guarded: Option<Square>,
    color: Color,
    last_move: Option<&Move>,
    position: &Position,
) -> bool {
    let Some(guarded) = guarded else {
        return true;
    };
    match apply_move(position, &candidate) {
        Ok(next) => !is_attacked(guarded, color, last_move, &next),
        Err(_) => false,
    }
}

fn castling_path_is_safe(from: Square, to: Square, color: Color, last_move: Option<&Move>, position: &Position) -> bool {
    if is_attacked(from, color, last_move, position) {
        return false;
    }
    let step = if to.column() > from.column() { 1 } else { -1 };
    let Some(transit) = from.offset(step, 0) else {
        return false;
    };
    leaves_square_safe(Move::new(from, transit), Some(transit), color, last_move, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;
    use crate::move_generation::legal_move_checks::is_king_in_check;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn play(position: &Position, from: &str, to: &str) -> (Position, Move) {
        let mv = Move::new(sq(from), sq(to));
        (apply_move(position, &mv).expect("test move applies"), mv)
    }

    #[test]
    fn white_has_twenty_moves_at_the_start() {
        let moves = legal_move_map(Color::White, &Position::initial(), None);
        assert_eq!(count_moves(&moves), 20);
        let knight_moves: usize = [sq("b1"), sq("g1")]
            .iter()
            .map(|square| moves.get(square).map_or(0, Vec::len))
            .sum();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn pinned_knight_cannot_leave_the_pin_line() {
        let position = Position::from_pieces([
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("e3"), Piece::new(PieceKind::Knight, Color::White)),
            (sq("e8"), Piece::new(PieceKind::Rook, Color::Black)),
            (sq("a8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        assert!(!pseudo_legal_moves(sq("e3"), &position, None).is_empty());
        assert!(legal_moves(sq("e3"), None, &position).is_empty());
    }

    #[test]
    fn pinned_pawn_after_early_queen_check() {
        let position = Position::initial();
        let (position, _) = play(&position, "e2", "e4");
        let (position, _) = play(&position, "f7", "f6");
        let (position, _) = play(&position, "d1", "h5");
        let (position, last) = play(&position, "g7", "g6");
        // g6 blocks the h5-e8 diagonal, so the pawn is pinned to it.
        assert!(!is_king_in_check(Color::Black, Some(&last), &position));
        let g6_moves = legal_moves(sq("g6"), Some(&last), &position);
        assert!(g6_moves.contains(&sq("h5")));
        assert!(!g6_moves.contains(&sq("g5")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let position = Position::from_pieces([
            (sq("e1"), Piece::new(PieceKind::King, Color::White).moved()),
            (sq("d8"), Piece::new(PieceKind::Rook, Color::Black)),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let moves = legal_moves(sq("e1"), None, &position);
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("d2")));
        assert!(moves.contains(&sq("f2")));
    }

    #[test]
    fn castling_through_or_out_of_check_is_illegal() {
        let base = [
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("h1"), Piece::new(PieceKind::Rook, Color::White)),
            (sq("a1"), Piece::new(PieceKind::Rook, Color::White)),
            (sq("a8"), Piece::new(PieceKind::King, Color::Black)),
        ];

        let open = Position::from_pieces(base);
        let moves = legal_moves(sq("e1"), None, &open);
        assert!(moves.contains(&sq("g1")) && moves.contains(&sq("c1")));

        let mut through = base.to_vec();
        through.push((sq("f8"), Piece::new(PieceKind::Rook, Color::Black)));
        let moves = legal_moves(sq("e1"), None, &Position::from_pieces(through));
        assert!(!moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));

        let mut checked = base.to_vec();
        checked.push((sq("e8"), Piece::new(PieceKind::Rook, Color::Black)));
        let moves = legal_moves(sq("e1"), None, &Position::from_pieces(checked));
        assert!(!moves.contains(&sq("g1")) && !moves.contains(&sq("c1")));
    }

    #[test]
    fn en_passant_is_legal_and_captures_the_passed_pawn() {
        let position = Position::initial();
        let (position, _) = play(&position, "e2", "e4");
        let (position, _) = play(&position, "a7", "a6");
        let (position, _) = play(&position, "e4", "e5");
        let (position, last) = play(&position, "d7", "d5");

        let moves = legal_moves(sq("e5"), Some(&last), &position);
        assert!(moves.contains(&sq("d6")));

        let (after, _) = play(&position, "e5", "d6");
        assert!(after.is_empty_square(sq("d5")));
        assert_eq!(after.len(), 31);
    }

    #[test]
    fn move_list_expands_promotions() {
        let position = Position::from_pieces([
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("b7"), Piece::new(PieceKind::Pawn, Color::White).moved()),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let legal = legal_move_map(Color::White, &position, None);
        let pawn_moves: Vec<Move> = move_list(&position, &legal)
            .into_iter()
            .filter(|mv| mv.from == sq("b7"))
            .collect();
        assert_eq!(pawn_moves.len(), 4);
        assert!(pawn_moves.iter().all(|mv| mv.to == sq("b8") && mv.promotion.is_some()));
    }

    #[test]
    fn every_legal_move_keeps_own_king_safe() {
        let position = Position::initial();
        let (position, _) = play(&position, "e2", "e4");
        let (position, _) = play(&position, "e7", "e5");
        let (position, _) = play(&position, "f1", "c4");
        let (position, last) = play(&position, "b8", "c6");
        for (from, destinations) in legal_move_map(Color::White, &position, Some(&last)) {
            for to in destinations {
                let next = apply_move(&position, &Move::new(from, to)).expect("legal move applies");
                assert!(!is_king_in_check(Color::White, Some(&last), &next));
            }
        }
    }
}
