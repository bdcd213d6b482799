//! Game-end detection.
//!
//! Checks run in a fixed order after every committed move:
//! 1. exactly two pieces left, both kings: draw by insufficient material;
//! 2. a side without a king: the other side wins by checkmate;
//! 3. the side to move has no legal move: checkmate when its king is
//!    attacked, stalemate otherwise.

use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::game_state::position::Position;
use crate::game_state::winner::{DrawReason, WinReason, Winner};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_move_map, LegalMoves};

/// Outcome of the position for `side_to_move`, or `None` while play goes on.
pub fn detect_winner(position: &Position, side_to_move: Color, last_move: Option<&Move>) -> Option<Winner> {
    let legal = legal_move_map(side_to_move, position, last_move);
    detect_winner_with(position, side_to_move, last_move, &legal)
}

/// Same as [`detect_winner`] with the side to move's legal-move map already
/// computed.
pub fn detect_winner_with(
    position: &Position,
    side_to_move: Color,
    last_move: Option<&Move>,
    legal: &LegalMoves,
) -> Option<Winner> {
    if is_bare_kings(position) {
        return Some(Winner::draw(DrawReason::InsufficientMaterial));
    }

    for color in [Color::White, Color::Black] {
        if position.king_square(color).is_none() {
            return Some(Winner::side(color.opposite(), WinReason::Checkmate));
        }
    }

    if !legal.is_empty() {
        return None;
    }
    if is_king_in_check(side_to_move, last_move, position) {
        Some(Winner::side(side_to_move.opposite(), WinReason::Checkmate))
    } else {
        Some(Winner::draw(DrawReason::Stalemate))
    }
}

/// Exactly two pieces remain and both are kings.
pub fn is_bare_kings(position: &Position) -> bool {
    position.len() == 2 && position.iter().all(|(_, piece)| piece.kind == PieceKind::King)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, Square};
    use crate::move_generation::legal_move_apply::apply_move;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color).moved()
    }

    #[test]
    fn start_position_is_ongoing() {
        assert_eq!(detect_winner(&Position::initial(), Color::White, None), None);
    }

    #[test]
    fn rook_mate_on_back_rank() {
        let position = Position::from_pieces([
            (sq("h8"), piece(PieceKind::King, Color::Black)),
            (sq("a8"), piece(PieceKind::Rook, Color::White)),
            (sq("g6"), piece(PieceKind::King, Color::White)),
        ]);
        assert_eq!(
            detect_winner(&position, Color::Black, None),
            Some(Winner::side(Color::White, WinReason::Checkmate))
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let position = Position::from_pieces([
            (sq("h8"), piece(PieceKind::King, Color::Black)),
            (sq("g6"), piece(PieceKind::Queen, Color::White)),
            (sq("f7"), piece(PieceKind::King, Color::White)),
        ]);
        assert_eq!(
            detect_winner(&position, Color::Black, None),
            Some(Winner::draw(DrawReason::Stalemate))
        );
    }

    #[test]
    fn king_and_rook_against_lone_king() {
        let stalemate = Position::from_pieces([
            (sq("a1"), piece(PieceKind::King, Color::Black)),
            (sq("c1"), piece(PieceKind::King, Color::White)),
            (sq("h2"), piece(PieceKind::Rook, Color::White)),
        ]);
        assert_eq!(
            detect_winner(&stalemate, Color::Black, None),
            Some(Winner::draw(DrawReason::Stalemate))
        );

        let mate = Position::from_pieces([
            (sq("a8"), piece(PieceKind::King, Color::Black)),
            (sq("b6"), piece(PieceKind::King, Color::White)),
            (sq("h8"), piece(PieceKind::Rook, Color::White)),
        ]);
        assert_eq!(
            detect_winner(&mate, Color::Black, None),
            Some(Winner::side(Color::White, WinReason::Checkmate))
        );
    }

    #[test]
    fn two_bare_kings_are_a_draw() {
        let position = Position::from_pieces([
            (sq("e1"), piece(PieceKind::King, Color::White)),
            (sq("e8"), piece(PieceKind::King, Color::Black)),
        ]);
        assert!(is_bare_kings(&position));
        assert_eq!(
            detect_winner(&position, Color::White, None),
            Some(Winner::draw(DrawReason::InsufficientMaterial))
        );
    }

    #[test]
    fn king_and_minor_piece_play_on() {
        let position = Position::from_pieces([
            (sq("e1"), piece(PieceKind::King, Color::White)),
            (sq("c1"), piece(PieceKind::Bishop, Color::White)),
            (sq("e8"), piece(PieceKind::King, Color::Black)),
        ]);
        assert!(!is_bare_kings(&position));
        assert_eq!(detect_winner(&position, Color::Black, None), None);
    }

    #[test]
    fn missing_king_loses() {
        let position = Position::from_pieces([
            (sq("e1"), piece(PieceKind::King, Color::White)),
            (sq("a1"), piece(PieceKind::Rook, Color::White)),
            (sq("a8"), piece(PieceKind::Rook, Color::Black)),
        ]);
        assert_eq!(
            detect_winner(&position, Color::Black, None),
            Some(Winner::side(Color::White, WinReason::Checkmate))
        );
    }

    #[test]
    fn fools_mate_is_detected() {
        let mut position = Position::initial();
        let mut last = None;
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            let mv = Move::new(sq(from), sq(to));
            position = apply_move(&position, &mv).expect("opening move applies");
            last = Some(mv);
        }
        assert_eq!(
            detect_winner(&position, Color::White, last.as_ref()),
            Some(Winner::side(Color::Black, WinReason::Checkmate))
        );
    }
}
