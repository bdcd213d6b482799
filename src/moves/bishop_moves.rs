use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::sliding_moves::{trace_rays, DIAGONAL_STEPS};

/// Pseudo-legal bishop destinations along the four diagonals.
#[inline]
pub fn bishop_moves(from: Square, color: Color, position: &Position) -> Vec<Square> {
    trace_rays(from, color, position, &DIAGONAL_STEPS)
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn bishop_from_d4_reaches_thirteen_squares() {
        let position = Position::from_pieces([(sq("d4"), Piece::new(PieceKind::Bishop, Color::White))]);
        assert_eq!(bishop_moves(sq("d4"), Color::White, &position).len(), 13);
    }

    #[test]
    fn bishop_on_edge_never_wraps() {
        let position = Position::from_pieces([(sq("a3"), Piece::new(PieceKind::Bishop, Color::White))]);
        let mut moves = bishop_moves(sq("a3"), Color::White, &position);
        moves.sort();
        let mut expected = vec![sq("b4"), sq("c5"), sq("d6"), sq("e7"), sq("f8"), sq("b2"), sq("c1")];
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn bishop_captures_first_enemy_only() {
        let position = Position::from_pieces([
            (sq("c1"), Piece::new(PieceKind::Bishop, Color::White)),
            (sq("e3"), Piece::new(PieceKind::Pawn, Color::Black)),
            (sq("f4"), Piece::new(PieceKind::Queen, Color::Black)),
            (sq("b2"), Piece::new(PieceKind::Pawn, Color::White)),
        ]);
        let mut moves = bishop_moves(sq("c1"), Color::White, &position);
        moves.sort();
        let mut expected = vec![sq("d2"), sq("e3")];
        expected.sort();
        assert_eq!(moves, expected);
    }
}
