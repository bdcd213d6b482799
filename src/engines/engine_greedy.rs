//! One-ply capture-greedy opponent.
//!
//! Takes the most valuable capture on offer (pawn < knight < bishop < rook <
//! queen, first found wins ties). With nothing to capture it picks a random
//! piece that can move, then a random destination for it.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_rules::capture_priority;
use crate::game_state::chess_types::{Move, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoves;

/// Picks a move from `legal` for the pieces in `position`. `None` when
/// `legal` is empty.
pub fn select_move<R: Rng + ?Sized>(position: &Position, legal: &LegalMoves, rng: &mut R) -> Option<Move> {
    let mut best: Option<(u8, Move)> = None;
    for (&from, destinations) in legal {
        for &to in destinations {
            let Some(value) = position.get(to).and_then(|victim| capture_priority(victim.kind)) else {
                continue;
            };
            if best.is_none_or(|(best_value, _)| value > best_value) {
                best = Some((value, Move::new(from, to)));
            }
        }
    }
    if let Some((_, mv)) = best {
        return Some(mv);
    }

    let movable: Vec<Square> = legal.keys().copied().collect();
    let from = *movable.choose(rng)?;
    let to = *legal.get(&from)?.choose(rng)?;
    Some(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::legal_move_generator::legal_move_map;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn empty_map_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_move(&Position::initial(), &LegalMoves::new(), &mut rng), None);
    }

    #[test]
    fn prefers_the_most_valuable_capture() {
        let position = Position::from_pieces([
            (sq("a1"), Piece::new(PieceKind::King, Color::White).moved()),
            (sq("d4"), Piece::new(PieceKind::Knight, Color::White).moved()),
            (sq("e2"), Piece::new(PieceKind::Pawn, Color::Black).moved()),
            (sq("c6"), Piece::new(PieceKind::Rook, Color::Black).moved()),
            (sq("f5"), Piece::new(PieceKind::Bishop, Color::Black).moved()),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black).moved()),
        ]);
        let legal = legal_move_map(Color::White, &position, None);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                select_move(&position, &legal, &mut rng),
                Some(Move::new(sq("d4"), sq("c6")))
            );
        }
    }

    #[test]
    fn equal_captures_keep_the_first_found() {
        let position = Position::from_pieces([
            (sq("a1"), Piece::new(PieceKind::King, Color::White).moved()),
            (sq("d4"), Piece::new(PieceKind::Knight, Color::White).moved()),
            (sq("c6"), Piece::new(PieceKind::Pawn, Color::Black).moved()),
            (sq("e6"), Piece::new(PieceKind::Pawn, Color::Black).moved()),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black).moved()),
        ]);
        let legal = legal_move_map(Color::White, &position, None);
        let first = legal
            .get(&sq("d4"))
            .and_then(|destinations| destinations.iter().find(|to| !position.is_empty_square(**to)))
            .copied()
            .expect("knight has a capture");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_move(&position, &legal, &mut rng), Some(Move::new(sq("d4"), first)));
    }

    #[test]
    fn without_captures_picks_some_legal_move() {
        let position = Position::initial();
        let legal = legal_move_map(Color::White, &position, None);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let mv = select_move(&position, &legal, &mut rng).expect("opening has moves");
            assert!(legal.get(&mv.from).is_some_and(|destinations| destinations.contains(&mv.to)));
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let position = Position::initial();
        let legal = legal_move_map(Color::White, &position, None);
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        assert_eq!(
            select_move(&position, &legal, &mut first),
            select_move(&position, &legal, &mut second)
        );
    }
}
