//! Perft node counting over the legal move generator.
//!
//! Used by tests and the criterion bench to validate move generation against
//! published counts. Promotions count once per promotion kind.

use std::thread;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_move_map, move_list};
use crate::moves::pawn_moves::is_en_passant_capture;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(position: &Position, side_to_move: Color, last_move: Option<&Move>, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    let legal = legal_move_map(side_to_move, position, last_move);
    for mv in move_list(position, &legal) {
        perft_recurse(position, side_to_move, &mv, depth, &mut total)?;
    }
    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    position: &Position,
    side_to_move: Color,
    last_move: Option<&Move>,
    depth: u8,
) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return perft(position, side_to_move, last_move, depth);
    }

    let legal = legal_move_map(side_to_move, position, last_move);
    let root_moves = move_list(position, &legal);

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(position, side_to_move, mv, depth, &mut local).map(|()| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        Ok(total)
    })
}

fn perft_recurse(
    position: &Position,
    mover: Color,
    mv: &Move,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    let next = apply_move(position, mv)?;

    if depth > 1 {
        let legal = legal_move_map(mover.opposite(), &next, Some(mv));
        for reply in move_list(&next, &legal) {
            perft_recurse(&next, mover.opposite(), &reply, depth - 1, counts)?;
        }
        return Ok(());
    }

    counts.nodes += 1;

    let piece = position.get(mv.from).ok_or(ChessErrors::EmptySquare(mv.from))?;
    let en_passant = is_en_passant_capture(mv, piece, position);
    if en_passant {
        counts.en_passant += 1;
    }
    if en_passant || !position.is_empty_square(mv.to) {
        counts.captures += 1;
    }
    if piece.kind == PieceKind::King && mv.from.column().abs_diff(mv.to.column()) == 2 {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }
    if is_king_in_check(mover.opposite(), Some(mv), &next) {
        counts.checks += 1;
        if legal_move_map(mover.opposite(), &next, Some(mv)).is_empty() {
            counts.checkmates += 1;
        }
    }
    Ok(())
}
