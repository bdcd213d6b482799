//! Short algebraic move text as recorded in the timeline.
//!
//! Castling is written `0-0` / `0-0-0`. Other moves are the piece letter, an
//! optional disambiguator, an optional `x`, the destination, an optional
//! `=Q`-style promotion and a `+` when the opponent's king ends up attacked.
//! Pawn captures carry their file only for en passant or when another pawn
//! could reach the same square.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::QUEENSIDE_CASTLE_COLUMN;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::pawn_moves::is_en_passant_capture;
use crate::utils::algebraic::{square_file, square_rank, square_to_algebraic};

/// Notation for `mv` played from `before`. `previous` is the move that led to
/// `before`; it decides en passant availability for disambiguation.
pub fn notate(mv: &Move, before: &Position, previous: Option<&Move>) -> Result<String, ChessErrors> {
    let piece = *before.get(mv.from).ok_or(ChessErrors::EmptySquare(mv.from))?;

    if piece.kind == PieceKind::King && mv.from.column().abs_diff(mv.to.column()) == 2 {
        let text = if mv.to.column() == QUEENSIDE_CASTLE_COLUMN { "0-0-0" } else { "0-0" };
        return Ok(text.to_owned());
    }

    let mut out = String::with_capacity(8);
    out.push_str(piece.kind.letter());

    let en_passant = is_en_passant_capture(mv, &piece, before);
    if en_passant {
        out.push(square_file(mv.from));
        out.push('x');
    } else {
        let rival = before.iter().find(|&(square, other)| {
            square != mv.from
                && other.kind == piece.kind
                && other.color == piece.color
                && legal_moves(square, previous, before).contains(&mv.to)
        });
        if let Some((rival, _)) = rival {
            if rival.column() == mv.from.column() {
                out.push(square_rank(mv.from));
            } else {
                out.push(square_file(mv.from));
            }
        }
        if !before.is_empty_square(mv.to) {
            out.push('x');
        }
    }

    out.push_str(&square_to_algebraic(mv.to));

    if let Some(promotion) = mv.promotion {
        out.push('=');
        out.push_str(promotion.piece_kind().letter());
    }

    let after = apply_move(before, mv)?;
    if is_king_in_check(piece.color.opposite(), Some(mv), &after) {
        out.push('+');
    }
    Ok(out)
}
