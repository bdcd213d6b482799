//! Canonical chess-rule constants.
//!
//! Static rule literals: the initial back-rank layout, castling geometry,
//! file/rank labels and the capture order used by the opponent selector.

use crate::game_state::chess_types::PieceKind;

pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
pub const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Back-rank kinds by column (a..h) for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_COLUMN: u8 = 5;
/// Column the king lands on when castling king-side.
pub const KINGSIDE_CASTLE_COLUMN: u8 = 7;
/// Column the king lands on when castling queen-side.
pub const QUEENSIDE_CASTLE_COLUMN: u8 = 3;
pub const KINGSIDE_ROOK_COLUMN: u8 = 8;
pub const QUEENSIDE_ROOK_COLUMN: u8 = 1;

/// Capture order for the opponent selector: pawn < knight < bishop < rook < queen.
/// Kings are never captured.
#[inline]
pub const fn capture_priority(kind: PieceKind) -> Option<u8> {
    match kind {
        PieceKind::Pawn => Some(0),
        PieceKind::Knight => Some(1),
        PieceKind::Bishop => Some(2),
        PieceKind::Rook => Some(3),
        PieceKind::Queen => Some(4),
        PieceKind::King => None,
    }
}

/// Rook column paired with a castling landing column.
#[inline]
pub const fn castling_rook_column(king_landing_column: u8) -> u8 {
    if king_landing_column == KINGSIDE_CASTLE_COLUMN {
        KINGSIDE_ROOK_COLUMN
    } else {
        QUEENSIDE_ROOK_COLUMN
    }
}
