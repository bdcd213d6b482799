use crate::game_state::chess_rules::{
    castling_rook_column, KINGSIDE_CASTLE_COLUMN, KING_COLUMN, QUEENSIDE_CASTLE_COLUMN,
};
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::position::Position;

/// (column, row) steps, counter-clockwise from east.
pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Pseudo-legal king destinations: the adjacent squares plus any castling
/// landing square that is geometrically available. Whether the king passes
/// through or lands on an attacked square is left to the legality filter.
pub fn king_moves(from: Square, king: &Piece, position: &Position) -> Vec<Square> {
    let mut moves: Vec<Square> = KING_STEPS
        .iter()
        .filter_map(|&(d_column, d_row)| from.offset(d_column, d_row))
        .filter(|&to| position.get(to).is_none_or(|piece| piece.color != king.color))
        .collect();

    for landing_column in [KINGSIDE_CASTLE_COLUMN, QUEENSIDE_CASTLE_COLUMN] {
        if let Some(to) = castling_destination(from, king, position, landing_column) {
            moves.push(to);
        }
    }
    moves
}

/// Landing square for castling towards `landing_column`, if the king and the
/// matching rook are unmoved on their home squares and nothing stands between.
pub fn castling_destination(
    from: Square,
    king: &Piece,
    position: &Position,
    landing_column: u8,
) -> Option<Square> {
    let home_row = king.color.home_row();
    if king.has_moved || from.row() != home_row || from.column() != KING_COLUMN {
        return None;
    }

    let rook_square = Square::from_coords(castling_rook_column(landing_column) as i8, home_row as i8)?;
    let rook = position.get(rook_square)?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    let (low, high) = if rook_square.column() < from.column() {
        (rook_square.column(), from.column())
    } else {
        (from.column(), rook_square.column())
    };
    let path_is_clear = (low + 1..high)
        .filter_map(|column| Square::from_coords(column as i8, home_row as i8))
        .all(|square| position.is_empty_square(square));
    if !path_is_clear {
        return None;
    }

    Square::from_coords(landing_column as i8, home_row as i8)
}
