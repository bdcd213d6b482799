//! Piece placement.
//!
//! A `Position` maps each occupied square to its piece; an absent key is an
//! empty square. Positions are values: committed game state only ever gets a
//! new one by folding moves through `apply_move`.

use std::collections::BTreeMap;

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pieces: BTreeMap<Square, Piece>,
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial setup, every piece unmoved.
    pub fn initial() -> Self {
        let mut pieces = BTreeMap::new();
        for (column, kind) in (1i8..).zip(BACK_RANK) {
            for color in [Color::White, Color::Black] {
                if let Some(square) = Square::from_coords(column, color.home_row() as i8) {
                    pieces.insert(square, Piece::new(kind, color));
                }
                if let Some(square) = Square::from_coords(column, color.pawn_row() as i8) {
                    pieces.insert(square, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        Self { pieces }
    }

    /// Builds a position from explicit placements; a later entry for the same
    /// square replaces an earlier one.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        Self {
            pieces: pieces.into_iter().collect(),
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        !self.pieces.contains_key(&square)
    }

    /// Occupied squares in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &Piece)> {
        self.pieces.iter().map(|(square, piece)| (*square, piece))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> {
        self.iter().filter(move |(_, piece)| piece.color == color)
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count()
    }

    #[inline]
    pub(crate) fn insert(&mut self, square: Square, piece: Piece) {
        self.pieces.insert(square, piece);
    }

    #[inline]
    pub(crate) fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }
}
