//! Core board vocabulary: colors, piece kinds, pieces, squares and moves.
//!
//! Squares use the 1..=64 indexing of the board model: index 1 is h1, index 8
//! is a1, index 57 is a8 and index 64 is h8. Row and column are both 1-based,
//! with column 1 being the a-file. All movement geometry goes through
//! `Square::offset`, which works on (column, row) so no move can wrap across
//! a board edge.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Side of a piece, or side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this color's king and rooks in the initial setup.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Row this color's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().home_row()
    }
}

/// Piece kind. Matching on it is exhaustive everywhere movement is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Letter used in move notation; pawns have none.
    pub const fn letter(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Rook => "R",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "N",
            PieceKind::Pawn => "",
        }
    }
}

/// The kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromotionKind {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionKind {
    pub const ALL: [PromotionKind; 4] = [
        PromotionKind::Queen,
        PromotionKind::Rook,
        PromotionKind::Bishop,
        PromotionKind::Knight,
    ];

    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionKind::Queen => PieceKind::Queen,
            PromotionKind::Rook => PieceKind::Rook,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Knight => PieceKind::Knight,
        }
    }
}

impl TryFrom<PieceKind> for PromotionKind {
    type Error = ChessErrors;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Queen => Ok(PromotionKind::Queen),
            PieceKind::Rook => Ok(PromotionKind::Rook),
            PieceKind::Bishop => Ok(PromotionKind::Bishop),
            PieceKind::Knight => Ok(PromotionKind::Knight),
            PieceKind::King | PieceKind::Pawn => Err(ChessErrors::InvalidPromotionKind(kind)),
        }
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set the first time the piece is the subject of a move, including the
    /// rook relocated by castling. Never cleared.
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// Board square, index `1..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    pub fn new(index: u8) -> Result<Self, ChessErrors> {
        if (1..=64).contains(&index) {
            Ok(Self(index))
        } else {
            Err(ChessErrors::InvalidSquareIndex(index))
        }
    }

    /// Square at (column, row), both `1..=8`. Column 1 is the a-file.
    #[inline]
    pub fn from_coords(column: i8, row: i8) -> Option<Self> {
        if !(1..=8).contains(&column) || !(1..=8).contains(&row) {
            return None;
        }
        Some(Self((8 * (row - 1) + (9 - column)) as u8))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// `ceil(index / 8)`.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0.div_ceil(8)
    }

    /// `9 - (index mod 8, or 8 when that is 0)`.
    #[inline]
    pub const fn column(self) -> u8 {
        let rem = self.0 % 8;
        9 - if rem == 0 { 8 } else { rem }
    }

    /// The square `d_column` files and `d_row` ranks away, if it is on the board.
    #[inline]
    pub fn offset(self, d_column: i8, d_row: i8) -> Option<Self> {
        Self::from_coords(self.column() as i8 + d_column, self.row() as i8 + d_row)
    }

    /// Iterates every square in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=64).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = ChessErrors;

    #[inline]
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index)
    }
}

impl From<Square> for u8 {
    #[inline]
    fn from(square: Square) -> Self {
        square.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// A move request or a committed timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: PromotionKind) -> Self {
        Self {
            promotion: Some(promotion),
            ..self
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            let letter = promotion.piece_kind().letter().to_ascii_lowercase();
            f.write_str(&letter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_maps_to_row_and_column() {
        let h1 = Square::new(1).expect("1 is on the board");
        assert_eq!((h1.column(), h1.row()), (8, 1));
        let a1 = Square::new(8).expect("8 is on the board");
        assert_eq!((a1.column(), a1.row()), (1, 1));
        let e1 = Square::new(4).expect("4 is on the board");
        assert_eq!((e1.column(), e1.row()), (5, 1));
        let e8 = Square::new(60).expect("60 is on the board");
        assert_eq!((e8.column(), e8.row()), (5, 8));
        assert!(Square::new(0).is_err());
        assert!(Square::new(65).is_err());
    }

    #[test]
    fn raw_indices_convert_only_inside_the_board() {
        assert_eq!(Square::try_from(0u8), Err(ChessErrors::InvalidSquareIndex(0)));
        assert_eq!(Square::try_from(65u8), Err(ChessErrors::InvalidSquareIndex(65)));
        let e1 = Square::try_from(4u8).expect("4 is on the board");
        assert_eq!(u8::from(e1), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_an_off_board_index_fails() {
        use serde::de::value::{Error, U8Deserializer};
        use serde::de::IntoDeserializer;
        use serde::Deserialize;

        let off_board: U8Deserializer<Error> = 0u8.into_deserializer();
        assert!(Square::deserialize(off_board).is_err());

        let e8: U8Deserializer<Error> = 60u8.into_deserializer();
        assert_eq!(Square::deserialize(e8).ok(), Square::new(60).ok());
    }

    #[test]
    fn coords_round_trip_for_every_square() {
        for square in Square::all() {
            let back = Square::from_coords(square.column() as i8, square.row() as i8);
            assert_eq!(back, Some(square));
        }
    }

    #[test]
    fn offset_never_wraps_across_edges() {
        let h4: Square = "h4".parse().expect("h4 should parse");
        assert_eq!(h4.offset(1, 0), None);
        assert_eq!(h4.offset(-1, 0), Some("g4".parse().expect("g4 should parse")));
        let a8: Square = "a8".parse().expect("a8 should parse");
        assert_eq!(a8.offset(-1, 1), None);
        assert_eq!(a8.offset(2, -1), Some("c7".parse().expect("c7 should parse")));
    }

    #[test]
    fn promotion_kind_rejects_king_and_pawn() {
        assert_eq!(PromotionKind::try_from(PieceKind::Knight), Ok(PromotionKind::Knight));
        assert_eq!(
            PromotionKind::try_from(PieceKind::King),
            Err(ChessErrors::InvalidPromotionKind(PieceKind::King))
        );
    }

    #[test]
    fn move_displays_long_algebraic() {
        let from: Square = "e7".parse().expect("e7 should parse");
        let to: Square = "e8".parse().expect("e8 should parse");
        assert_eq!(Move::new(from, to).to_string(), "e7e8");
        assert_eq!(Move::new(from, to).with_promotion(PromotionKind::Knight).to_string(), "e7e8n");
    }
}
