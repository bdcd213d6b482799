//! Committed move history.
//!
//! The timeline stores moves and their notation, never positions. Any
//! historical position is rebuilt by folding moves from the initial setup,
//! so the move list stays the single source of truth.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    initial: Position,
    moves: Vec<Move>,
    notation: Vec<String>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Position::initial())
    }
}

impl Timeline {
    pub fn new(initial: Position) -> Self {
        Self {
            initial,
            moves: Vec::new(),
            notation: Vec::new(),
        }
    }

    #[inline]
    pub fn initial(&self) -> &Position {
        &self.initial
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn notation(&self) -> &[String] {
        &self.notation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay index of the latest position; `-1` for an empty timeline.
    #[inline]
    pub fn latest_index(&self) -> isize {
        self.moves.len() as isize - 1
    }

    /// The move that produced the position at `index`. `None` at `-1` or out
    /// of range.
    pub fn move_at(&self, index: isize) -> Option<&Move> {
        usize::try_from(index).ok().and_then(|index| self.moves.get(index))
    }

    pub fn check_index(&self, index: isize) -> Result<(), ChessErrors> {
        if (-1..=self.latest_index()).contains(&index) {
            Ok(())
        } else {
            Err(ChessErrors::ReplayIndexOutOfRange {
                index,
                latest: self.latest_index(),
            })
        }
    }

    /// Position after moves `0..=index`, folded from the initial setup.
    pub fn position_at(&self, index: isize) -> Result<Position, ChessErrors> {
        self.check_index(index)?;
        let count = (index + 1) as usize;
        self.moves[..count]
            .iter()
            .try_fold(self.initial.clone(), |position, mv| apply_move(&position, mv))
    }

    pub(crate) fn push(&mut self, mv: Move, notation: String) {
        self.moves.push(mv);
        self.notation.push(notation);
    }
}
