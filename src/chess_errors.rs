//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type across the crate. Game state
//! transitions return it from their fallible `try_*` forms; the reducer in
//! `game_state::game_action` turns every variant into "state unchanged", so a
//! rejected transition never escapes as a fault to UI-originated callers.
//!
//! Usage guidelines:
//! - Rejected transitions (`GameIsOver`, `ViewingReplay`, `IllegalMove`, ...)
//!   are expected during play and are safe to ignore.
//! - Parsing variants (`InvalidAlgebraicSquare`, `InvalidSquareIndex`) come
//!   from host-supplied text or indices and are suitable for display.

use thiserror::Error;

use crate::game_state::chess_types::{Move, PieceKind, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A winner has already been recorded; the game accepts no more moves.
    #[error("the game is already over")]
    GameIsOver,

    /// A move was attempted while a historical position is displayed.
    #[error("cannot move while viewing replay index {0}")]
    ViewingReplay(isize),

    /// A move was attempted before the pending promotion was resolved.
    #[error("a promotion on {0} must be resolved first")]
    AwaitingPromotion(Square),

    /// A promotion choice arrived while no pawn is waiting for one.
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// The move's `from` square holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The destination is not in the legal-move list of the origin square.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// The side to move has no legal move to offer.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Replay index outside `[-1, len - 1]`.
    #[error("replay index {index} is outside [-1, {latest}]")]
    ReplayIndexOutOfRange { index: isize, latest: isize },

    /// Square index outside `1..=64`.
    #[error("square index {0} is outside 1..=64")]
    InvalidSquareIndex(u8),

    /// Text that is not a square name such as `e4`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// Pawns and kings are not promotion targets.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionKind(PieceKind),
}
