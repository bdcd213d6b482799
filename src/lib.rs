//! Crate root module declarations for the Plum Rules chess engine.
//!
//! This file exposes the rules subsystems (board model, pseudo-legal and
//! legal move generation, check/terminal detection, notation, the opponent
//! move selector and the game state machine) so binaries, tests and host
//! applications can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_action;
    pub mod game_state;
    pub mod position;
    pub mod preferences;
    pub mod timeline;
    pub mod winner;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod terminal_detection;
}

pub mod engines {
    pub mod engine_greedy;
}

pub mod utils {
    pub mod algebraic;
    pub mod notation;
    pub mod perspective;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{Color, Move, Piece, PieceKind, PromotionKind, Square};
pub use game_state::game_action::{reduce, GameAction};
pub use game_state::game_state::{GameState, MoveOutcome, ReplayOutcome};
pub use game_state::position::Position;
pub use game_state::preferences::{Preferences, SideChoice};
pub use game_state::timeline::Timeline;
pub use game_state::winner::{DrawReason, WinReason, Winner};
pub use move_generation::legal_move_generator::LegalMoves;
