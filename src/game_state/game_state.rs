//! Game state machine.
//!
//! `GameState` owns the turn, the displayed position, the committed timeline,
//! the replay index, a pending promotion, the winner and the legal-move map
//! for the side to move. It is the only place committed state changes.
//!
//! Every transition has a `try_*` form returning `Result`. On `Err` the state
//! is exactly as before: all fallible work happens before the first field is
//! written. `game_action::reduce` wraps these for fire-and-forget callers.

use rand::Rng;
use tracing::{info, trace};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_greedy::select_move;
use crate::game_state::chess_types::{Color, Move, PieceKind, PromotionKind, Square};
use crate::game_state::position::Position;
use crate::game_state::preferences::Preferences;
use crate::game_state::timeline::Timeline;
use crate::game_state::winner::{WinReason, Winner};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{legal_move_map, LegalMoves};
use crate::move_generation::terminal_detection::detect_winner_with;
use crate::utils::notation::notate;

/// What a commit did, for observers such as the audio layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as recorded, promotion kind included. While a promotion is
    /// pending this is the bare pawn move.
    pub mv: Move,
    pub capture: bool,
    /// Timeline text, `None` while the move waits for a promotion choice.
    pub notation: Option<String>,
    pub awaiting_promotion: bool,
    pub winner: Option<Winner>,
}

/// What a replay step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub index: isize,
    /// The move leading to the shown position, `None` at the initial setup.
    pub mv: Option<Move>,
    pub capture: bool,
}

/// A pawn move that reached the last rank and waits for its piece.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingPromotion {
    mv: Move,
    before: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    turn: Color,
    position: Position,
    timeline: Timeline,
    replay_index: isize,
    pending_promotion: Option<PendingPromotion>,
    winner: Option<Winner>,
    legal_moves: LegalMoves,
    preferences: Preferences,
    player_color: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial setup, white to move, default preferences and no
    /// local player side. Without a player side, resigning concedes for the
    /// side to move; use [`GameState::with_preferences`] to bind resignation
    /// to the player's color.
    pub fn new() -> Self {
        Self::from_position(Position::initial(), Color::White)
    }

    /// Starts a game from an arbitrary setup. The setup becomes the timeline's
    /// initial position.
    pub fn from_position(position: Position, turn: Color) -> Self {
        let legal_moves = legal_move_map(turn, &position, None);
        let winner = detect_winner_with(&position, turn, None, &legal_moves);
        Self {
            turn,
            timeline: Timeline::new(position.clone()),
            position,
            replay_index: -1,
            pending_promotion: None,
            winner,
            legal_moves,
            preferences: Preferences::default(),
            player_color: None,
        }
    }

    /// Standard game for a local player; the player's side is resolved from
    /// `preferences.player_side`.
    pub fn with_preferences<R: Rng + ?Sized>(preferences: Preferences, rng: &mut R) -> Self {
        Self {
            preferences,
            player_color: Some(preferences.player_side.resolve(rng)),
            ..Self::new()
        }
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The displayed position: the replayed one while viewing history, with
    /// the pawn already advanced while a promotion is pending.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[inline]
    pub fn notation(&self) -> &[String] {
        self.timeline.notation()
    }

    #[inline]
    pub fn replay_index(&self) -> isize {
        self.replay_index
    }

    #[inline]
    pub fn is_viewing_replay(&self) -> bool {
        self.replay_index != self.timeline.latest_index()
    }

    /// Square of the pawn waiting for its promotion piece.
    pub fn promotion_square(&self) -> Option<Square> {
        self.pending_promotion.as_ref().map(|pending| pending.mv.to)
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Legal moves of the side to move in the latest position.
    #[inline]
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    pub fn legal_destinations(&self, square: Square) -> &[Square] {
        self.legal_moves.get(&square).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[inline]
    pub fn player_color(&self) -> Option<Color> {
        self.player_color
    }

    /// The move that produced the displayed position.
    pub fn latest_move(&self) -> Option<&Move> {
        self.timeline.move_at(self.replay_index)
    }

    fn ensure_can_move(&self) -> Result<(), ChessErrors> {
        if self.winner.is_some() {
            return Err(ChessErrors::GameIsOver);
        }
        if let Some(square) = self.promotion_square() {
            return Err(ChessErrors::AwaitingPromotion(square));
        }
        if self.is_viewing_replay() {
            return Err(ChessErrors::ViewingReplay(self.replay_index));
        }
        Ok(())
    }

    /// Commits `mv` for the side to move.
    ///
    /// A pawn reaching the last rank uses `mv.promotion` when set, a queen
    /// when auto-promotion is on, and otherwise waits for
    /// [`GameState::try_resolve_promotion`] without touching the timeline or
    /// the turn.
    pub fn try_commit_move(&mut self, mv: Move) -> Result<MoveOutcome, ChessErrors> {
        self.ensure_can_move()?;
        let piece = *self.position.get(mv.from).ok_or(ChessErrors::EmptySquare(mv.from))?;
        if !self.legal_destinations(mv.from).contains(&mv.to) {
            return Err(ChessErrors::IllegalMove(mv));
        }

        let reaches_last_rank = piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row();
        let promotion = if !reaches_last_rank {
            None
        } else if mv.promotion.is_some() {
            mv.promotion
        } else if self.preferences.always_promote_to_queen {
            Some(PromotionKind::Queen)
        } else {
            let bare = Move::new(mv.from, mv.to);
            let advanced = apply_move(&self.position, &bare)?;
            let capture = advanced.len() < self.position.len();
            let before = std::mem::replace(&mut self.position, advanced);
            self.pending_promotion = Some(PendingPromotion { mv: bare, before });
            trace!(mv = %bare, "promotion pending");
            return Ok(MoveOutcome {
                mv: bare,
                capture,
                notation: None,
                awaiting_promotion: true,
                winner: None,
            });
        };

        let complete = Move {
            promotion,
            ..Move::new(mv.from, mv.to)
        };
        let before = self.position.clone();
        self.commit(complete, before)
    }

    /// Completes the pending pawn move with `kind`.
    pub fn try_resolve_promotion(&mut self, kind: PromotionKind) -> Result<MoveOutcome, ChessErrors> {
        let pending = self.pending_promotion.as_ref().ok_or(ChessErrors::NoPendingPromotion)?;
        let complete = pending.mv.with_promotion(kind);
        let before = pending.before.clone();
        let outcome = self.commit(complete, before)?;
        self.pending_promotion = None;
        Ok(outcome)
    }

    fn commit(&mut self, mv: Move, before: Position) -> Result<MoveOutcome, ChessErrors> {
        let previous = self.timeline.move_at(self.timeline.latest_index()).copied();
        let notation = notate(&mv, &before, previous.as_ref())?;
        let next = apply_move(&before, &mv)?;
        let capture = next.len() < before.len();

        let turn = self.turn.opposite();
        let legal_moves = legal_move_map(turn, &next, Some(&mv));
        let winner = detect_winner_with(&next, turn, Some(&mv), &legal_moves);

        self.timeline.push(mv, notation.clone());
        self.replay_index = self.timeline.latest_index();
        self.turn = turn;
        self.position = next;
        self.legal_moves = legal_moves;
        self.winner = winner;

        trace!(mv = %mv, notation = %notation, capture, "move committed");
        if let Some(winner) = winner {
            info!(%winner, moves = self.timeline.len(), "game over");
        }

        Ok(MoveOutcome {
            mv,
            capture,
            notation: Some(notation),
            awaiting_promotion: false,
            winner,
        })
    }

    /// Shows the position after move `index` (`-1` for the initial setup).
    /// History, turn and winner are untouched; a pending promotion is
    /// dropped since its move was never committed.
    pub fn try_set_replay_index(&mut self, index: isize) -> Result<ReplayOutcome, ChessErrors> {
        let position = self.timeline.position_at(index)?;
        let capture = if index >= 0 {
            self.timeline.position_at(index - 1)?.len() > position.len()
        } else {
            false
        };

        self.position = position;
        self.replay_index = index;
        self.pending_promotion = None;
        trace!(index, capture, "replay index set");

        Ok(ReplayOutcome {
            index,
            mv: self.latest_move().copied(),
            capture,
        })
    }

    /// The local player resigns, or the side to move when no player side is
    /// set.
    pub fn try_resign(&mut self) -> Result<Winner, ChessErrors> {
        if self.winner.is_some() {
            return Err(ChessErrors::GameIsOver);
        }
        let loser = self.player_color.unwrap_or(self.turn);
        let winner = Winner::side(loser.opposite(), WinReason::Resignation);

        if let Some(pending) = self.pending_promotion.take() {
            self.position = pending.before;
        }
        self.winner = Some(winner);
        info!(%winner, moves = self.timeline.len(), "game over");
        Ok(winner)
    }

    /// Lets the capture-greedy selector move for the side to move. Its
    /// promotions are always to a queen.
    pub fn play_opponent_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveOutcome, ChessErrors> {
        self.ensure_can_move()?;
        let mv = select_move(&self.position, &self.legal_moves, rng).ok_or(ChessErrors::NoLegalMoves)?;
        let promotes = self
            .position
            .get(mv.from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row());
        let mv = if promotes { mv.with_promotion(PromotionKind::Queen) } else { mv };
        self.try_commit_move(mv)
    }

    pub fn toggle_auto_promote(&mut self) {
        self.preferences.always_promote_to_queen = !self.preferences.always_promote_to_queen;
    }

    pub fn mute(&mut self) {
        self.preferences.muted = true;
    }

    pub fn unmute(&mut self) {
        self.preferences.muted = false;
    }

    pub fn toggle_audio(&mut self) {
        self.preferences.muted = !self.preferences.muted;
    }
}
