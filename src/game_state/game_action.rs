//! Inputs to the game state machine and the pure reducer over them.
//!
//! `reduce` never fails: a rejected action returns the state unchanged and
//! the reason is logged at `debug` level. Callers that want the reason use
//! `GameState::dispatch` or the `try_*` methods directly.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, PromotionKind};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameAction {
    CommitMove(Move),
    ResolvePromotion(PromotionKind),
    SetReplayIndex(isize),
    Resign,
    ToggleAutoPromote,
    Mute,
    Unmute,
    ToggleAudio,
}

impl GameState {
    /// Applies `action` in place.
    pub fn dispatch(&mut self, action: GameAction) -> Result<(), ChessErrors> {
        match action {
            GameAction::CommitMove(mv) => self.try_commit_move(mv).map(drop),
            GameAction::ResolvePromotion(kind) => self.try_resolve_promotion(kind).map(drop),
            GameAction::SetReplayIndex(index) => self.try_set_replay_index(index).map(drop),
            GameAction::Resign => self.try_resign().map(drop),
            GameAction::ToggleAutoPromote => {
                self.toggle_auto_promote();
                Ok(())
            }
            GameAction::Mute => {
                self.mute();
                Ok(())
            }
            GameAction::Unmute => {
                self.unmute();
                Ok(())
            }
            GameAction::ToggleAudio => {
                self.toggle_audio();
                Ok(())
            }
        }
    }
}

/// Next state after `action`; `state` itself when the action is rejected.
pub fn reduce(mut state: GameState, action: GameAction) -> GameState {
    if let Err(err) = state.dispatch(action) {
        debug!(?action, %err, "action rejected");
    }
    state
}
