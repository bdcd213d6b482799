//! Player-facing settings consulted by the game state machine.
//!
//! The engine only reads these; persisting them is the host's job (enable
//! the `serde` feature to serialize them).

use rand::Rng;

use crate::game_state::chess_types::Color;

/// Which side the local player wants to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideChoice {
    #[default]
    White,
    Black,
    Random,
}

impl SideChoice {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Color {
        match self {
            SideChoice::White => Color::White,
            SideChoice::Black => Color::Black,
            SideChoice::Random => {
                if rng.random_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    /// Promote straight to a queen instead of waiting for a choice.
    pub always_promote_to_queen: bool,
    /// Audio observers stay silent while set.
    pub muted: bool,
    pub player_side: SideChoice,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            always_promote_to_queen: false,
            muted: true,
            player_side: SideChoice::White,
        }
    }
}
