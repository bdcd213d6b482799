//! Decided game outcomes.

use std::fmt;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinReason {
    Checkmate,
    Resignation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
}

/// Terminal result. Once a game records one it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Side { color: Color, reason: WinReason },
    Draw { reason: DrawReason },
}

impl Winner {
    #[inline]
    pub const fn side(color: Color, reason: WinReason) -> Self {
        Winner::Side { color, reason }
    }

    #[inline]
    pub const fn draw(reason: DrawReason) -> Self {
        Winner::Draw { reason }
    }

    /// The winning color, `None` for a draw.
    pub const fn color(&self) -> Option<Color> {
        match self {
            Winner::Side { color, .. } => Some(*color),
            Winner::Draw { .. } => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Side { color, reason } => {
                let side = match color {
                    Color::White => "White",
                    Color::Black => "Black",
                };
                let reason = match reason {
                    WinReason::Checkmate => "checkmate",
                    WinReason::Resignation => "resignation",
                };
                write!(f, "{side} wins by {reason}")
            }
            Winner::Draw { reason } => match reason {
                DrawReason::Stalemate => f.write_str("Draw by stalemate"),
                DrawReason::InsufficientMaterial => f.write_str("Draw by insufficient material"),
            },
        }
    }
}
