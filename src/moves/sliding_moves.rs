//! Ray tracing shared by the sliding pieces.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Walks from `from` one `(column_step, row_step)` at a time, stopping at the
/// board edge, just before a `color` piece, or on the first opposing piece.
pub fn trace_ray(
    from: Square,
    color: Color,
    position: &Position,
    column_step: i8,
    row_step: i8,
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(column_step, row_step) {
        match position.get(next) {
            None => out.push(next),
            Some(blocker) => {
                if blocker.color != color {
                    out.push(next);
                }
                break;
            }
        }
        current = next;
    }
}

pub fn trace_rays(from: Square, color: Color, position: &Position, steps: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &(column_step, row_step) in steps {
        trace_ray(from, color, position, column_step, row_step, &mut out);
    }
    out
}
