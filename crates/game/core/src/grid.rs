//! Grid geometry: bounds, distances and line of sight.
//!
//! These are pure functions over positions and the static wall layout. None of
//! them look at units; occupancy is a movement rule, not a geometry rule.

use crate::config::{GameConfig, SightPolicy};
use crate::state::{Position, WorldState};

pub const GRID_SIZE: i32 = GameConfig::GRID_SIZE;

/// True iff both coordinates lie in `[0, GRID_SIZE)`.
pub fn in_bounds(position: Position) -> bool {
    (0..GRID_SIZE).contains(&position.x) && (0..GRID_SIZE).contains(&position.y)
}

pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Movement-blocking test: off the grid or a wall.
pub fn is_blocked(world: &WorldState, position: Position) -> bool {
    !in_bounds(position) || world.is_wall(position)
}

/// Checks that no cell strictly between `from` and `to` is blocked.
///
/// Pairs sharing a row or column are traced cell by cell. Diagonal pairs are
/// never visible under [`SightPolicy::Orthogonal`] and are traced with a
/// Bresenham line under [`SightPolicy::Bresenham`]. A cell can always see
/// itself.
pub fn has_line_of_sight(
    world: &WorldState,
    from: Position,
    to: Position,
    policy: SightPolicy,
) -> bool {
    if from.x != to.x && from.y != to.y && policy == SightPolicy::Orthogonal {
        return false;
    }

    ray(from, to)
        .filter(|cell| *cell != from && *cell != to)
        .all(|cell| !is_blocked(world, cell))
}

/// Cells visited walking from `from` to `to`, endpoints included.
///
/// Straight lines degenerate to a plain walk along one axis.
fn ray(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = (to.x - from.x).signum();
    let sy = (to.y - from.y).signum();

    let mut cursor = Some(from);
    let mut err = dx + dy;

    std::iter::from_fn(move || {
        let current = cursor?;
        if current == to {
            cursor = None;
            return Some(current);
        }

        let mut next = current;
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            next.x += sx;
        }
        if doubled <= dx {
            err += dx;
            next.y += sy;
        }
        cursor = Some(next);
        Some(current)
    })
}

/// One greedy step from `from` toward `to`, moving on both axes at once.
pub fn step_toward(from: Position, to: Position) -> Position {
    from.offset((to.x - from.x).signum(), (to.y - from.y).signum())
}

/// Every in-bounds cell, row by row.
pub fn cells() -> impl Iterator<Item = Position> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
}
