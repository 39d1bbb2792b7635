use std::collections::BTreeSet;

use super::Position;

/// Static layout of the battlefield. Walls never change after setup.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    walls: BTreeSet<Position>,
}

impl WorldState {
    pub fn new(walls: impl IntoIterator<Item = Position>) -> Self {
        Self {
            walls: walls.into_iter().collect(),
        }
    }

    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.walls.iter().copied()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }
}
