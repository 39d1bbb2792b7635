//! Game configuration constants and tunable rule policies.

use crate::state::Position;

/// Rule configuration shared by every action.
///
/// Loaded from TOML by `game-content`; every field falls back to its default
/// so partial files are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Base seed for every random roll (reinforcement spawns).
    pub game_seed: u64,
    pub sight: SightPolicy,
    pub ranged_cost: RangedCostPolicy,
    pub healing: HealingPolicy,
    pub spawn: SpawnRules,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Width and height of the square battlefield.
    pub const GRID_SIZE: i32 = 10;

    pub fn new() -> Self {
        Self {
            game_seed: 0,
            sight: SightPolicy::default(),
            ranged_cost: RangedCostPolicy::default(),
            healing: HealingPolicy::default(),
            spawn: SpawnRules::default(),
        }
    }

    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            ..Self::new()
        }
    }

    /// Configuration with reinforcements turned off, used by deterministic tests.
    pub fn without_spawns() -> Self {
        Self {
            spawn: SpawnRules::disabled(),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How line of sight treats target pairs that are not on a shared row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SightPolicy {
    /// Only straight rows and columns can be seen along; diagonal pairs never are.
    #[default]
    Orthogonal,
    /// Diagonal pairs are traced with a Bresenham line.
    Bresenham,
}

/// Move points charged by a ranged volley.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangedCostPolicy {
    /// One move point per volley, however many enemies it hits.
    #[default]
    PerActivation,
    /// One move point per enemy hit; the volley stops when the budget is spent.
    PerTarget,
}

/// Lifetime of a healing spot after it heals the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealingPolicy {
    /// The spot disappears after one use.
    #[default]
    Consume,
    /// The spot stays and heals again on every arrival.
    Persist,
}

/// Stat block used for scenario enemies and reinforcements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub max_hp: u32,
    pub ranged_power: u32,
    pub range: u32,
}

impl EnemyTemplate {
    pub const fn new(max_hp: u32, ranged_power: u32, range: u32) -> Self {
        Self {
            max_hp,
            ranged_power,
            range,
        }
    }
}

impl Default for EnemyTemplate {
    fn default() -> Self {
        Self::new(3, 1, 3)
    }
}

/// End-of-turn reinforcement rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnRules {
    /// Chance (0-100) that one enemy appears after the enemy phase.
    pub chance_percent: u32,
    /// Candidate cells; blocked or occupied ones are skipped.
    pub points: Vec<Position>,
    pub template: EnemyTemplate,
}

impl SpawnRules {
    pub const DEFAULT_CHANCE_PERCENT: u32 = 30;

    pub fn disabled() -> Self {
        Self {
            chance_percent: 0,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.chance_percent > 0 && !self.points.is_empty()
    }
}

impl Default for SpawnRules {
    fn default() -> Self {
        let edge = GameConfig::GRID_SIZE - 1;
        Self {
            chance_percent: Self::DEFAULT_CHANCE_PERCENT,
            points: vec![
                Position::new(0, 0),
                Position::new(edge, 0),
                Position::new(0, edge),
                Position::new(edge, edge),
            ],
            template: EnemyTemplate::default(),
        }
    }
}
