//! Hero movement: single steps and budgeted jumps.

use crate::action::{ActionKind, ActionTransition};
use crate::combat::apply_heal;
use crate::config::HealingPolicy;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::grid;
use crate::state::{EntityId, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("hero has no moves left this turn")]
    NoMovesLeft,

    #[error("step ({dx}, {dy}) is not a single orthogonal tile")]
    InvalidStep { dx: i32, dy: i32 },

    #[error("hero is already at {destination}")]
    AlreadyThere { destination: Position },

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is a wall")]
    Blocked { destination: Position },

    #[error("destination {destination} is occupied by enemy {enemy}")]
    Occupied {
        destination: Position,
        enemy: EntityId,
    },

    #[error("destination is {distance} tiles away but only {moves} moves remain")]
    TooFar { distance: u32, moves: u32 },

    #[error("move left the hero in an invalid state: {0}")]
    InvariantViolated(HeroInvariant),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        use MoveError::*;
        match self {
            NoMovesLeft | Blocked { .. } | Occupied { .. } | TooFar { .. } => {
                ErrorSeverity::Recoverable
            }
            InvalidStep { .. } | AlreadyThere { .. } | OutOfBounds { .. } => {
                ErrorSeverity::Validation
            }
            InvariantViolated(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveError::*;
        match self {
            NoMovesLeft => "MOVE_NO_MOVES_LEFT",
            InvalidStep { .. } => "MOVE_INVALID_STEP",
            AlreadyThere { .. } => "MOVE_ALREADY_THERE",
            OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Blocked { .. } => "MOVE_BLOCKED",
            Occupied { .. } => "MOVE_OCCUPIED",
            TooFar { .. } => "MOVE_TOO_FAR",
            InvariantViolated(_) => "MOVE_INVARIANT_VIOLATED",
        }
    }
}

/// Hero invariants checked after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroInvariant {
    #[strum(serialize = "move budget above maximum")]
    BudgetAboveMaximum,
    #[strum(serialize = "hit points above maximum")]
    HitPointsAboveMaximum,
    #[strum(serialize = "hero stands on a blocked tile")]
    OnBlockedTile,
}

/// Hit points restored by stepping on a healing spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealOutcome {
    pub position: Position,
    /// Hit points actually gained after clamping to max.
    pub amount: u32,
    pub hp_after: u32,
    /// Whether the spot was removed.
    pub consumed: bool,
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSummary {
    pub from: Position,
    pub to: Position,
    /// Move points spent.
    pub cost: u32,
    pub moves_left: u32,
    pub heal: Option<HealOutcome>,
}

/// Single orthogonal step. Always costs one move point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveByAction {
    pub dx: i32,
    pub dy: i32,
}

impl MoveByAction {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// True for exactly one tile along one axis.
    fn is_unit_step(&self) -> bool {
        matches!((self.dx, self.dy), (-1 | 1, 0) | (0, -1 | 1))
    }

    fn destination(&self, state: &GameState) -> Position {
        state.hero().position.offset(self.dx, self.dy)
    }
}

impl ActionTransition for MoveByAction {
    type Error = MoveError;
    type Result = MoveSummary;

    fn kind(&self) -> ActionKind {
        ActionKind::MoveBy
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.hero().has_moves() {
            return Err(MoveError::NoMovesLeft);
        }
        if !self.is_unit_step() {
            return Err(MoveError::InvalidStep {
                dx: self.dx,
                dy: self.dy,
            });
        }
        check_destination(state, self.destination(state))
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<MoveSummary, Self::Error> {
        let destination = self.destination(state);
        Ok(relocate_hero(state, env, destination, 1))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_hero_invariants(state)
    }
}

/// Instant relocation bounded by the remaining budget.
///
/// Costs the Manhattan distance to the destination. The path in between is
/// not checked; only the destination tile has to be free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveToAction {
    pub destination: Position,
}

impl MoveToAction {
    pub fn new(destination: Position) -> Self {
        Self { destination }
    }

    fn check(&self, state: &GameState) -> Result<u32, MoveError> {
        let hero = state.hero();
        if !hero.has_moves() {
            return Err(MoveError::NoMovesLeft);
        }
        if self.destination == hero.position {
            return Err(MoveError::AlreadyThere {
                destination: self.destination,
            });
        }
        check_destination(state, self.destination)?;

        let distance = grid::manhattan_distance(hero.position, self.destination);
        if distance > hero.moves {
            return Err(MoveError::TooFar {
                distance,
                moves: hero.moves,
            });
        }
        Ok(distance)
    }
}

impl ActionTransition for MoveToAction {
    type Error = MoveError;
    type Result = MoveSummary;

    fn kind(&self) -> ActionKind {
        ActionKind::MoveTo
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.check(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<MoveSummary, Self::Error> {
        let cost = grid::manhattan_distance(state.hero().position, self.destination);
        Ok(relocate_hero(state, env, self.destination, cost))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_hero_invariants(state)
    }
}

/// Cells the hero could jump to right now with [`MoveToAction`].
pub fn reachable_destinations(state: &GameState) -> Vec<Position> {
    grid::cells()
        .filter(|cell| MoveToAction::new(*cell).check(state).is_ok())
        .collect()
}

fn check_destination(state: &GameState, destination: Position) -> Result<(), MoveError> {
    if !grid::in_bounds(destination) {
        return Err(MoveError::OutOfBounds { destination });
    }
    if state.world.is_wall(destination) {
        return Err(MoveError::Blocked { destination });
    }
    if let Some(enemy) = state.entities.enemy_at(destination) {
        return Err(MoveError::Occupied {
            destination,
            enemy: enemy.id,
        });
    }
    Ok(())
}

fn relocate_hero(
    state: &mut GameState,
    env: &GameEnv<'_>,
    destination: Position,
    cost: u32,
) -> MoveSummary {
    let hero = &mut state.entities.hero;
    let from = hero.position;
    hero.position = destination;
    hero.moves = hero.moves.saturating_sub(cost);
    let moves_left = hero.moves;

    let heal = trigger_healing_spot(state, env, destination);

    MoveSummary {
        from,
        to: destination,
        cost,
        moves_left,
        heal,
    }
}

fn trigger_healing_spot(
    state: &mut GameState,
    env: &GameEnv<'_>,
    position: Position,
) -> Option<HealOutcome> {
    let index = state
        .entities
        .healing_spots
        .iter()
        .position(|spot| spot.position == position)?;
    let spot = state.entities.healing_spots[index];

    let hero = &mut state.entities.hero;
    let amount = apply_heal(&mut hero.hp, spot.heal);
    let hp_after = hero.hp.current;

    let consumed = env.config().healing == HealingPolicy::Consume;
    if consumed {
        state.entities.healing_spots.remove(index);
    }

    Some(HealOutcome {
        position,
        amount,
        hp_after,
        consumed,
    })
}

fn check_hero_invariants(state: &GameState) -> Result<(), MoveError> {
    let hero = state.hero();
    if hero.moves > hero.max_moves {
        return Err(MoveError::InvariantViolated(HeroInvariant::BudgetAboveMaximum));
    }
    if hero.hp.current > hero.hp.maximum {
        return Err(MoveError::InvariantViolated(HeroInvariant::HitPointsAboveMaximum));
    }
    if grid::is_blocked(&state.world, hero.position) {
        return Err(MoveError::InvariantViolated(HeroInvariant::OnBlockedTile));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnemyTemplate, GameConfig};
    use crate::env::{HeroSpec, PcgRng, Scenario};

    fn state_with(scenario: Scenario) -> GameState {
        GameState::from_scenario(&scenario).unwrap()
    }

    fn run<T>(action: &T, state: &mut GameState, config: &GameConfig) -> Result<T::Result, T::Error>
    where
        T: ActionTransition,
    {
        let env = GameEnv::new(config, &PcgRng);
        action.pre_validate(state, &env)?;
        let result = action.apply(state, &env)?;
        action.post_validate(state, &env)?;
        Ok(result)
    }

    #[test]
    fn three_steps_spend_the_budget() {
        let mut state = state_with(
            Scenario::new(HeroSpec::at(Position::new(2, 2))).with_walls([Position::new(5, 5)]),
        );
        let config = GameConfig::without_spawns();
        let right = MoveByAction::new(1, 0);

        for _ in 0..3 {
            run(&right, &mut state, &config).unwrap();
        }
        assert_eq!(state.hero().position, Position::new(5, 2));
        assert_eq!(state.hero().moves, 0);

        let before = state.clone();
        assert_eq!(
            run(&right, &mut state, &config),
            Err(MoveError::NoMovesLeft)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn step_rejects_walls_edges_and_enemies() {
        let mut state = state_with(
            Scenario::new(HeroSpec::at(Position::new(0, 2)))
                .with_walls([Position::new(1, 2)])
                .with_enemy(Position::new(0, 3), EnemyTemplate::default()),
        );
        let config = GameConfig::without_spawns();

        assert_eq!(
            run(&MoveByAction::new(-1, 0), &mut state, &config),
            Err(MoveError::OutOfBounds {
                destination: Position::new(-1, 2)
            })
        );
        assert_eq!(
            run(&MoveByAction::new(1, 0), &mut state, &config),
            Err(MoveError::Blocked {
                destination: Position::new(1, 2)
            })
        );
        assert!(matches!(
            run(&MoveByAction::new(0, 1), &mut state, &config),
            Err(MoveError::Occupied { .. })
        ));
        assert_eq!(
            run(&MoveByAction::new(1, 1), &mut state, &config),
            Err(MoveError::InvalidStep { dx: 1, dy: 1 })
        );
        assert_eq!(state.hero().moves, 3);
    }

    #[test]
    fn extreme_offsets_are_invalid_steps() {
        let mut state = state_with(Scenario::new(HeroSpec::at(Position::new(4, 4))));
        let config = GameConfig::without_spawns();

        for (dx, dy) in [(i32::MIN, 0), (i32::MAX, 1), (0, i32::MIN), (i32::MIN, i32::MIN), (0, 0)] {
            assert_eq!(
                run(&MoveByAction::new(dx, dy), &mut state, &config),
                Err(MoveError::InvalidStep { dx, dy })
            );
        }
        assert_eq!(state.hero().position, Position::new(4, 4));
        assert_eq!(state.hero().moves, 3);
    }

    #[test]
    fn healing_spot_clamps_and_is_consumed() {
        let mut state = state_with(
            Scenario::new(HeroSpec {
                hp: 9,
                ..HeroSpec::at(Position::new(0, 4))
            })
            .with_healing_spot(Position::new(0, 5), 3),
        );
        let config = GameConfig::without_spawns();

        let summary = run(&MoveByAction::new(0, 1), &mut state, &config).unwrap();

        assert_eq!(state.hero().hp.current, 12);
        assert_eq!(
            summary.heal,
            Some(HealOutcome {
                position: Position::new(0, 5),
                amount: 3,
                hp_after: 12,
                consumed: true,
            })
        );
        assert!(state.healing_spots().is_empty());
    }

    #[test]
    fn persistent_healing_spot_heals_again() {
        let mut state = state_with(
            Scenario::new(HeroSpec {
                hp: 4,
                ..HeroSpec::at(Position::new(0, 4))
            })
            .with_healing_spot(Position::new(0, 5), 3),
        );
        let config = GameConfig {
            healing: HealingPolicy::Persist,
            ..GameConfig::without_spawns()
        };

        run(&MoveByAction::new(0, 1), &mut state, &config).unwrap();
        run(&MoveByAction::new(0, -1), &mut state, &config).unwrap();
        run(&MoveByAction::new(0, 1), &mut state, &config).unwrap();

        assert_eq!(state.hero().hp.current, 10);
        assert_eq!(state.healing_spots().len(), 1);
    }

    #[test]
    fn jump_costs_manhattan_distance() {
        let mut state = state_with(Scenario::new(HeroSpec::at(Position::new(2, 2))));
        let config = GameConfig::without_spawns();

        let summary = run(&MoveToAction::new(Position::new(3, 3)), &mut state, &config).unwrap();

        assert_eq!(summary.cost, 2);
        assert_eq!(state.hero().position, Position::new(3, 3));
        assert_eq!(state.hero().moves, 1);
        assert_eq!(
            run(&MoveToAction::new(Position::new(5, 3)), &mut state, &config),
            Err(MoveError::TooFar {
                distance: 2,
                moves: 1
            })
        );
    }

    #[test]
    fn jump_ignores_walls_on_the_way() {
        let mut state = state_with(
            Scenario::new(HeroSpec::at(Position::new(2, 2))).with_walls([Position::new(3, 2)]),
        );
        let config = GameConfig::without_spawns();

        run(&MoveToAction::new(Position::new(4, 2)), &mut state, &config).unwrap();
        assert_eq!(state.hero().position, Position::new(4, 2));
    }

    #[test]
    fn reachable_destinations_respect_budget_and_obstacles() {
        let state = state_with(
            Scenario::new(HeroSpec {
                max_moves: 1,
                ..HeroSpec::at(Position::new(0, 0))
            })
            .with_walls([Position::new(1, 0)]),
        );

        assert_eq!(reachable_destinations(&state), vec![Position::new(0, 1)]);
    }
}
