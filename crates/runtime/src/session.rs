//! Single-owner game controller.
//!
//! [`GameSession`] owns the state, the rule configuration and the RNG. Every
//! action goes through [`GameSession::execute`], which is the only caller of
//! [`GameEngine::execute`] in the workspace, so logging and event publication
//! stay consistent.

use tracing::{debug, error, info, warn};

use game_core::{
    Action, ActionResult, EnemyAction, ExecuteError, ExecutionOutcome, GameConfig, GameEngine,
    GameEnv, GameError, GameEvent, GameState, PcgRng, Position, Scenario, reachable_destinations,
};

use crate::error::{Result, RuntimeError};
use crate::events::{ActionEvent, Event, EventBus, EventReceiver, Topic, TurnEvent};

/// Builder for [`GameSession`].
pub struct SessionBuilder {
    scenario: Option<Scenario>,
    config: GameConfig,
    event_bus: Option<EventBus>,
    session_id: Option<String>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            scenario: None,
            config: GameConfig::default(),
            event_bus: None,
            session_id: None,
        }
    }

    /// Provide the opening layout. Defaults to the built-in skirmish.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Override rule configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing event bus instead of creating one.
    pub fn event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Label used in log records.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Build the session
    pub fn build(self) -> Result<GameSession> {
        if self.config.spawn.chance_percent > 100 {
            return Err(RuntimeError::InvalidSpawnChance(
                self.config.spawn.chance_percent,
            ));
        }

        let scenario = self.scenario.unwrap_or_else(game_content::builtin::skirmish);
        let state = GameState::from_scenario(&scenario).map_err(RuntimeError::InitialState)?;
        let session_id = self.session_id.unwrap_or_else(|| "local".to_string());

        info!(
            session = %session_id,
            hero = %state.hero().position,
            enemies = state.enemies().len(),
            walls = state.world.wall_count(),
            "session initialized"
        );

        Ok(GameSession {
            session_id,
            scenario,
            state,
            config: self.config,
            rng: PcgRng,
            event_bus: self.event_bus.unwrap_or_default(),
        })
    }
}

/// Owns the authoritative state and drives it through the engine.
pub struct GameSession {
    session_id: String,
    scenario: Scenario,
    state: GameState,
    config: GameConfig,
    rng: PcgRng,
    event_bus: EventBus,
}

impl GameSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn subscribe(&self, topic: Topic) -> EventReceiver {
        self.event_bus.subscribe(topic)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Cells the hero could reach with `move_to` right now.
    pub fn reachable_destinations(&self) -> Vec<Position> {
        reachable_destinations(&self.state)
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        self.execute(Action::move_by(dx, dy))
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        self.execute(Action::move_to(x, y))
    }

    pub fn melee_attack(&mut self) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        self.execute(Action::melee_attack())
    }

    pub fn ranged_attack(&mut self) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        self.execute(Action::ranged_attack())
    }

    pub fn end_turn(&mut self) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        self.execute(Action::end_turn())
    }

    /// Executes an action and publishes its outcome.
    ///
    /// This is the ONLY method that calls `GameEngine::execute()`.
    pub fn execute(&mut self, action: Action) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let env = GameEnv::new(&self.config, &self.rng);
        let result = GameEngine::new(&mut self.state).execute(env, &action);

        match &result {
            Ok(outcome) => self.on_executed(action, outcome),
            Err(error) => self.on_rejected(action, error),
        }

        result
    }

    /// Starts over from the opening scenario with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        self.state = GameState::from_scenario(&self.scenario).map_err(RuntimeError::InitialState)?;
        info!(session = %self.session_id, "session restarted");
        self.event_bus.publish(Event::Turn(TurnEvent {
            turn: self.state.turn.number,
            phase: self.state.turn.phase,
        }));
        Ok(())
    }

    fn on_executed(&self, action: Action, outcome: &ExecutionOutcome) {
        info!(
            session = %self.session_id,
            action = action.as_snake_case(),
            nonce = self.state.turn.action_nonce,
            hero = %self.state.hero().position,
            moves = self.state.hero().moves,
            hp = %self.state.hero().hp,
            "action executed"
        );

        if let ActionResult::EndTurn(summary) = &outcome.action_result {
            for enemy_action in &summary.enemy_actions {
                log_enemy_action(enemy_action);
            }
            if let Some((enemy, position)) = summary.spawned {
                debug!(%enemy, %position, "reinforcement arrived");
            }
        }

        self.event_bus.publish(Event::Action(ActionEvent::Executed {
            action,
            nonce: self.state.turn.action_nonce,
        }));
        for event in &outcome.events {
            if let GameEvent::HeroDefeated { turn } = event {
                warn!(session = %self.session_id, turn, "hero defeated");
            }
            self.event_bus.publish(Event::Game(*event));
        }

        if matches!(outcome.action_result, ActionResult::EndTurn(_)) {
            if !self.state.is_over() {
                info!(turn = self.state.turn.number, "turn started");
            }
            self.event_bus.publish(Event::Turn(TurnEvent {
                turn: self.state.turn.number,
                phase: self.state.turn.phase,
            }));
        }
    }

    fn on_rejected(&self, action: Action, error: &ExecuteError) {
        let severity = error.severity();
        if severity.is_internal() {
            error!(
                session = %self.session_id,
                action = action.as_snake_case(),
                code = error.error_code(),
                %error,
                "rule invariant broken"
            );
        } else {
            warn!(
                session = %self.session_id,
                action = action.as_snake_case(),
                code = error.error_code(),
                severity = severity.as_str(),
                %error,
                "action rejected"
            );
        }

        self.event_bus.publish(Event::Action(ActionEvent::Rejected {
            action,
            phase: error.phase(),
            severity,
            code: error.error_code().to_string(),
            error: error.to_string(),
        }));
    }
}

fn log_enemy_action(enemy_action: &EnemyAction) {
    match enemy_action {
        EnemyAction::Attacked {
            enemy,
            damage,
            hero_hp_after,
        } => debug!(%enemy, damage, hero_hp = hero_hp_after, "enemy fired at hero"),
        EnemyAction::Moved { enemy, from, to } => debug!(%enemy, %from, %to, "enemy advanced"),
        EnemyAction::Held { enemy } => debug!(%enemy, "enemy held position"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::drain;
    use game_core::{EnemyTemplate, HeroSpec};

    fn duel() -> GameSession {
        GameSession::builder()
            .scenario(
                Scenario::new(HeroSpec::at(Position::new(2, 2)))
                    .with_enemy(Position::new(3, 2), EnemyTemplate::new(4, 1, 3)),
            )
            .config(GameConfig::without_spawns())
            .build()
            .unwrap()
    }

    #[test]
    fn default_session_uses_skirmish() {
        let session = GameSession::builder().build().unwrap();
        assert_eq!(session.state().hero().position, Position::new(2, 2));
        assert_eq!(session.state().enemies().len(), 2);
        assert_eq!(session.session_id(), "local");
    }

    #[test]
    fn invalid_setup_is_reported() {
        let bad_spawn = GameConfig {
            spawn: game_core::SpawnRules {
                chance_percent: 150,
                ..Default::default()
            },
            ..GameConfig::default()
        };
        assert!(matches!(
            GameSession::builder().config(bad_spawn).build(),
            Err(RuntimeError::InvalidSpawnChance(150))
        ));

        let on_wall = Scenario::new(HeroSpec::at(Position::new(1, 1))).with_walls([Position::new(1, 1)]);
        assert!(matches!(
            GameSession::builder().scenario(on_wall).build(),
            Err(RuntimeError::InitialState(_))
        ));
    }

    #[test]
    fn actions_publish_on_their_topics() {
        let mut session = duel();
        let mut actions = session.subscribe(Topic::Action);
        let mut game = session.subscribe(Topic::Game);

        session.melee_attack().unwrap();
        session.move_by(1, 0).unwrap_err();

        let action_events = drain(&mut actions);
        assert_eq!(action_events.len(), 2);
        assert!(matches!(
            &action_events[0],
            Event::Action(ActionEvent::Executed { nonce: 1, .. })
        ));
        match &action_events[1] {
            Event::Action(ActionEvent::Rejected { code, severity, .. }) => {
                assert_eq!(code, "MOVE_OCCUPIED");
                assert_eq!(*severity, game_core::ErrorSeverity::Recoverable);
            }
            other => panic!("unexpected event {other:?}"),
        }

        assert_eq!(drain(&mut game).len(), 1);
    }

    #[test]
    fn restart_restores_the_opening() {
        let mut session = duel();
        session.melee_attack().unwrap();
        session.end_turn().unwrap();

        session.restart().unwrap();

        assert_eq!(session.state().turn.number, 1);
        assert_eq!(session.state().enemies()[0].hp.current, 4);
    }
}
