//! End-to-end scenarios driven through `GameSession`.

use game_core::{
    ActionResult, AttackError, EnemyAction, EnemyTemplate, ExecuteError, GameConfig, GameEvent,
    HealingPolicy, HeroSpec, MoveError, Position, RangedCostPolicy, Scenario, SightPolicy,
    SpawnRules, TurnPhase,
};
use runtime::{Event, GameSession, Topic, drain};

fn session(scenario: Scenario, config: GameConfig) -> GameSession {
    GameSession::builder()
        .scenario(scenario)
        .config(config)
        .build()
        .unwrap()
}

fn hero_at(x: i32, y: i32) -> Scenario {
    Scenario::new(HeroSpec::at(Position::new(x, y)))
}

fn move_error(err: ExecuteError) -> MoveError {
    match err {
        ExecuteError::Move(inner) => inner.error,
        other => panic!("expected a move error, got {other:?}"),
    }
}

#[test]
fn move_budget_runs_out_against_the_wall() {
    let mut game = session(
        hero_at(2, 2).with_walls([Position::new(5, 5)]),
        GameConfig::without_spawns(),
    );

    for _ in 0..3 {
        game.move_by(1, 0).unwrap();
    }
    assert_eq!(game.state().hero().position, Position::new(5, 2));
    assert_eq!(game.state().hero().moves, 0);

    let err = move_error(game.move_by(1, 0).unwrap_err());
    assert_eq!(err, MoveError::NoMovesLeft);
    assert_eq!(game.state().hero().position, Position::new(5, 2));
}

#[test]
fn blocked_moves_cost_nothing() {
    let mut game = session(
        hero_at(0, 0)
            .with_walls([Position::new(1, 0)])
            .with_enemy(Position::new(0, 1), EnemyTemplate::default()),
        GameConfig::without_spawns(),
    );

    assert!(matches!(
        move_error(game.move_by(-1, 0).unwrap_err()),
        MoveError::OutOfBounds { .. }
    ));
    assert!(matches!(
        move_error(game.move_by(1, 0).unwrap_err()),
        MoveError::Blocked { .. }
    ));
    assert!(matches!(
        move_error(game.move_by(0, 1).unwrap_err()),
        MoveError::Occupied { .. }
    ));
    assert!(matches!(
        move_error(game.move_by(1, 1).unwrap_err()),
        MoveError::InvalidStep { dx: 1, dy: 1 }
    ));

    assert_eq!(game.state().hero().moves, 3);
    assert_eq!(game.state().turn.action_nonce, 0);
}

#[test]
fn oversized_offsets_are_rejected_as_invalid_steps() {
    let mut game = session(hero_at(4, 4), GameConfig::without_spawns());

    assert_eq!(
        move_error(game.move_by(i32::MAX, 1).unwrap_err()),
        MoveError::InvalidStep { dx: i32::MAX, dy: 1 }
    );
    assert_eq!(
        move_error(game.move_by(i32::MIN, 0).unwrap_err()),
        MoveError::InvalidStep { dx: i32::MIN, dy: 0 }
    );
    assert_eq!(game.state().hero().position, Position::new(4, 4));
    assert_eq!(game.state().turn.action_nonce, 0);
}

#[test]
fn two_melee_strikes_remove_the_enemy() {
    let mut game = session(
        hero_at(2, 2).with_enemy(Position::new(3, 2), EnemyTemplate::new(4, 1, 3)),
        GameConfig::without_spawns(),
    );

    game.melee_attack().unwrap();
    assert_eq!(game.state().enemies()[0].hp.current, 2);

    let outcome = game.melee_attack().unwrap();
    assert!(game.state().enemies().is_empty());
    assert!(
        outcome
            .events
            .iter()
            .any(|event| matches!(event, GameEvent::EnemyKilled { .. }))
    );

    let err = game.melee_attack().unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Attack(ref inner) if matches!(inner.error, AttackError::NoTargets(_))
    ));
    assert_eq!(game.state().hero().moves, 3);
}

#[test]
fn melee_ignores_enemies_out_of_reach() {
    let mut game = session(
        hero_at(4, 4)
            .with_enemy(Position::new(5, 5), EnemyTemplate::new(3, 1, 3))
            .with_enemy(Position::new(4, 6), EnemyTemplate::new(3, 1, 3))
            .with_enemy(Position::new(3, 4), EnemyTemplate::new(3, 1, 3)),
        GameConfig::without_spawns(),
    );

    game.melee_attack().unwrap();

    let hps: Vec<(Position, u32)> = game
        .state()
        .enemies()
        .iter()
        .map(|enemy| (enemy.position, enemy.hp.current))
        .collect();
    assert_eq!(
        hps,
        vec![
            (Position::new(5, 5), 3),
            (Position::new(4, 6), 3),
            (Position::new(3, 4), 1),
        ]
    );
}

#[test]
fn entering_a_healing_spot_restores_and_consumes_it() {
    let mut game = session(
        Scenario::new(HeroSpec {
            hp: 9,
            ..HeroSpec::at(Position::new(0, 4))
        })
        .with_healing_spot(Position::new(0, 5), 3),
        GameConfig::without_spawns(),
    );

    let outcome = game.move_by(0, 1).unwrap();

    assert_eq!(game.state().hero().hp.current, 12);
    assert!(game.state().healing_spots().is_empty());
    assert!(outcome.events.contains(&GameEvent::HeroHealed {
        position: Position::new(0, 5),
        amount: 3,
        hp: 12,
        spot_consumed: true,
    }));
}

#[test]
fn persistent_healing_spots_stay() {
    let config = GameConfig {
        healing: HealingPolicy::Persist,
        ..GameConfig::without_spawns()
    };
    let mut game = session(
        Scenario::new(HeroSpec {
            hp: 4,
            ..HeroSpec::at(Position::new(0, 4))
        })
        .with_healing_spot(Position::new(0, 5), 3),
        config,
    );

    game.move_by(0, 1).unwrap();
    game.move_by(0, -1).unwrap();
    game.move_by(0, 1).unwrap();

    assert_eq!(game.state().hero().hp.current, 10);
    assert_eq!(game.state().healing_spots().len(), 1);
}

#[test]
fn distant_enemy_without_sight_advances_diagonally() {
    let mut game = session(
        hero_at(0, 0).with_enemy(Position::new(7, 7), EnemyTemplate::new(4, 1, 3)),
        GameConfig::without_spawns(),
    );

    let outcome = game.end_turn().unwrap();

    assert_eq!(game.state().enemies()[0].position, Position::new(6, 6));
    assert_eq!(game.state().hero().hp.current, 10);
    match outcome.action_result {
        ActionResult::EndTurn(summary) => {
            assert_eq!(summary.ended_turn, 1);
            assert_eq!(summary.next_turn, Some(2));
            assert!(matches!(
                summary.enemy_actions.as_slice(),
                [EnemyAction::Moved { .. }]
            ));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn ranged_volley_respects_range_and_walls() {
    let mut game = session(
        hero_at(2, 2)
            .with_walls([Position::new(2, 4)])
            .with_enemy(Position::new(5, 2), EnemyTemplate::new(3, 1, 3))
            .with_enemy(Position::new(2, 5), EnemyTemplate::new(3, 1, 3))
            .with_enemy(Position::new(6, 2), EnemyTemplate::new(3, 1, 3))
            .with_enemy(Position::new(3, 3), EnemyTemplate::new(3, 1, 3)),
        GameConfig::without_spawns(),
    );

    game.ranged_attack().unwrap();

    let hps: Vec<u32> = game
        .state()
        .enemies()
        .iter()
        .map(|enemy| enemy.hp.current)
        .collect();
    // Only (5, 2) is in range along a clear row; (2, 5) is behind a wall,
    // (6, 2) is out of range, and (3, 3) is diagonal.
    assert_eq!(hps, vec![1, 3, 3, 3]);
    assert_eq!(game.state().hero().moves, 2);
}

#[test]
fn bresenham_sight_reaches_diagonals() {
    let config = GameConfig {
        sight: SightPolicy::Bresenham,
        ..GameConfig::without_spawns()
    };
    let mut game = session(
        hero_at(2, 2).with_enemy(Position::new(3, 3), EnemyTemplate::new(3, 1, 3)),
        config,
    );

    game.ranged_attack().unwrap();

    assert_eq!(game.state().enemies()[0].hp.current, 1);
}

#[test]
fn per_target_volley_stops_when_budget_is_spent() {
    let config = GameConfig {
        ranged_cost: RangedCostPolicy::PerTarget,
        ..GameConfig::without_spawns()
    };
    let mut game = session(
        Scenario::new(HeroSpec {
            max_moves: 2,
            ..HeroSpec::at(Position::new(4, 4))
        })
        .with_enemy(Position::new(4, 2), EnemyTemplate::new(3, 1, 3))
        .with_enemy(Position::new(6, 4), EnemyTemplate::new(3, 1, 3))
        .with_enemy(Position::new(4, 7), EnemyTemplate::new(3, 1, 3)),
        config,
    );

    game.ranged_attack().unwrap();

    let damaged = game
        .state()
        .enemies()
        .iter()
        .filter(|enemy| enemy.hp.current < 3)
        .count();
    assert_eq!(damaged, 2);
    assert_eq!(game.state().hero().moves, 0);
}

#[test]
fn defeat_ends_the_game_and_is_announced() {
    let mut game = session(
        Scenario::new(HeroSpec {
            hp: 2,
            ..HeroSpec::at(Position::new(0, 0))
        })
        .with_enemy(Position::new(2, 0), EnemyTemplate::new(3, 1, 3))
        .with_enemy(Position::new(0, 2), EnemyTemplate::new(3, 1, 3))
        .with_enemy(Position::new(0, 3), EnemyTemplate::new(3, 1, 3)),
        GameConfig::without_spawns(),
    );
    let mut notifications = game.subscribe(Topic::Game);

    let outcome = game.end_turn().unwrap();

    assert!(outcome.hero_defeated());
    assert!(game.is_over());
    assert_eq!(game.state().hero().hp.current, 0);
    assert_eq!(game.state().turn.phase, TurnPhase::Defeated);
    assert_eq!(game.state().turn.number, 1);
    assert!(
        drain(&mut notifications)
            .iter()
            .any(|event| matches!(event, Event::Game(GameEvent::HeroDefeated { turn: 1 })))
    );

    assert_eq!(
        game.move_by(1, 0).unwrap_err(),
        ExecuteError::GameOver { turn: 1 }
    );
}

#[test]
fn end_turn_restores_the_budget() {
    let mut game = session(hero_at(2, 2), GameConfig::without_spawns());

    game.move_to(4, 3).unwrap();
    assert_eq!(game.state().hero().moves, 0);

    game.end_turn().unwrap();
    assert_eq!(game.state().hero().moves, 3);
    assert_eq!(game.state().turn.number, 2);
}

#[test]
fn reinforcements_are_deterministic_per_seed() {
    let config = GameConfig {
        spawn: SpawnRules {
            chance_percent: 100,
            ..SpawnRules::default()
        },
        ..GameConfig::with_seed(9)
    };

    let run = || {
        let mut game = session(hero_at(4, 4), config.clone());
        for _ in 0..3 {
            game.end_turn().unwrap();
        }
        game.state()
            .enemies()
            .iter()
            .map(|enemy| enemy.id)
            .collect::<Vec<_>>()
    };

    let first = run();
    assert_eq!(first.len(), 3);
    assert_eq!(first, run());
}
