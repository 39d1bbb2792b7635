//! Scenario loader.
//!
//! Scenarios place the hero, walls, enemies and healing spots. Loading
//! validates the layout by building a [`GameState`] from it, so a scenario
//! that loads is guaranteed to start a game.

use std::path::Path;

use game_core::{GameState, Scenario};

use crate::loaders::{LoadResult, read_file};

/// Loader for scenario layouts from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse and validate a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        GameState::from_scenario(&scenario)?;

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Position;
    use std::fs;
    use tempfile::TempDir;

    const SMALL: &str = r#"(
    hero: (
        position: (x: 1, y: 1),
        max_moves: 2,
        melee_power: 3,
        ranged_power: 1,
        ranged_range: 4,
        hp: 8,
        max_hp: 8,
    ),
    walls: [(x: 2, y: 2)],
    enemies: [
        (position: (x: 5, y: 5), template: (max_hp: 2, ranged_power: 1, range: 2)),
    ],
)"#;

    #[test]
    fn test_load_scenario_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("small.ron");
        fs::write(&path, SMALL).unwrap();

        let scenario = ScenarioLoader::load(&path).unwrap();
        assert_eq!(scenario.hero.position, Position::new(1, 1));
        assert_eq!(scenario.hero.max_moves, 2);
        assert_eq!(scenario.walls, vec![Position::new(2, 2)]);
        assert_eq!(scenario.enemies.len(), 1);
        assert!(scenario.healing_spots.is_empty());
    }

    #[test]
    fn test_rejects_invalid_layout() {
        let on_wall = SMALL.replace("(x: 2, y: 2)", "(x: 1, y: 1)");
        let err = ScenarioLoader::parse(&on_wall).unwrap_err();
        assert!(err.to_string().contains("wall"), "{err}");

        let out_of_bounds = SMALL.replace("(x: 5, y: 5)", "(x: 10, y: 5)");
        assert!(ScenarioLoader::parse(&out_of_bounds).is_err());
    }

    #[test]
    fn test_rejects_malformed_ron() {
        let err = ScenarioLoader::parse("(hero: ())").unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario RON"));
    }
}
