//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, Scenario};

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenarios/
///     ├── default.ron
///     └── gauntlet.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rule configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load a named scenario from `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        ScenarioLoader::load(&self.scenario_path(name))
    }

    /// Names of the scenarios available under `scenarios/`, sorted.
    pub fn scenario_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("scenarios");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("scenarios").join(format!("{name}.ron"))
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.scenario_path("default"),
            Path::new("/tmp/data/scenarios/default.ron")
        );
    }

    #[test]
    fn test_load_directory() {
        let temp_dir = TempDir::new().unwrap();
        let scenarios = temp_dir.path().join("scenarios");
        fs::create_dir_all(&scenarios).unwrap();
        fs::write(temp_dir.path().join("config.toml"), "game_seed = 7\n").unwrap();
        fs::write(
            scenarios.join("tiny.ron"),
            "(hero: (position: (x: 0, y: 0), max_moves: 1, melee_power: 1, \
             ranged_power: 1, ranged_range: 1, hp: 1, max_hp: 1))",
        )
        .unwrap();
        fs::write(scenarios.join("notes.txt"), "ignored").unwrap();

        let factory = ContentFactory::new(temp_dir.path());
        assert_eq!(factory.load_config().unwrap().game_seed, 7);
        assert_eq!(factory.scenario_names().unwrap(), vec!["tiny".to_string()]);
        assert_eq!(factory.load_scenario("tiny").unwrap().hero.max_moves, 1);
        assert!(factory.load_scenario("missing").is_err());
    }

    #[test]
    fn test_shipped_data_directory() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../../data"));

        assert_eq!(
            factory.scenario_names().unwrap(),
            vec!["default".to_string(), "gauntlet".to_string()]
        );
        assert_eq!(
            factory.load_scenario("default").unwrap(),
            crate::builtin::skirmish()
        );

        let gauntlet = factory.load_scenario("gauntlet").unwrap();
        assert_eq!(gauntlet.enemies.len(), 3);
        assert_eq!(gauntlet.healing_spots.len(), 1);

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }
}
