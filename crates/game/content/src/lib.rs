//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - The built-in skirmish scenario
//! - Scenario layouts (data-driven via RON)
//! - Rule configuration (data-driven via TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
