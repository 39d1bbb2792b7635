//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the game state (and UI state)
//! and renders into a terminal frame. Widgets never mutate anything.

pub mod footer;
pub mod map;
pub mod messages;
pub mod stats;
