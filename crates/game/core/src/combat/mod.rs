//! Combat resolution helpers.
//!
//! Pure functions over hit-point meters. Damage is flat (no rolls, no armor);
//! targeting and costs live in the attack actions.

pub mod damage;

pub use damage::{apply_damage, apply_heal};
