//! Damage and healing application.

use crate::state::ResourceMeter;

/// Subtracts `damage` from the meter, clamped at zero.
///
/// Returns the hit points actually removed.
pub fn apply_damage(hp: &mut ResourceMeter, damage: u32) -> u32 {
    let before = hp.current;
    hp.current = hp.current.saturating_sub(damage);
    before - hp.current
}

/// Adds `amount` to the meter, clamped at its maximum.
///
/// Returns the hit points actually restored.
pub fn apply_heal(hp: &mut ResourceMeter, amount: u32) -> u32 {
    let before = hp.current;
    hp.current = hp.current.saturating_add(amount).min(hp.maximum);
    hp.current.saturating_sub(before)
}
