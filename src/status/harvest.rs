//! Projected harvest yield.

use crate::constants::{FERTILIZER_BONUS, FULL_GROWTH_BONUS, FULL_WATER_BONUS, GROWTH_STAGES};
use crate::models::PlantSnapshot;

use super::progress::growth_stage;

/// Expected number of items on harvest, never below 1.
///
/// Bonuses apply in a fixed order (fertilizer, full watering, full growth)
/// and each one floors before the next. The order changes the integer
/// result, so it must not be rearranged.
pub fn estimate_yield(snapshot: &PlantSnapshot) -> u64 {
    let rewards = snapshot.rewards();
    let mut base: u64 = if rewards.is_empty() {
        1
    } else {
        rewards.iter().map(|r| u64::from(r.counted_amount())).sum()
    };

    if snapshot.is_fertilized() {
        base = apply_bonus(base, FERTILIZER_BONUS);
    }

    if let Some(max) = snapshot.max_water_times.filter(|&m| m > 0) {
        let ratio = f64::from(snapshot.water_count()) / f64::from(max);
        if ratio >= 1.0 {
            base = apply_bonus(base, FULL_WATER_BONUS);
        }
    }

    if growth_stage(snapshot) >= GROWTH_STAGES {
        base = apply_bonus(base, FULL_GROWTH_BONUS);
    }

    base.max(1)
}

fn apply_bonus(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).floor() as u64
}
