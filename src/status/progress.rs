//! Growth, time and watering indicators derived from a snapshot.

use crate::constants::{GROWTH_STAGES, TIME_BUCKETS, TIME_BUCKET_PCT};
use crate::models::PlantSnapshot;

/// Watering indicators: `count` checked out of `total` shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterBuckets {
    pub count: u32,
    pub total: u32,
}

/// Current growth stage: `stageNumber`, then the legacy `growthStage`, then 1.
pub fn growth_stage(snapshot: &PlantSnapshot) -> u32 {
    [snapshot.stage_number, snapshot.growth_stage]
        .into_iter()
        .flatten()
        .find(|&n| n > 0)
        .unwrap_or(1)
}

/// Number of lit growth indicators (indicator `i` is lit iff `i <= stage`).
pub fn growth_indicators(snapshot: &PlantSnapshot) -> u32 {
    growth_stage(snapshot).min(GROWTH_STAGES)
}

/// Elapsed share of the growth time in percent, within [0, 100].
///
/// `timeLeft`/`timeToGrow` take precedence; `overallProgress` is only read
/// when they can't be used. The two are never mixed.
pub fn time_progress_percent(snapshot: &PlantSnapshot) -> f64 {
    let pct = match (snapshot.time_left, snapshot.time_to_grow) {
        (Some(left), Some(total)) if total != 0.0 => ((total - left) / total) * 100.0,
        _ => snapshot.overall_progress.unwrap_or(0.0),
    };
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

/// Number of lit time indicators, one per full 20% of progress.
pub fn time_bucket_count(snapshot: &PlantSnapshot) -> u32 {
    let buckets = (time_progress_percent(snapshot) / TIME_BUCKET_PCT).floor() as u32;
    buckets.min(TIME_BUCKETS)
}

/// Watering indicators. Only `total` slots exist for this plant type and the
/// checked count never exceeds it.
pub fn water_buckets(snapshot: &PlantSnapshot) -> WaterBuckets {
    let total = snapshot.max_water_times();
    WaterBuckets {
        count: snapshot.water_count().min(total),
        total,
    }
}

pub fn is_fertilized(snapshot: &PlantSnapshot) -> bool {
    snapshot.is_fertilized()
}
