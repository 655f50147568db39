//! Status derivation: turns a raw plant snapshot into the discrete facts
//! the notebook card paints.
//!
//! - `progress`: growth stage, time and watering indicators
//! - `harvest`: projected yield
//! - `notes`: ordered status notes and countdown formatting

pub mod harvest;
pub mod notes;
pub mod progress;

pub use harvest::estimate_yield;
pub use notes::{compose_notes, format_time, join_notes, Note};
pub use progress::WaterBuckets;

use crate::models::PlantSnapshot;

/// Everything the renderer needs, recomputed after every show/update/tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFacts {
    pub plant_name: Option<String>,
    pub growth_stage: u32,
    pub growth_indicators: u32,
    pub time_progress_pct: f64,
    pub time_buckets: u32,
    pub water: WaterBuckets,
    pub fertilized: bool,
    pub harvest_yield: u64,
    pub notes: Vec<Note>,
}

impl DisplayFacts {
    pub fn derive(snapshot: &PlantSnapshot) -> Self {
        Self {
            plant_name: snapshot.display_name().map(str::to_string),
            growth_stage: progress::growth_stage(snapshot),
            growth_indicators: progress::growth_indicators(snapshot),
            time_progress_pct: progress::time_progress_percent(snapshot),
            time_buckets: progress::time_bucket_count(snapshot),
            water: progress::water_buckets(snapshot),
            fertilized: progress::is_fertilized(snapshot),
            harvest_yield: estimate_yield(snapshot),
            notes: compose_notes(snapshot),
        }
    }

    /// Refresh only what a countdown tick can change.
    pub fn refresh_time(&mut self, snapshot: &PlantSnapshot) {
        self.time_progress_pct = progress::time_progress_percent(snapshot);
        self.time_buckets = progress::time_bucket_count(snapshot);
        self.notes = compose_notes(snapshot);
    }

    /// Notes section text, one note per line.
    pub fn note_text(&self) -> String {
        join_notes(&self.notes)
    }

    /// Harvest label as shown on the card, e.g. `4x`.
    pub fn harvest_label(&self) -> String {
        format!("{}x", self.harvest_yield)
    }
}
