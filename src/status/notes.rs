//! Free-text status notes shown in the notebook's notes section.

use std::fmt;

use crate::models::PlantSnapshot;

/// One status note. Rendered text comes from the active locale.
#[derive(Debug, Clone, PartialEq)]
pub enum Note {
    ReadyForHarvest,
    NeedsWater,
    NeedsFertilizer,
    GrowingNormally,
    /// Seconds left on the countdown (always > 0).
    TimeRemaining(f64),
    Fertilizer(String),
    /// Watering efficiency in percent; may exceed 100 on over-watered plants.
    Efficiency(u64),
}

impl Note {
    pub fn text(&self) -> String {
        match self {
            Note::ReadyForHarvest => t!("notes.ready").to_string(),
            Note::NeedsWater => t!("notes.needs_water").to_string(),
            Note::NeedsFertilizer => t!("notes.needs_fertilizer").to_string(),
            Note::GrowingNormally => t!("notes.growing").to_string(),
            Note::TimeRemaining(secs) => {
                t!("notes.time_remaining", time = format_time(*secs)).to_string()
            }
            Note::Fertilizer(kind) => t!("notes.fertilizer", kind = kind).to_string(),
            Note::Efficiency(pct) => t!("notes.efficiency", pct = pct).to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Note::ReadyForHarvest => "🌾",
            Note::NeedsWater => "💧",
            Note::NeedsFertilizer | Note::Fertilizer(_) => "🧪",
            Note::GrowingNormally => "🌱",
            Note::TimeRemaining(_) => "⏰",
            Note::Efficiency(_) => "📈",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Build the ordered note list for a snapshot.
///
/// Readiness short-circuits the needs/time notes; fertilizer and efficiency
/// notes are appended in every case.
pub fn compose_notes(snapshot: &PlantSnapshot) -> Vec<Note> {
    let mut notes = Vec::new();

    if snapshot.is_ready() {
        notes.push(Note::ReadyForHarvest);
    } else {
        let needs_water = snapshot.water_count() < snapshot.max_water_times();
        let needs_fertilizer = snapshot.requires_fertilizer() && !snapshot.is_fertilized();

        match (needs_water, needs_fertilizer) {
            (true, true) => {
                notes.push(Note::NeedsWater);
                notes.push(Note::NeedsFertilizer);
            }
            (true, false) => notes.push(Note::NeedsWater),
            (false, true) => notes.push(Note::NeedsFertilizer),
            (false, false) => notes.push(Note::GrowingNormally),
        }

        if let Some(left) = snapshot.time_left.filter(|&t| t > 0.0) {
            notes.push(Note::TimeRemaining(left));
        }
    }

    if snapshot.is_fertilized() {
        if let Some(kind) = snapshot.fertilizer_name() {
            notes.push(Note::Fertilizer(kind.to_string()));
        }
    }

    if let Some(max) = snapshot.max_water_times.filter(|&m| m > 0) {
        let count = snapshot.water_count();
        if count > 0 {
            let pct = (f64::from(count) / f64::from(max) * 100.0).floor() as u64;
            notes.push(Note::Efficiency(pct));
        }
    }

    notes
}

/// Join rendered notes with newlines, in emission order.
pub fn join_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(Note::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a countdown: `Hh Mm` from one hour, `Mm Ss` from one minute,
/// `Ss` below that. Zero or less reads as ready.
pub fn format_time(seconds: f64) -> String {
    if seconds <= 0.0 || seconds.is_nan() {
        return t!("time.ready").to_string();
    }
    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
