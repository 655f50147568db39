use serde::Deserialize;

use super::lenient;

/// One item the plant yields on harvest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reward {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub item_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub item_label: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub amount: Option<u32>,
}

impl Reward {
    /// Amount counted toward the harvest base. Missing or zero counts as one.
    pub fn counted_amount(&self) -> u32 {
        match self.amount {
            Some(n) if n > 0 => n,
            _ => 1,
        }
    }

    /// Inventory item identifier, falling back to the display label.
    pub fn item_key(&self) -> Option<&str> {
        self.item_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.item_label.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

/// Authoritative description of a growing plant, as sent by the farming game.
///
/// Every field is optional on the wire; derivations apply their own defaults
/// instead of rejecting a payload. The countdown clock is the only writer of
/// `time_left` and `is_ready` on its held copy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantSnapshot {
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub plant_id: Option<u64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub plant_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub plant_type: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub stage_number: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub stage_name: Option<String>,
    /// Legacy stage field, consulted only when `stage_number` is missing.
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub growth_stage: Option<u32>,
    /// Seconds remaining until the plant is ready.
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub time_left: Option<f64>,
    /// Total growth duration in seconds.
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub time_to_grow: Option<f64>,
    /// Alternative progress representation (0-100).
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub overall_progress: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub water_count: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub max_water_times: Option<u32>,
    /// Informational only; derivations compute their own ratio.
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub water_efficiency: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub base_fertilized: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub requires_base_fertilizer: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub fertilizer_type: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub is_ready: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_list")]
    pub rewards: Option<Vec<Reward>>,
}

impl PlantSnapshot {
    pub fn water_count(&self) -> u32 {
        self.water_count.unwrap_or(0)
    }

    /// Waterings this plant type takes. Missing or zero reads as one.
    pub fn max_water_times(&self) -> u32 {
        match self.max_water_times {
            Some(n) if n > 0 => n,
            _ => 1,
        }
    }

    pub fn is_fertilized(&self) -> bool {
        self.base_fertilized.unwrap_or(false)
    }

    pub fn requires_fertilizer(&self) -> bool {
        self.requires_base_fertilizer.unwrap_or(false)
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready.unwrap_or(false)
    }

    /// Remaining seconds, floored at zero. Missing reads as zero.
    pub fn seconds_left(&self) -> f64 {
        self.time_left.unwrap_or(0.0).max(0.0)
    }

    pub fn rewards(&self) -> &[Reward] {
        self.rewards.as_deref().unwrap_or(&[])
    }

    /// Fertilizer name if one is set (ignores blanks and the game's "NULL").
    pub fn fertilizer_name(&self) -> Option<&str> {
        self.fertilizer_type
            .as_deref()
            .filter(|s| !s.is_empty() && *s != crate::constants::NULL_FERTILIZER)
    }

    /// Display name, `None` when the game did not send one.
    pub fn display_name(&self) -> Option<&str> {
        self.plant_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Sample plant used by `--demo`.
    pub fn sample() -> Self {
        Self {
            plant_id: Some(1),
            plant_name: Some("Corn Field".to_string()),
            plant_type: Some("corn_seed".to_string()),
            stage_number: Some(2),
            stage_name: Some("Young Plant".to_string()),
            growth_stage: Some(2),
            time_left: Some(850.0),
            time_to_grow: Some(1200.0),
            overall_progress: Some(45.5),
            water_count: Some(2),
            max_water_times: Some(3),
            water_efficiency: Some(67.0),
            base_fertilized: Some(true),
            requires_base_fertilizer: Some(true),
            fertilizer_type: Some("Basic Fertilizer".to_string()),
            is_ready: Some(false),
            rewards: Some(vec![
                Reward {
                    item_name: Some("corn".to_string()),
                    item_label: Some("Corn".to_string()),
                    amount: Some(3),
                },
                Reward {
                    item_name: Some("corn_seed".to_string()),
                    item_label: Some("Corn Seed".to_string()),
                    amount: Some(1),
                },
            ]),
        }
    }
}
