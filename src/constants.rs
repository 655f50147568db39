//! Application-wide constants.
//!
//! Centralizes the derivation rules' magic numbers, timing defaults,
//! layout sizes and filesystem locations.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Countdown tick period (ms). One tick removes one second of `timeLeft`,
/// so this stays fixed at one second of wall-clock time.
pub const TICK_PERIOD_MS: u64 = 1000;
/// Fade-out window between a hide request and clearing the card (ms).
pub const DEFAULT_HIDE_TRANSITION_MS: u64 = 300;
/// Upper bound for the fade-out window (ms).
pub const MAX_HIDE_TRANSITION_MS: u64 = 5000;
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;

// ── Growth / progress indicators ──────────────────────────────────
/// Number of growth stage indicators; stage 3 is mature.
pub const GROWTH_STAGES: u32 = 3;
/// Number of time indicators.
pub const TIME_BUCKETS: u32 = 5;
/// Percentage covered by one time indicator.
pub const TIME_BUCKET_PCT: f64 = 20.0;

// ── Yield bonuses ─────────────────────────────────────────────────
/// Multiplier applied when the base fertilizer was used.
pub const FERTILIZER_BONUS: f64 = 1.15;
/// Multiplier applied when every watering was done.
pub const FULL_WATER_BONUS: f64 = 1.10;
/// Multiplier applied once the plant reached the last growth stage.
pub const FULL_GROWTH_BONUS: f64 = 1.05;

// ── Payload sentinels ─────────────────────────────────────────────
/// Value the game sends in `fertilizerType` when no fertilizer is set.
pub const NULL_FERTILIZER: &str = "NULL";

// ── Assets ────────────────────────────────────────────────────────
/// Default location of inventory item images.
pub const DEFAULT_ASSET_BASE_URL: &str = "https://cfx-nui-vorp_inventory/html/img/items";

// ── UI Layout ─────────────────────────────────────────────────────
/// Notebook card width.
pub const CARD_WIDTH: u16 = 46;
/// Minimum notebook card height.
pub const CARD_MIN_HEIGHT: u16 = 16;
/// Longest plant name shown before truncation (display columns).
pub const MAX_NAME_WIDTH: usize = 36;

// ── Supported Languages ───────────────────────────────────────────
/// Available UI languages.
pub const LANGUAGES: &[&str] = &["en", "pt-BR"];

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/plant-status/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("plant-status")
}

/// Returns `~/.config/plant-status/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/plant-status/themes/`.
pub fn custom_theme_dir() -> PathBuf {
    config_dir().join("themes")
}

/// Returns `~/.config/plant-status/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    custom_theme_dir().join(format!("{}.toml", name))
}

/// Returns `~/.local/share/plant-status/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("plant-status")
}

/// Returns `~/.local/share/plant-status/plant-status.log`.
pub fn default_log_path() -> PathBuf {
    data_dir().join("plant-status.log")
}
