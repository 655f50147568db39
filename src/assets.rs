//! Item image references for the card's picture slot.
//!
//! Resolution is kept apart from derivation: a missing image only removes
//! the picture line, never anything else on the card.

use crate::models::PlantSnapshot;

/// Image reference for the first reward item, `<base>/<item>.png`.
pub fn item_image_ref(snapshot: &PlantSnapshot, base_url: &str) -> Option<String> {
    let item = snapshot.rewards().first()?.item_key()?;
    Some(format!(
        "{}/{}.png",
        base_url.trim_end_matches('/'),
        item.trim().to_lowercase()
    ))
}
