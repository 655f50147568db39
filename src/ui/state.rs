use chrono::{DateTime, Local};

use crate::assets::item_image_ref;
use crate::clock::Ticker;
use crate::controller::StatusWidgetController;
use crate::status::DisplayFacts;

use super::theme::Theme;

/// Presentation state that lives outside the widget core.
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
    pub asset_base_url: String,
    /// Local time the last authoritative snapshot arrived.
    pub last_sync: Option<DateTime<Local>>,
    /// The message source hit EOF; nothing new will arrive.
    pub source_closed: bool,
}

impl AppState {
    pub fn new(theme: Theme, asset_base_url: String) -> Self {
        Self {
            theme,
            asset_base_url,
            last_sync: None,
            source_closed: false,
        }
    }

    pub fn mark_synced(&mut self) {
        self.last_sync = Some(Local::now());
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }
}

/// Everything one frame of the notebook card needs.
#[derive(Debug, Clone)]
pub struct CardView<'a> {
    pub facts: &'a DisplayFacts,
    pub stage_name: Option<&'a str>,
    pub image: Option<String>,
    pub fading: bool,
    pub ticking: bool,
    pub last_sync: Option<String>,
}

impl<'a> CardView<'a> {
    /// `None` while the widget is hidden.
    pub fn build<T: Ticker>(
        controller: &'a StatusWidgetController<T>,
        state: &AppState,
    ) -> Option<Self> {
        let facts = controller.facts()?;
        let snapshot = controller.clock().snapshot()?;
        Some(Self {
            facts,
            stage_name: snapshot.stage_name.as_deref().filter(|s| !s.is_empty()),
            image: item_image_ref(snapshot, &state.asset_base_url),
            fading: controller.is_fading(),
            ticking: controller.clock().is_ticking(),
            last_sync: state
                .last_sync
                .map(|t| t.format("%H:%M:%S").to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::clock::ManualTicker;
    use crate::models::PlantSnapshot;

    fn state() -> AppState {
        AppState::new(Theme::default(), "img".to_string())
    }

    #[test]
    fn hidden_widget_has_no_card() {
        let c = StatusWidgetController::new(ManualTicker::default(), Duration::ZERO);
        assert!(CardView::build(&c, &state()).is_none());
    }

    #[test]
    fn card_reflects_controller() {
        let mut c = StatusWidgetController::new(ManualTicker::default(), Duration::from_secs(1));
        c.show(PlantSnapshot::sample());
        let mut st = state();
        st.mark_synced();

        let card = CardView::build(&c, &st).unwrap();
        assert_eq!(card.stage_name, Some("Young Plant"));
        assert_eq!(card.image.as_deref(), Some("img/corn.png"));
        assert!(card.ticking);
        assert!(!card.fading);
        assert!(card.last_sync.is_some());

        c.hide(Instant::now());
        let card = CardView::build(&c, &st).unwrap();
        assert!(card.fading);
        assert!(!card.ticking);
    }

    #[test]
    fn cycle_theme_moves_on() {
        let mut st = state();
        st.cycle_theme();
        assert_ne!(st.theme.name, "default");
    }
}
