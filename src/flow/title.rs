//! Title screen flow - level dialog wiring and the play guard

use tracing::warn;

use crate::core::LevelSelector;
use crate::flow::Notifier;
use crate::types::LevelTier;

/// Warning surfaced when play is pressed with no level selected.
pub const SELECT_LEVEL_WARNING: &str = "Select a level before starting the game";

/// State behind the title screen: just the level selection.
#[derive(Debug, Clone, Default)]
pub struct TitleFlow {
    selector: LevelSelector,
}

impl TitleFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(&self) -> &LevelSelector {
        &self.selector
    }

    pub fn open_level_dialog(&mut self) {
        self.selector.open_dialog();
    }

    pub fn choose_level(&mut self, tier_index: usize) {
        self.selector.choose(tier_index);
    }

    pub fn confirm_level(&mut self) -> Option<LevelTier> {
        self.selector.confirm()
    }

    pub fn cancel_level(&mut self) {
        self.selector.cancel();
    }

    /// Play button.
    ///
    /// Returns the tier to start a game at, or warns through the notifier
    /// and stays on the title screen when nothing is selected.
    pub fn play(&mut self, notifier: &mut dyn Notifier) -> Option<LevelTier> {
        match self.selector.selected() {
            Some(tier) => Some(tier),
            None => {
                warn!("play pressed with no level selected");
                notifier.notify(SELECT_LEVEL_WARNING);
                None
            }
        }
    }
}
