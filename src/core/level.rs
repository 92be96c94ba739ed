//! Level selection - the difficulty dialog state machine
//!
//! Mirrors a modal single-choice dialog as a request/response pair of
//! discrete callbacks: opening stages the committed selection, choosing
//! restages, confirm commits, cancel clears the selection entirely.
//! "Nothing selected" is an explicit `None`, not a sentinel.

use tracing::debug;

use crate::types::LevelTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSelector {
    selected: Option<LevelTier>,
    dialog: Option<Dialog>,
}

/// Staged state while the dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dialog {
    pending: Option<LevelTier>,
}

impl LevelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed tier, if any.
    pub fn selected(&self) -> Option<LevelTier> {
        self.selected
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Choice shown pre-checked while the dialog is open.
    pub fn pending(&self) -> Option<LevelTier> {
        self.dialog.and_then(|dialog| dialog.pending)
    }

    /// Open the dialog with the current selection pre-checked.
    pub fn open_dialog(&mut self) {
        self.dialog = Some(Dialog {
            pending: self.selected,
        });
    }

    /// Stage the tier at `tier_index` while the dialog is open.
    ///
    /// Ignored when the dialog is closed or the index names no tier.
    pub fn choose(&mut self, tier_index: usize) {
        if let Some(dialog) = &mut self.dialog {
            if let Some(tier) = LevelTier::from_index(tier_index) {
                dialog.pending = Some(tier);
            }
        }
    }

    /// Accept the dialog: commit the staged tier and close.
    ///
    /// Confirming with nothing staged leaves the selection unchanged.
    pub fn confirm(&mut self) -> Option<LevelTier> {
        if let Some(dialog) = self.dialog.take() {
            if let Some(tier) = dialog.pending {
                self.selected = Some(tier);
                debug!(?tier, questions = tier.question_count(), "level confirmed");
            }
        }
        self.selected
    }

    /// Dismiss the dialog and clear the selection, staged or committed.
    pub fn cancel(&mut self) {
        self.dialog = None;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected() {
        let selector = LevelSelector::new();
        assert_eq!(selector.selected(), None);
        assert!(!selector.dialog_open());
    }

    #[test]
    fn confirm_maps_tier_index_to_question_count() {
        let mut selector = LevelSelector::new();

        selector.open_dialog();
        selector.choose(1);
        let tier = selector.confirm().unwrap();
        assert_eq!(tier.question_count(), 4);

        selector.open_dialog();
        selector.choose(2);
        let tier = selector.confirm().unwrap();
        assert_eq!(tier.question_count(), 6);
    }

    #[test]
    fn reopening_prechecks_the_committed_tier() {
        let mut selector = LevelSelector::new();
        selector.open_dialog();
        selector.choose(0);
        selector.confirm();

        selector.open_dialog();
        assert_eq!(selector.pending(), Some(LevelTier::Easy));
    }

    #[test]
    fn confirm_without_a_choice_keeps_the_selection() {
        let mut selector = LevelSelector::new();
        selector.open_dialog();
        assert_eq!(selector.confirm(), None);

        selector.open_dialog();
        selector.choose(2);
        selector.confirm();
        selector.open_dialog();
        assert_eq!(selector.confirm(), Some(LevelTier::Hard));
    }

    #[test]
    fn cancel_always_clears() {
        let mut selector = LevelSelector::new();
        selector.open_dialog();
        selector.choose(1);
        selector.confirm();

        selector.open_dialog();
        selector.choose(2);
        selector.cancel();

        assert_eq!(selector.selected(), None);
        assert!(!selector.dialog_open());
    }

    #[test]
    fn choose_ignores_out_of_range_indices() {
        let mut selector = LevelSelector::new();
        selector.open_dialog();
        selector.choose(9);
        assert_eq!(selector.pending(), None);
    }

    #[test]
    fn choose_is_inert_while_the_dialog_is_closed() {
        let mut selector = LevelSelector::new();
        selector.choose(1);
        assert_eq!(selector.confirm(), None);
    }
}
