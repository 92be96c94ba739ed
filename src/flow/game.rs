//! Game screen flow - submit and hint events, outcome dispatch
//!
//! Owns the session for one play-through and speaks to the collaborators:
//! hints go out through the notifier, terminal outcomes through the
//! navigator. Everything else is a state query for re-rendering.

use std::sync::Arc;

use crate::core::{QuestionBank, QuizSession, SessionSnapshot};
use crate::error::QuizResult;
use crate::flow::{Navigator, Notifier};
use crate::types::{LevelTier, Outcome, TIER_COUNT, UNKNOWN_LEVEL_LABEL};

#[derive(Debug, Clone)]
pub struct GameFlow {
    session: QuizSession,
    level_label: String,
}

impl GameFlow {
    /// Start a game at the requested level (a question count).
    ///
    /// The banner label is looked up from the tier matching the requested
    /// count; an off-tier count falls back to a fixed placeholder.
    pub fn start(
        bank: Arc<QuestionBank>,
        level: usize,
        labels: &[String; TIER_COUNT],
        seed: u32,
    ) -> QuizResult<Self> {
        let level_label = LevelTier::for_question_count(level)
            .map(|tier| tier.label(labels).to_string())
            .unwrap_or_else(|| UNKNOWN_LEVEL_LABEL.to_string());
        let session = QuizSession::start(bank, level, seed)?;

        Ok(Self {
            session,
            level_label,
        })
    }

    /// Start a game at a confirmed tier.
    pub fn start_at_tier(
        bank: Arc<QuestionBank>,
        tier: LevelTier,
        labels: &[String; TIER_COUNT],
        seed: u32,
    ) -> QuizResult<Self> {
        Self::start(bank, tier.question_count(), labels, seed)
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Label shown on the level banner.
    pub fn level_label(&self) -> &str {
        &self.level_label
    }

    /// Header text above the question, rewritten after every answer.
    pub fn status_line(&self) -> String {
        let snapshot = self.session.snapshot();
        format!(
            "Question {} of {} (score {})",
            snapshot.question_number, snapshot.num_questions, snapshot.score
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Submit button.
    ///
    /// `selection` indexes the displayed answers. `None` means no radio
    /// button is checked and the press does nothing; so does an index the
    /// current display does not have.
    pub fn submit(
        &mut self,
        selection: Option<usize>,
        navigator: &mut dyn Navigator,
    ) -> QuizResult<Option<Outcome>> {
        let Some(index) = selection else {
            return Ok(None);
        };
        let Some(chosen) = self.session.displayed_answers().get(index).cloned() else {
            return Ok(None);
        };

        let outcome = self.session.submit_answer(&chosen)?;
        match outcome {
            Outcome::Continue => {}
            Outcome::Won(result) => navigator.game_won(result),
            Outcome::Lost(result) => navigator.game_over(result),
        }
        Ok(Some(outcome))
    }

    /// Hint button: reveal the hint through the notifier.
    pub fn show_hint(&mut self, notifier: &mut dyn Notifier) -> QuizResult<()> {
        let hint = self.session.use_hint()?.to_string();
        notifier.notify(&hint);
        Ok(())
    }
}
