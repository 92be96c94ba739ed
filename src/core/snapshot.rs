//! Render-ready view of a session, for UI data binding and observers.

use serde::Serialize;

use crate::types::{SessionPhase, ANSWERS_PER_QUESTION};

/// The question as the player sees it: text plus shuffled answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub text: String,
    pub answers: [String; ANSWERS_PER_QUESTION],
}

/// Everything the game screen needs to redraw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    /// 1-based number of the presented question; after a win it stays at
    /// the last question, on a loss at the failed one.
    pub question_number: usize,
    pub num_questions: usize,
    pub score: u32,
    pub streak: u32,
    pub hint_used: bool,
    /// Absent once the run is won and no question remains to show.
    pub question: Option<QuestionView>,
}

impl SessionSnapshot {
    pub fn in_progress(&self) -> bool {
        !self.phase.is_terminal()
    }
}
