//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

use serde::Serialize;

/// Flat resource entries consumed per question: text, four answers, hint.
pub const ENTRIES_PER_QUESTION: usize = 6;

/// Every question carries exactly four answers.
pub const ANSWERS_PER_QUESTION: usize = 4;

/// Base award for a correct answer, multiplied by the streak.
pub const BASE_AWARD: u32 = 10;

/// Selectable difficulty tiers.
pub const TIER_COUNT: usize = 3;

/// Banner text when a question count maps to no known tier.
pub const UNKNOWN_LEVEL_LABEL: &str = "undetermined";

/// A single quiz question.
///
/// `answers[0]` is the correct one. Nothing is shown to a player in this
/// order; the session shuffles a copy of the answers before display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: [String; ANSWERS_PER_QUESTION],
    pub hint: String,
}

/// Difficulty tiers offered by the level dialog.
///
/// Each tier plays twice its 1-based index in questions: 2, 4, or 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelTier {
    Easy,
    Normal,
    Hard,
}

impl LevelTier {
    /// All tiers in dialog order.
    pub const ALL: [LevelTier; TIER_COUNT] = [LevelTier::Easy, LevelTier::Normal, LevelTier::Hard];

    /// Tier at the given dialog position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Dialog position of this tier.
    pub fn index(self) -> usize {
        match self {
            LevelTier::Easy => 0,
            LevelTier::Normal => 1,
            LevelTier::Hard => 2,
        }
    }

    /// Number of questions played at this tier.
    pub fn question_count(self) -> usize {
        (self.index() + 1) * 2
    }

    /// Tier matching a resolved question count, if any.
    pub fn for_question_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(LevelTier::Easy),
            4 => Some(LevelTier::Normal),
            6 => Some(LevelTier::Hard),
            _ => None,
        }
    }

    /// Label for this tier from the resource-supplied names.
    pub fn label(self, labels: &[String; TIER_COUNT]) -> &str {
        &labels[self.index()]
    }
}

/// Session lifecycle phase. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    InProgress,
    Won,
    Lost,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionPhase::InProgress)
    }
}

/// Final numbers handed to the navigation collaborator when a session ends.
///
/// On a win `question_number` equals `num_questions`. On a loss it is the
/// 0-based index of the failed question; results screens format the two
/// cases differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub question_number: usize,
    pub num_questions: usize,
    pub score: u32,
}

/// What a submitted answer did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Correct, and more questions remain.
    Continue,
    /// Correct, and that was the last question.
    Won(GameResult),
    /// Wrong; the session is over.
    Lost(GameResult),
}

impl Outcome {
    /// Whether the submitted answer was the correct one.
    pub fn was_correct(self) -> bool {
        !matches!(self, Outcome::Lost(_))
    }
}
