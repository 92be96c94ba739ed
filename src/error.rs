//! Error types for resource loading, session configuration, and lifecycle misuse.

use thiserror::Error;

use crate::types::{SessionPhase, ENTRIES_PER_QUESTION, TIER_COUNT};

#[derive(Debug, Error)]
pub enum QuizError {
    /// The flat question array cannot be split into whole questions.
    /// Fatal at load time; the resource itself is corrupt.
    #[error("question array has {len} entries, expected a multiple of {stride}", stride = ENTRIES_PER_QUESTION)]
    MalformedQuestionArray { len: usize },

    /// A session was requested over an empty bank.
    #[error("cannot start a session with zero questions")]
    NoQuestions,

    /// A query or submission reached a session that already ended.
    #[error("session already finished ({phase:?})")]
    SessionFinished { phase: SessionPhase },

    /// The resource pack's tier label array has the wrong length.
    #[error("expected {expected} level labels, found {found}", expected = TIER_COUNT)]
    MissingLevelLabels { found: usize },

    #[error("failed to read resource pack")]
    Io(#[from] std::io::Error),

    #[error("failed to parse resource pack")]
    Json(#[from] serde_json::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
