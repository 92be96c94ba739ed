//! Question bank - parses the flat localized string array into questions
//!
//! The resource supplies one flat array consumed in strides of six:
//! question text, four answers (the first one correct), hint. The bank is
//! built once and shared read-only by every session.

use tracing::info;

use crate::error::{QuizError, QuizResult};
use crate::types::{Question, ENTRIES_PER_QUESTION};

/// Immutable, load-once question store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build the bank from the flat resource array.
    ///
    /// Entries are grouped in consecutive chunks of six; a length that is
    /// not a multiple of six means the resource is corrupt and loading
    /// fails outright.
    pub fn load(raw: &[String]) -> QuizResult<Self> {
        if raw.len() % ENTRIES_PER_QUESTION != 0 {
            return Err(QuizError::MalformedQuestionArray { len: raw.len() });
        }

        let questions: Vec<Question> = raw
            .chunks_exact(ENTRIES_PER_QUESTION)
            .map(|chunk| Question {
                text: chunk[0].clone(),
                answers: [
                    chunk[1].clone(),
                    chunk[2].clone(),
                    chunk[3].clone(),
                    chunk[4].clone(),
                ],
                hint: chunk[5].clone(),
            })
            .collect();

        info!(count = questions.len(), "question bank loaded");
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// All questions in resource order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
