//! Multiple-choice trivia game core.
//!
//! The crate is the pure, deterministic logic layer of a trivia game:
//! everything a UI needs to run a quiz, with rendering and navigation left
//! to the host behind small collaborator traits.
//!
//! # Module Structure
//!
//! - [`core`]: question bank, session state machine, level selection,
//!   scoring, and the seeded RNG behind every shuffle
//! - [`resource`]: the JSON resource pack supplying question and label
//!   string arrays
//! - [`flow`]: title and game screen controllers plus the [`flow::Notifier`]
//!   and [`flow::Navigator`] collaborator seams
//! - [`types`]: shared pure data types
//! - [`error`]: the crate-wide error enum
//!
//! # Game Rules
//!
//! - Questions are drawn in a uniformly shuffled order, answers reshuffled
//!   for every question
//! - A correct answer scores `10 * streak`; the streak starts at 1 and
//!   grows by one per correct answer
//! - Revealing the hint halves that question's award (integer floor)
//! - One wrong answer ends the run; answering every question wins it

pub mod core;
pub mod error;
pub mod flow;
pub mod resource;
pub mod types;

pub use crate::core::{LevelSelector, QuestionBank, QuizSession, SessionSnapshot};
pub use crate::error::{QuizError, QuizResult};
pub use crate::flow::{GameFlow, Navigator, Notifier, TitleFlow};
pub use crate::resource::ResourcePack;
pub use crate::types::{GameResult, LevelTier, Outcome, Question, SessionPhase};
