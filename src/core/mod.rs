//! Core module - pure quiz logic with no I/O
//!
//! Game rules, session state, and selection state. It has zero
//! dependencies on rendering, navigation, or the resource file format.

pub mod bank;
pub mod level;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use bank::QuestionBank;
pub use level::LevelSelector;
pub use rng::SimpleRng;
pub use scoring::{answer_award, perfect_score};
pub use session::QuizSession;
pub use snapshot::{QuestionView, SessionSnapshot};
