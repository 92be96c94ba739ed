//! Flow layer - wires the pure core to the hosting UI's collaborators
//!
//! The hosting UI supplies two seams: a transient notifier (toast or
//! snackbar) and a navigator that swaps screens on terminal outcomes. The
//! flow controllers translate widget events into core operations; they
//! never render anything themselves.

pub mod game;
pub mod title;

pub use game::GameFlow;
pub use title::{TitleFlow, SELECT_LEVEL_WARNING};

use crate::types::GameResult;

/// Transient message surface of the hosting UI.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Screen transitions driven by terminal outcomes.
///
/// The flow hands over the final numbers; the host decides what a results
/// screen looks like and how to get there.
pub trait Navigator {
    fn game_won(&mut self, result: GameResult);
    fn game_over(&mut self, result: GameResult);
}
