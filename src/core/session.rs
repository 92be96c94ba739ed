//! Quiz session - the InProgress/Won/Lost state machine
//!
//! Owns the shuffled question order and the running score, streak, and
//! hint state. Mutated only by `use_hint` and `submit_answer`; every
//! transition happens synchronously inside a UI event callback, and the
//! session is dropped once the UI navigates to a results screen.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::bank::QuestionBank;
use crate::core::rng::SimpleRng;
use crate::core::scoring::answer_award;
use crate::core::snapshot::{QuestionView, SessionSnapshot};
use crate::error::{QuizError, QuizResult};
use crate::types::{GameResult, Outcome, Question, SessionPhase, ANSWERS_PER_QUESTION};

/// A single play-through of up to `num_questions` questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    /// Shuffled bank indices; the run visits them left to right.
    order: Vec<usize>,
    /// Index into `order`. Equals `order.len()` only after a win.
    position: usize,
    /// Fresh shuffle of the current question's answers.
    displayed: [String; ANSWERS_PER_QUESTION],
    score: u32,
    streak: u32,
    hint_used: bool,
    phase: SessionPhase,
    rng: SimpleRng,
}

impl QuizSession {
    /// Start a session playing `min(bank.len(), level)` questions.
    ///
    /// The order is a uniform permutation of all bank indices truncated to
    /// that length, so no question repeats within a run. Fails when the
    /// resolved question count is zero.
    pub fn start(bank: Arc<QuestionBank>, level: usize, seed: u32) -> QuizResult<Self> {
        let num_questions = bank.len().min(level);
        if num_questions == 0 {
            return Err(QuizError::NoQuestions);
        }

        let mut rng = SimpleRng::new(seed);
        let mut order = rng.permutation(bank.len());
        order.truncate(num_questions);

        let mut session = Self {
            bank,
            order,
            position: 0,
            displayed: Default::default(),
            score: 0,
            streak: 1,
            hint_used: false,
            phase: SessionPhase::InProgress,
            rng,
        };
        session.present_current();

        info!(num_questions, seed, "quiz session started");
        Ok(session)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn num_questions(&self) -> usize {
        self.order.len()
    }

    /// Shuffled bank indices for this run.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The question currently presented.
    pub fn current_question(&self) -> QuizResult<&Question> {
        self.ensure_in_progress()?;
        Ok(self.current())
    }

    /// The current question's answers in display order.
    ///
    /// Always a permutation of the underlying four answers; the mapping to
    /// answer slots changes with every question.
    pub fn displayed_answers(&self) -> &[String; ANSWERS_PER_QUESTION] {
        &self.displayed
    }

    /// Reveal the current question's hint, halving this question's award.
    ///
    /// Idempotent: repeated calls return the same hint and leave the
    /// penalty flag set.
    pub fn use_hint(&mut self) -> QuizResult<&str> {
        self.ensure_in_progress()?;
        if !self.hint_used {
            self.hint_used = true;
            debug!(position = self.position, "hint revealed");
        }
        Ok(self.current().hint.as_str())
    }

    /// Score a submitted answer and advance the state machine.
    ///
    /// `chosen` is compared against the question's canonical first answer;
    /// anything else loses the session on the spot. On a loss the position
    /// stays at the failed question, so the reported question number is its
    /// 0-based index.
    pub fn submit_answer(&mut self, chosen: &str) -> QuizResult<Outcome> {
        self.ensure_in_progress()?;

        if chosen != self.current().answers[0] {
            self.phase = SessionPhase::Lost;
            let result = self.result();
            debug!(?result, "wrong answer, session lost");
            return Ok(Outcome::Lost(result));
        }

        self.score = self.score.saturating_add(answer_award(self.streak, self.hint_used));
        self.streak += 1;
        self.position += 1;

        if self.position < self.order.len() {
            self.present_current();
            debug!(
                position = self.position,
                score = self.score,
                streak = self.streak,
                "correct answer, next question presented"
            );
            Ok(Outcome::Continue)
        } else {
            self.phase = SessionPhase::Won;
            let result = self.result();
            info!(?result, "session won");
            Ok(Outcome::Won(result))
        }
    }

    /// Render-ready copy of the observable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let question = (self.position < self.order.len()).then(|| QuestionView {
            text: self.current().text.clone(),
            answers: self.displayed.clone(),
        });

        SessionSnapshot {
            phase: self.phase,
            question_number: (self.position + 1).min(self.order.len()),
            num_questions: self.order.len(),
            score: self.score,
            streak: self.streak,
            hint_used: self.hint_used,
            question,
        }
    }

    fn current(&self) -> &Question {
        &self.bank.questions()[self.order[self.position]]
    }

    fn result(&self) -> GameResult {
        GameResult {
            question_number: self.position,
            num_questions: self.order.len(),
            score: self.score,
        }
    }

    /// Shuffle the current question's answers and clear the hint flag.
    fn present_current(&mut self) {
        self.displayed = self.bank.questions()[self.order[self.position]].answers.clone();
        self.rng.shuffle(&mut self.displayed);
        self.hint_used = false;
    }

    fn ensure_in_progress(&self) -> QuizResult<()> {
        if self.phase.is_terminal() {
            return Err(QuizError::SessionFinished { phase: self.phase });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(count: usize) -> Arc<QuestionBank> {
        let mut raw = Vec::new();
        for i in 0..count {
            raw.push(format!("q{i}"));
            raw.push(format!("right{i}"));
            raw.push(format!("wrong{i}a"));
            raw.push(format!("wrong{i}b"));
            raw.push(format!("wrong{i}c"));
            raw.push(format!("hint{i}"));
        }
        Arc::new(QuestionBank::load(&raw).unwrap())
    }

    fn correct_answer(session: &QuizSession) -> String {
        session.current_question().unwrap().answers[0].clone()
    }

    #[test]
    fn start_clamps_to_bank_size() {
        let session = QuizSession::start(bank(3), 6, 1).unwrap();
        assert_eq!(session.num_questions(), 3);

        let session = QuizSession::start(bank(6), 4, 1).unwrap();
        assert_eq!(session.num_questions(), 4);
    }

    #[test]
    fn start_rejects_an_empty_run() {
        assert!(matches!(
            QuizSession::start(bank(0), 4, 1),
            Err(QuizError::NoQuestions)
        ));
        assert!(matches!(
            QuizSession::start(bank(6), 0, 1),
            Err(QuizError::NoQuestions)
        ));
    }

    #[test]
    fn fresh_session_state() {
        let session = QuizSession::start(bank(6), 4, 7).unwrap();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 1);
        assert!(!session.hint_used());
    }

    #[test]
    fn displayed_answers_are_a_permutation() {
        let mut session = QuizSession::start(bank(6), 6, 31).unwrap();

        loop {
            let mut shown = session.displayed_answers().to_vec();
            let mut expected = session.current_question().unwrap().answers.to_vec();
            shown.sort_unstable();
            expected.sort_unstable();
            assert_eq!(shown, expected);

            let answer = correct_answer(&session);
            if session.submit_answer(&answer).unwrap() != Outcome::Continue {
                break;
            }
        }
    }

    #[test]
    fn hint_is_idempotent() {
        let mut session = QuizSession::start(bank(6), 4, 5).unwrap();

        let first = session.use_hint().unwrap().to_string();
        assert!(session.hint_used());
        let second = session.use_hint().unwrap().to_string();
        assert_eq!(first, second);
        assert!(session.hint_used());
    }

    #[test]
    fn hint_flag_resets_on_the_next_question() {
        let mut session = QuizSession::start(bank(6), 4, 5).unwrap();

        session.use_hint().unwrap();
        let answer = correct_answer(&session);
        assert_eq!(session.submit_answer(&answer).unwrap(), Outcome::Continue);
        assert!(!session.hint_used());
    }

    #[test]
    fn hinted_award_is_halved() {
        let mut session = QuizSession::start(bank(6), 4, 5).unwrap();

        // streak 1, no hint: +10
        let answer = correct_answer(&session);
        session.submit_answer(&answer).unwrap();
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 2);

        // streak 2 with hint: floor(10 * 2 / 2) = +10
        session.use_hint().unwrap();
        let answer = correct_answer(&session);
        session.submit_answer(&answer).unwrap();
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn terminal_session_rejects_every_operation() {
        let mut session = QuizSession::start(bank(6), 4, 11).unwrap();
        session.submit_answer("not an answer").unwrap();
        assert_eq!(session.phase(), SessionPhase::Lost);

        assert!(matches!(
            session.current_question(),
            Err(QuizError::SessionFinished { phase: SessionPhase::Lost })
        ));
        assert!(matches!(
            session.use_hint(),
            Err(QuizError::SessionFinished { phase: SessionPhase::Lost })
        ));
        assert!(matches!(
            session.submit_answer("x"),
            Err(QuizError::SessionFinished { phase: SessionPhase::Lost })
        ));
    }

    #[test]
    fn snapshot_tracks_the_presented_question() {
        let session = QuizSession::start(bank(6), 4, 3).unwrap();
        let snap = session.snapshot();

        assert_eq!(snap.question_number, 1);
        assert_eq!(snap.num_questions, 4);
        let view = snap.question.unwrap();
        assert_eq!(view.text, session.current_question().unwrap().text);
        assert_eq!(&view.answers, session.displayed_answers());
    }

    #[test]
    fn snapshot_after_a_win_has_no_question() {
        let mut session = QuizSession::start(bank(2), 2, 3).unwrap();
        for _ in 0..2 {
            let answer = correct_answer(&session);
            session.submit_answer(&answer).unwrap();
        }

        let snap = session.snapshot();
        assert_eq!(snap.phase, SessionPhase::Won);
        assert_eq!(snap.question_number, 2);
        assert!(snap.question.is_none());
    }
}
