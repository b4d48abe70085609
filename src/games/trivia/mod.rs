//! Crypto Trivia - the timed multiple-choice quiz
//!
//! Every run shuffles the question order and each question's option order.
//! A question locks on the first answer or when its countdown runs out;
//! advancing is only possible while locked.

pub mod questions;

pub use questions::{QUESTIONS, Question};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Countdown per question
pub const QUESTION_SECS: u32 = 15;
pub const QUESTION_TICKS: u32 = QUESTION_SECS * TICKS_PER_SECOND;
/// Points per correct answer
pub const POINTS_PER_ANSWER: u32 = 10;

/// Current phase of a quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    /// Countdown running, answers accepted
    Asking,
    /// Answer (or timeout) recorded; waiting for advance
    Locked,
    /// All questions done, results on display
    Finished,
}

/// Complete quiz state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizState {
    pub seed: u64,
    /// Question order for this run (indices into `QUESTIONS`)
    order: Vec<usize>,
    /// Per-question display order of the four options
    option_order: Vec<[usize; 4]>,
    /// Position within `order`
    pub index: usize,
    pub score: u32,
    pub correct: u32,
    pub phase: QuizPhase,
    /// Ticks left on the current question
    pub time_ticks: u32,
    /// Display slot the player picked; None after a timeout
    pub selected: Option<usize>,
}

impl QuizState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..QUESTIONS.len()).collect();
        order.shuffle(&mut rng);
        let option_order = (0..QUESTIONS.len())
            .map(|_| {
                let mut slots = [0usize, 1, 2, 3];
                slots.shuffle(&mut rng);
                slots
            })
            .collect();
        Self {
            seed,
            order,
            option_order,
            index: 0,
            score: 0,
            correct: 0,
            phase: QuizPhase::Asking,
            time_ticks: QUESTION_TICKS,
            selected: None,
        }
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// The question currently on display
    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.order[self.index]]
    }

    /// Text for a display slot of the current question
    pub fn option_text(&self, slot: usize) -> &'static str {
        let question = self.question();
        question.options[self.option_order[self.index][slot]]
    }

    /// The display slot holding the correct answer
    pub fn correct_slot(&self) -> usize {
        let answer = self.question().answer;
        self.option_order[self.index]
            .iter()
            .position(|&o| o == answer)
            .unwrap_or(0)
    }

    /// Seconds shown on the countdown (rounded up while running)
    pub fn time_secs(&self) -> u32 {
        self.time_ticks.div_ceil(TICKS_PER_SECOND)
    }

    /// Lock in an answer for the current question. Ignored once locked.
    pub fn answer(&mut self, slot: usize) {
        if self.phase != QuizPhase::Asking || slot >= 4 {
            return;
        }
        self.phase = QuizPhase::Locked;
        self.selected = Some(slot);
        if slot == self.correct_slot() {
            self.score += POINTS_PER_ANSWER;
            self.correct += 1;
        }
    }

    /// Move to the next question, or finish after the last one.
    /// Only valid while locked.
    pub fn advance(&mut self) {
        if self.phase != QuizPhase::Locked {
            return;
        }
        if self.index + 1 < self.order.len() {
            self.index += 1;
            self.phase = QuizPhase::Asking;
            self.time_ticks = QUESTION_TICKS;
            self.selected = None;
        } else {
            self.phase = QuizPhase::Finished;
        }
    }

    /// Advance one simulation tick; a countdown hitting zero locks the
    /// question with no selection.
    pub fn tick(&mut self) {
        if self.phase != QuizPhase::Asking {
            return;
        }
        self.time_ticks -= 1;
        if self.time_ticks == 0 {
            self.phase = QuizPhase::Locked;
            self.selected = None;
        }
    }

    /// Percentage of questions answered correctly
    pub fn accuracy(&self) -> f32 {
        if self.order.is_empty() {
            return 0.0;
        }
        self.correct as f32 / self.order.len() as f32 * 100.0
    }

    /// Result tier shown on the final modal
    pub fn verdict(&self) -> &'static str {
        let accuracy = self.accuracy();
        if accuracy >= 80.0 {
            "Crypto Whale Status!"
        } else if accuracy >= 50.0 {
            "Solid Trader!"
        } else {
            "Back to the Whitepapers!"
        }
    }

    /// Fresh run with a new shuffle
    pub fn replay(&mut self) {
        *self = Self::new(self.seed.wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let quiz = QuizState::new(123);
        let mut order = quiz.order.clone();
        order.sort_unstable();
        let expected: Vec<usize> = (0..QUESTIONS.len()).collect();
        assert_eq!(order, expected);

        for slots in &quiz.option_order {
            let mut sorted = *slots;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3]);
        }
    }

    #[test]
    fn correct_answer_scores_ten() {
        let mut quiz = QuizState::new(5);
        let slot = quiz.correct_slot();
        quiz.answer(slot);
        assert_eq!(quiz.phase, QuizPhase::Locked);
        assert_eq!(quiz.score, POINTS_PER_ANSWER);
        assert_eq!(quiz.correct, 1);
    }

    #[test]
    fn wrong_answer_scores_nothing() {
        let mut quiz = QuizState::new(5);
        let slot = (quiz.correct_slot() + 1) % 4;
        quiz.answer(slot);
        assert_eq!(quiz.phase, QuizPhase::Locked);
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.selected, Some(slot));
    }

    #[test]
    fn second_answer_is_ignored() {
        let mut quiz = QuizState::new(5);
        let wrong = (quiz.correct_slot() + 1) % 4;
        quiz.answer(wrong);
        quiz.answer(quiz.correct_slot());
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.selected, Some(wrong));
    }

    #[test]
    fn countdown_timeout_locks_with_no_selection() {
        let mut quiz = QuizState::new(5);
        for _ in 0..QUESTION_TICKS {
            quiz.tick();
        }
        assert_eq!(quiz.phase, QuizPhase::Locked);
        assert_eq!(quiz.selected, None);
        assert_eq!(quiz.time_ticks, 0);

        // Answers after the timeout are ignored
        quiz.answer(quiz.correct_slot());
        assert_eq!(quiz.score, 0);
    }

    #[test]
    fn advance_requires_lock() {
        let mut quiz = QuizState::new(5);
        quiz.advance();
        assert_eq!(quiz.index, 0);

        quiz.answer(0);
        quiz.advance();
        assert_eq!(quiz.index, 1);
        assert_eq!(quiz.phase, QuizPhase::Asking);
        assert_eq!(quiz.time_ticks, QUESTION_TICKS);
        assert_eq!(quiz.selected, None);
    }

    #[test]
    fn finishing_after_the_last_question() {
        let mut quiz = QuizState::new(9);
        for _ in 0..quiz.total() {
            let slot = quiz.correct_slot();
            quiz.answer(slot);
            quiz.advance();
        }
        assert_eq!(quiz.phase, QuizPhase::Finished);
        assert_eq!(quiz.correct, QUESTIONS.len() as u32);
        assert_eq!(quiz.score, QUESTIONS.len() as u32 * POINTS_PER_ANSWER);
        assert_eq!(quiz.accuracy(), 100.0);
        assert_eq!(quiz.verdict(), "Crypto Whale Status!");
    }

    #[test]
    fn verdict_tiers() {
        let mut quiz = QuizState::new(1);
        quiz.correct = 12; // 48%
        assert_eq!(quiz.verdict(), "Back to the Whitepapers!");
        quiz.correct = 13; // 52%
        assert_eq!(quiz.verdict(), "Solid Trader!");
        quiz.correct = 20; // 80%
        assert_eq!(quiz.verdict(), "Crypto Whale Status!");
    }

    #[test]
    fn timer_display_rounds_up() {
        let mut quiz = QuizState::new(1);
        assert_eq!(quiz.time_secs(), QUESTION_SECS);
        quiz.tick();
        assert_eq!(quiz.time_secs(), QUESTION_SECS);
        for _ in 0..TICKS_PER_SECOND {
            quiz.tick();
        }
        assert_eq!(quiz.time_secs(), QUESTION_SECS - 1);
    }

    #[test]
    fn replay_reshuffles_and_resets() {
        let mut quiz = QuizState::new(9);
        quiz.answer(0);
        quiz.replay();
        assert_eq!(quiz.index, 0);
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.phase, QuizPhase::Asking);
    }

    #[test]
    fn option_texts_cover_all_options() {
        let quiz = QuizState::new(3);
        let question = quiz.question();
        let mut shown: Vec<&str> = (0..4).map(|slot| quiz.option_text(slot)).collect();
        shown.sort_unstable();
        let mut expected = question.options.to_vec();
        expected.sort_unstable();
        assert_eq!(shown, expected);
    }
}
