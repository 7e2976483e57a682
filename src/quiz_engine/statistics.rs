//! Per-student score history and the pass/fail verdict derived from it.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{QuizError, Result},
    question::QuestionRef,
    quiz::Quiz,
};

/// Any quiz score at or above this mark passes.
pub const PASS_MARK: f64 = 0.5;

/// Quiz attempts after which a student without a passing score fails.
pub const ATTEMPTS_BEFORE_FAIL: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
    /// Not enough attempts yet to decide.
    Pending,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass    => write!(f, "PASS"),
            Verdict::Fail    => write!(f, "FAIL"),
            Verdict::Pending => write!(f, "TBD"),
        }
    }
}

/// Scores, attempt counts and missed questions for one student.
#[derive(Debug, Clone, Default)]
pub struct StudentStatistics {
    quiz_scores: Vec<f64>,
    revision_scores: Vec<f64>,
    quiz_attempts: u32,
    revision_attempts: u32,
    incorrect_questions: Vec<QuestionRef>,
}

impl StudentStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a regular quiz score. Scores outside `0.0..=1.0` are rejected.
    pub fn add_quiz_score(&mut self, score: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&score) {
            return Err(QuizError::ScoreOutOfRange(score));
        }
        self.quiz_scores.push(score);
        self.quiz_attempts += 1;
        Ok(())
    }

    /// Record a revision score. Unlike quiz scores this is not range-checked.
    pub fn add_revision_score(&mut self, score: f64) {
        self.revision_scores.push(score);
        self.revision_attempts += 1;
    }

    /// Scan one attempt and remember every question answered wrongly.
    ///
    /// Questions already remembered are not added twice. Returns how many
    /// new questions were added.
    pub fn add_incorrect_questions<S: AsRef<str>>(&mut self, quiz: &Quiz, answers: &[S]) -> usize {
        let before = self.incorrect_questions.len();
        for missed in quiz.incorrect_questions(answers) {
            if !self.incorrect_questions.iter().any(|q| Rc::ptr_eq(q, missed)) {
                self.incorrect_questions.push(Rc::clone(missed));
            }
        }
        self.incorrect_questions.len() - before
    }

    pub fn final_verdict(&self) -> Verdict {
        if self.quiz_scores.iter().any(|&s| s >= PASS_MARK) {
            Verdict::Pass
        } else if self.quiz_attempts >= ATTEMPTS_BEFORE_FAIL {
            Verdict::Fail
        } else {
            Verdict::Pending
        }
    }

    /// Mean quiz score, `0.0` when nothing is recorded.
    pub fn quiz_average_score(&self) -> f64 {
        if self.quiz_scores.is_empty() {
            return 0.0;
        }
        self.quiz_scores.iter().sum::<f64>() / self.quiz_scores.len() as f64
    }

    pub fn last_quiz_score(&self) -> Result<f64> {
        self.quiz_scores.last().copied().ok_or(QuizError::NoScores)
    }

    pub fn quiz_scores(&self) -> &[f64] {
        &self.quiz_scores
    }

    pub fn revision_scores(&self) -> &[f64] {
        &self.revision_scores
    }

    pub fn number_of_attempts(&self) -> u32 {
        self.quiz_attempts
    }

    pub fn number_of_revisions(&self) -> u32 {
        self.revision_attempts
    }

    pub fn incorrect_questions(&self) -> &[QuestionRef] {
        &self.incorrect_questions
    }
}
