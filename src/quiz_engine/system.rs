//! The quiz system: question pool, attempt limits and revision quizzes.
//!
//! ## Attempt model
//!
//! Each student has two independent counters, one for regular quizzes and one
//! for revision quizzes. Both start at zero and stop at the configured limit
//! (two by default). Once a counter reaches its limit every further submission
//! of that kind is rejected; nothing resets it.
//!
//! ## Revision
//!
//! Scoring a regular quiz does not decide what to revise. The history of
//! submitted `(quiz, answers)` pairs is kept instead, and
//! [`QuizSystem::generate_revision_quiz`] scans the whole history when asked,
//! so a question missed in any attempt appears in the revision quiz once.
//!
//! The system is single-threaded. Share it across threads only behind a lock.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::quiz_engine::{
    config::QuizConfig,
    error::{QuizError, Result},
    generator::QuizGenerator,
    models::Student,
    question::{Question, QuestionRef},
    quiz::Quiz,
    repository::{QuizAttempt, StudentRepository},
    snapshot,
    statistics::StudentStatistics,
};

/// Returned by [`QuizSystem::generate_statistics`] for a student with no
/// recorded attempts.
pub const NO_STATISTICS: &str = "No statistics available for this student.";

#[derive(Debug)]
pub struct QuizSystem {
    pool: Vec<QuestionRef>,
    generator: QuizGenerator,
    students: StudentRepository,
    config: QuizConfig,
}

impl QuizSystem {
    /// A system over the built-in ten-question pool with default limits.
    pub fn new() -> Self {
        Self::with_config(QuizConfig::default()).expect("built-in question pool is valid")
    }

    /// Build the pool from `config.questions`. Fails on the first invalid entry.
    pub fn with_config(config: QuizConfig) -> Result<Self> {
        let pool = config
            .questions
            .iter()
            .map(|spec| Question::from_spec(spec).map(QuestionRef::new))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::with_pool(pool, config))
    }

    /// Use an already-built pool; `config.questions` is ignored.
    pub fn with_pool(pool: Vec<QuestionRef>, config: QuizConfig) -> Self {
        debug!(pool = pool.len(), seed = ?config.rng_seed, "quiz system ready");
        QuizSystem {
            pool,
            generator: QuizGenerator::new(config.rng_seed),
            students: StudentRepository::new(),
            config,
        }
    }

    pub fn pool(&self) -> &[QuestionRef] {
        &self.pool
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn students(&self) -> &StudentRepository {
        &self.students
    }

    /// Pre-select `n` distinct pool questions, then build a quiz of
    /// `quiz_length` questions from that selection.
    ///
    /// Fails if `n` exceeds the pool size, or if `n` is smaller than
    /// `quiz_length`.
    pub fn generate_quiz(&mut self, n: usize) -> Result<Quiz> {
        let selection = self.generator.sample(&self.pool, n)?;
        self.generator.create_quiz(&selection, self.config.quiz_length)
    }

    /// Score a regular quiz submission and record it.
    ///
    /// Rejected when the student is out of attempts, when `answers` is empty
    /// or when its length differs from the quiz's. A rejected submission
    /// changes nothing.
    pub fn take_quiz<S: AsRef<str>>(
        &mut self,
        student: &Student,
        quiz: &Quiz,
        answers: &[S],
    ) -> Result<f64> {
        let limit = self.config.max_quiz_attempts;
        if self.students.quiz_attempts(student) >= limit {
            warn!(%student, limit, "quiz attempt rejected: no attempts left");
            return Err(QuizError::AttemptsExhausted { limit });
        }
        quiz.check_answers(answers)?;

        let answers: Vec<String> = answers.iter().map(|a| a.as_ref().to_string()).collect();
        let attempt = QuizAttempt::new(quiz.clone(), answers);
        let score = attempt.score();

        let entry = self.students.entry(student);
        entry.record_quiz(attempt, score)?;
        info!(%student, score, attempt = entry.quiz_attempts(), "quiz attempt recorded");
        Ok(score)
    }

    /// A quiz of every question the student has ever answered wrongly, or
    /// `None` if there is nothing to revise.
    ///
    /// The missed questions are also stored on the student's statistics,
    /// which is what [`QuizSystem::revise`] draws from.
    pub fn generate_revision_quiz(&mut self, student: &Student) -> Result<Option<Quiz>> {
        let missed = match self.students.get_mut(student) {
            Some(entry) => entry.collect_incorrect(),
            None => Vec::new(),
        };
        debug!(%student, missed = missed.len(), "scanned quiz history");

        if missed.is_empty() {
            warn!(%student, "no incorrect answers found, no revision quiz");
            return Ok(None);
        }
        let quiz = self.generator.create_quiz(&missed, missed.len())?;
        Ok(Some(quiz))
    }

    /// A quiz of up to `n` questions drawn from the missed questions stored on
    /// the student's statistics.
    ///
    /// Fails if none are stored. They are stored by
    /// [`QuizSystem::generate_revision_quiz`] or by calling
    /// [`StudentStatistics::add_incorrect_questions`] directly.
    pub fn revise(&mut self, student: &Student, n: usize) -> Result<Quiz> {
        let incorrect = self
            .students
            .get(student)
            .map(|entry| entry.statistics().incorrect_questions())
            .unwrap_or_default();
        if incorrect.is_empty() {
            warn!(%student, "revision requested with nothing to revise");
            return Err(QuizError::NoIncorrectQuestions);
        }

        let take = n.min(incorrect.len());
        let picked = self.generator.sample(incorrect, take)?;
        Ok(Quiz::new(picked))
    }

    /// Score a revision quiz and record it.
    ///
    /// Uses the quiz's own scoring, so the answer count is not checked against
    /// the question count here.
    pub fn take_revision_quiz<S: AsRef<str>>(
        &mut self,
        student: &Student,
        quiz: &Quiz,
        answers: &[S],
    ) -> Result<f64> {
        let limit = self.config.max_revision_attempts;
        if self.students.revision_attempts(student) >= limit {
            warn!(%student, limit, "revision attempt rejected: no attempts left");
            return Err(QuizError::RevisionAttemptsExhausted { limit });
        }

        let score = quiz.score(answers)?;
        let entry = self.students.entry(student);
        entry.record_revision(score);
        info!(%student, score, attempt = entry.revision_attempts(), "revision attempt recorded");
        Ok(score)
    }

    /// A multi-line summary of the student's record, or [`NO_STATISTICS`].
    ///
    /// ```text
    /// Student: John Doe
    /// Quiz Attempts: 2
    /// Revision Attempts: 0
    /// Scores: [0.2, 0.6]
    /// Final Verdict: PASS
    /// ```
    pub fn generate_statistics(&self, student: &Student) -> String {
        let Some(stats) = self.statistics(student) else {
            return NO_STATISTICS.to_string();
        };
        format!(
            "Student: {}\nQuiz Attempts: {}\nRevision Attempts: {}\nScores: {:?}\nFinal Verdict: {}",
            student.full_name(),
            stats.number_of_attempts(),
            stats.number_of_revisions(),
            stats.quiz_scores(),
            stats.final_verdict(),
        )
    }

    /// The student's statistics, if any attempt of either kind is recorded.
    pub fn statistics(&self, student: &Student) -> Option<&StudentStatistics> {
        self.students
            .get(student)
            .filter(|entry| entry.quiz_attempts() > 0 || entry.revision_attempts() > 0)
            .map(|entry| entry.statistics())
    }

    pub fn statistics_json(&self, student: &Student) -> Option<Value> {
        self.statistics(student)
            .map(|stats| snapshot::statistics_snapshot(student, stats))
    }

    pub fn quiz_history(&self, student: &Student) -> &[QuizAttempt] {
        self.students.history(student)
    }

    pub fn quiz_attempts(&self, student: &Student) -> u32 {
        self.students.quiz_attempts(student)
    }

    pub fn revision_attempts(&self, student: &Student) -> u32 {
        self.students.revision_attempts(student)
    }
}

impl Default for QuizSystem {
    fn default() -> Self {
        Self::new()
    }
}
