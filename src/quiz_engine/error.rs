//! Error type for the quiz engine.
//!
//! Every failure the engine reports is an invalid-argument condition raised
//! synchronously before any state is touched. Variants name the cause so
//! callers can branch without string matching.

use thiserror::Error;

/// Errors returned by quiz generation, scoring and statistics operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// More questions were requested than the pool holds.
    #[error("requested {requested} questions but the pool only has {available}")]
    PoolTooSmall { requested: usize, available: usize },

    /// The student has used every regular quiz attempt.
    #[error("no more attempts allowed: the limit of {limit} quiz attempts has been reached")]
    AttemptsExhausted { limit: u32 },

    /// The student has used every revision attempt.
    #[error("no more revision attempts allowed: the limit of {limit} has been reached")]
    RevisionAttemptsExhausted { limit: u32 },

    #[error("answers must not be empty")]
    EmptyAnswers,

    /// Answer count differs from the quiz's question count.
    #[error("expected {expected} answers but {actual} were provided")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("score {0} is outside the range 0.0..=1.0")]
    ScoreOutOfRange(f64),

    #[error("no incorrect questions to revise")]
    NoIncorrectQuestions,

    #[error("no quiz scores recorded")]
    NoScores,

    #[error("question text must not be empty")]
    EmptyQuestionText,

    #[error("correct answers must not be empty")]
    EmptyCorrectAnswer,

    #[error("unknown question type: {0}")]
    UnknownQuestionKind(String),

    #[error("invalid quiz configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read quiz configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` if the error is a quota exhaustion, which no retry with
    /// different input can fix.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            QuizError::AttemptsExhausted { .. } | QuizError::RevisionAttemptsExhausted { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
