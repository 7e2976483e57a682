//! # quiz_revision
//!
//! An in-memory quiz engine that limits students to two attempts and builds
//! revision quizzes from the questions they got wrong.
//!
//! ## How it works
//!
//! 1. A [`QuizSystem`] owns a fixed pool of [`Question`]s: free-response
//!    questions with one answer, and multiple-choice questions where every
//!    correct option must be named.
//! 2. [`QuizSystem::generate_quiz`] samples distinct questions from the pool
//!    uniformly at random into an immutable [`Quiz`].
//! 3. [`QuizSystem::take_quiz`] scores a student's answers by position, keeps
//!    the attempt in the student's history and records the score. A student
//!    gets two regular attempts.
//! 4. [`QuizSystem::generate_revision_quiz`] scans the whole history and builds
//!    a quiz from every question the student ever missed.
//!
//! ## Answer matching
//!
//! Matching ignores surrounding whitespace and letter case. Multi-answer
//! submissions are comma-separated and compared as sets, so `"i, e , a"`
//! answers `{a, e, i}`.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quiz_revision::{QuizConfig, QuizSystem, Student, Verdict};
//!
//! let config = QuizConfig { rng_seed: Some(42), ..QuizConfig::default() };
//! let mut system = QuizSystem::with_config(config).unwrap();
//! let student = Student::new("John", "Doe", NaiveDate::from_ymd_opt(1995, 2, 1).unwrap());
//!
//! let quiz = system.generate_quiz(5).unwrap();
//! for q in quiz.questions() {
//!     println!("Q: {}", q.text());
//! }
//!
//! let score = system.take_quiz(&student, &quiz, &["wrong"; 5]).unwrap();
//! assert_eq!(score, 0.0);
//!
//! // Everything was missed, so the revision quiz repeats the whole quiz.
//! let revision = system.generate_revision_quiz(&student).unwrap().unwrap();
//! assert_eq!(revision.len(), 5);
//!
//! let stats = system.statistics(&student).unwrap();
//! assert_eq!(stats.final_verdict(), Verdict::Pending);
//! println!("{}", system.generate_statistics(&student));
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `quiz_revision::QuizSystem`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    create_quiz, Question, QuestionKind, QuestionRef, QuestionSpec, Quiz, QuizAttempt,
    QuizConfig, QuizError, QuizGenerator, QuizSystem, Student, StudentStatistics, Verdict,
    NO_STATISTICS,
};
