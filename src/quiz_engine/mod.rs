//! Core quiz engine: questions, quizzes, attempt tracking and revision.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared plain types: question kinds, pool entries, students |
//! | `error`      | `QuizError`, the single invalid-argument error type |
//! | `question`   | Free-response and multiple-choice questions and their matching rules |
//! | `sampler`    | Uniform sampling without replacement by rejection |
//! | `quiz`       | Immutable quiz value and positional scoring |
//! | `generator`  | `QuizGenerator` and `create_quiz()` |
//! | `statistics` | Per-student scores, counters and verdict |
//! | `repository` | Per-student store of attempts, history and statistics |
//! | `config`     | `QuizConfig` (TOML) and the built-in pool |
//! | `snapshot`   | JSON export of a student's statistics |
//! | `system`     | `QuizSystem`, the orchestrator |

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod question;
pub mod quiz;
pub mod repository;
pub mod sampler;
pub mod snapshot;
pub mod statistics;
pub mod system;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSystem` without reaching into sub-modules.
pub use config::QuizConfig;
pub use error::{QuizError, Result};
pub use generator::{create_quiz, QuizGenerator};
pub use models::{QuestionKind, QuestionSpec, Student};
pub use question::{Question, QuestionRef};
pub use quiz::Quiz;
pub use repository::{QuizAttempt, StudentEntry, StudentRepository};
pub use statistics::{StudentStatistics, Verdict};
pub use system::{QuizSystem, NO_STATISTICS};
