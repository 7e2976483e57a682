//! Quiz system configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! quiz_length = 5
//! max_quiz_attempts = 2
//! max_revision_attempts = 2
//! rng_seed = 42
//!
//! [[questions]]
//! kind = "free"
//! text = "What is the capital of Peru?"
//! correct_options = ["Lima"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::Result,
    models::{QuestionKind, QuestionSpec},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of questions in every quiz built by `generate_quiz`.
    #[serde(default = "default_quiz_length")]
    pub quiz_length: usize,
    #[serde(default = "default_max_attempts")]
    pub max_quiz_attempts: u32,
    #[serde(default = "default_max_attempts")]
    pub max_revision_attempts: u32,
    /// Fixes the question sampling sequence when set.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default = "default_questions")]
    pub questions: Vec<QuestionSpec>,
}

fn default_quiz_length() -> usize {
    5
}

fn default_max_attempts() -> u32 {
    2
}

/// The built-in pool: five capitals and five pick-all-that-apply questions.
pub fn default_questions() -> Vec<QuestionSpec> {
    use QuestionKind::{FreeResponse as Free, MultipleChoice as Multiple};

    vec![
        QuestionSpec::new(Free, "What is the capital of France?", ["Paris"]),
        QuestionSpec::new(Free, "What is the capital of Germany?", ["Berlin"]),
        QuestionSpec::new(Free, "What is the capital of Japan?", ["Tokyo"]),
        QuestionSpec::new(Free, "What is the capital of India?", ["New Delhi"]),
        QuestionSpec::new(Free, "What is the capital of Australia?", ["Canberra"]),
        QuestionSpec::new(Multiple, "Which are vowels?", ["a", "e", "i", "o", "u"]),
        QuestionSpec::new(Multiple, "Which are prime numbers?", ["2", "3", "5", "7"]),
        QuestionSpec::new(Multiple, "Which are colors?", ["red", "green", "blue"]),
        QuestionSpec::new(Multiple, "Which are programming languages?", ["Java", "Python", "C++"]),
        QuestionSpec::new(Multiple, "Which are continents?", ["Asia", "Europe", "Africa"]),
    ]
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            quiz_length: default_quiz_length(),
            max_quiz_attempts: default_max_attempts(),
            max_revision_attempts: default_max_attempts(),
            rng_seed: None,
            questions: default_questions(),
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read a config file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
