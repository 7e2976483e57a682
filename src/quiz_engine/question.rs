//! Question variants and the answer-matching rules.
//!
//! Correct answers are normalised (trimmed, lower-cased) once at construction.
//! Submitted answers are normalised the same way at match time, and a
//! comma-separated submission is compared as a set, so whitespace, letter case,
//! answer order, empty tokens and repeated tokens never affect the outcome.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::{QuestionKind, QuestionSpec},
};

/// Shared handle to a pool question. Quizzes and histories hold these, and two
/// handles name the same question only when they point at the same allocation.
pub type QuestionRef = Rc<Question>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Exactly one correct answer.
    FreeResponse { text: String, answer: String },
    /// One or more correct answers; a submission must name all of them.
    MultipleChoice { text: String, answers: BTreeSet<String> },
}

/// Trim and lower-case one answer token.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Split a submission on commas into a normalised set, dropping empty tokens.
pub fn answer_set(submitted: &str) -> BTreeSet<String> {
    submitted
        .split(',')
        .map(normalize)
        .filter(|token| !token.is_empty())
        .collect()
}

impl Question {
    pub fn free_response(text: impl Into<String>, answer: &str) -> Result<Self> {
        let text = checked_text(text.into())?;
        let answer = normalize(answer);
        if answer.is_empty() {
            return Err(QuizError::EmptyCorrectAnswer);
        }
        Ok(Question::FreeResponse { text, answer })
    }

    pub fn multiple_choice<S: AsRef<str>>(
        text: impl Into<String>,
        answers: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let text = checked_text(text.into())?;
        let mut normalized = BTreeSet::new();
        for answer in answers {
            let answer = normalize(answer.as_ref());
            if answer.is_empty() {
                return Err(QuizError::EmptyCorrectAnswer);
            }
            normalized.insert(answer);
        }
        if normalized.is_empty() {
            return Err(QuizError::EmptyCorrectAnswer);
        }
        Ok(Question::MultipleChoice { text, answers: normalized })
    }

    /// Build a question from a pool entry.
    ///
    /// A free-response entry takes its first option as the correct answer; a
    /// multiple-choice entry takes the whole option list as the correct set.
    pub fn from_spec(spec: &QuestionSpec) -> Result<Self> {
        match spec.kind {
            QuestionKind::FreeResponse => {
                let first = spec
                    .correct_options
                    .first()
                    .ok_or(QuizError::EmptyCorrectAnswer)?;
                Question::free_response(spec.text.clone(), first)
            }
            QuestionKind::MultipleChoice => {
                Question::multiple_choice(spec.text.clone(), &spec.correct_options)
            }
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::FreeResponse { .. }   => QuestionKind::FreeResponse,
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Question::FreeResponse { text, .. } | Question::MultipleChoice { text, .. } => text,
        }
    }

    /// The normalised correct answers, in sorted order.
    pub fn correct_answers(&self) -> Vec<&str> {
        match self {
            Question::FreeResponse { answer, .. } => vec![answer.as_str()],
            Question::MultipleChoice { answers, .. } => {
                answers.iter().map(String::as_str).collect()
            }
        }
    }

    /// Check a submitted answer. An absent submission is never correct.
    ///
    /// Free response: a submission without a comma must equal the answer; one
    /// with a comma is split into a set that must equal the one-element answer
    /// set. Multiple choice with several answers: the submission is always
    /// split and must be set-equal. Multiple choice with a single answer: the
    /// whole submission is compared directly, commas included.
    pub fn is_correct<'a>(&self, submitted: impl Into<Option<&'a str>>) -> bool {
        let submitted: Option<&str> = submitted.into();
        let Some(submitted) = submitted else {
            return false;
        };

        match self {
            Question::FreeResponse { answer, .. } => {
                if submitted.contains(',') {
                    let given = answer_set(submitted);
                    given.len() == 1 && given.contains(answer)
                } else {
                    normalize(submitted) == *answer
                }
            }
            Question::MultipleChoice { answers, .. } if answers.len() > 1 => {
                answer_set(submitted) == *answers
            }
            Question::MultipleChoice { answers, .. } => answers.contains(&normalize(submitted)),
        }
    }
}

fn checked_text(text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(QuizError::EmptyQuestionText)
    } else {
        Ok(text)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Question: {}", self.kind(), self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital() -> Question {
        Question::free_response("What is the capital of France?", "Paris").unwrap()
    }

    fn vowels() -> Question {
        Question::multiple_choice("Which are vowels?", ["a", "e", "i"]).unwrap()
    }

    #[test]
    fn free_response_ignores_case_and_whitespace() {
        let q = capital();
        assert!(q.is_correct("Paris"));
        assert!(q.is_correct("paris"));
        assert!(q.is_correct("PARIS"));
        assert!(q.is_correct("  Paris "));
        assert!(!q.is_correct("London"));
        assert!(!q.is_correct("Berlin"));
        assert!(!q.is_correct(""));
    }

    #[test]
    fn absent_answer_is_incorrect() {
        assert!(!capital().is_correct(None));
        assert!(!vowels().is_correct(None));
    }

    #[test]
    fn free_response_comma_submission_is_compared_as_a_set() {
        let q = capital();
        assert!(!q.is_correct("Paris, London"));
        // Repeats collapse, so this is the one-element set {"paris"}.
        assert!(q.is_correct("paris, PARIS"));
        assert!(q.is_correct("Paris,"));
    }

    #[test]
    fn multiple_choice_requires_the_exact_set() {
        let q = vowels();
        assert!(q.is_correct("a,e,i"));
        assert!(q.is_correct("a, e, i"));
        assert!(q.is_correct(" i, e , a"));
        assert!(q.is_correct("A,E,I"));
        assert!(q.is_correct("a,,e,i,a"));
        assert!(!q.is_correct("a,e"));
        assert!(!q.is_correct("a,e,i,o"));
        assert!(!q.is_correct("b, c, d"));
        assert!(!q.is_correct("London"));
    }

    #[test]
    fn single_answer_multiple_choice_matches_directly() {
        let q = Question::multiple_choice("Which is the first vowel?", [" A "]).unwrap();
        assert!(q.is_correct("a"));
        assert!(q.is_correct("  A"));
        assert!(!q.is_correct("a,"));
        assert!(!q.is_correct("e"));
    }

    #[test]
    fn correct_answers_are_normalised_at_construction() {
        let q = Question::multiple_choice("Which are languages?", ["Java", " Python", "C++ "]).unwrap();
        assert_eq!(q.correct_answers(), vec!["c++", "java", "python"]);
        assert_eq!(capital().correct_answers(), vec!["paris"]);
    }

    #[test]
    fn construction_rejects_empty_parts() {
        assert!(matches!(
            Question::free_response("", "Paris"),
            Err(QuizError::EmptyQuestionText)
        ));
        assert!(matches!(
            Question::free_response("Capital of France?", "  "),
            Err(QuizError::EmptyCorrectAnswer)
        ));
        assert!(matches!(
            Question::multiple_choice("Which are vowels?", Vec::<String>::new()),
            Err(QuizError::EmptyCorrectAnswer)
        ));
        assert!(matches!(
            Question::multiple_choice("Which are vowels?", ["a", ""]),
            Err(QuizError::EmptyCorrectAnswer)
        ));
    }

    #[test]
    fn from_spec_builds_either_variant() {
        let free = QuestionSpec::new(QuestionKind::FreeResponse, "Capital of Japan?", ["Tokyo", "Kyoto"]);
        let q = Question::from_spec(&free).unwrap();
        assert_eq!(q.kind(), QuestionKind::FreeResponse);
        assert!(q.is_correct("tokyo"));
        assert!(!q.is_correct("kyoto"));

        let multi = QuestionSpec::new(QuestionKind::MultipleChoice, "Which are primes?", ["2", "3", "5", "7"]);
        let q = Question::from_spec(&multi).unwrap();
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert!(q.is_correct("7,5,3,2"));

        let empty = QuestionSpec::new(QuestionKind::FreeResponse, "Capital?", Vec::<String>::new());
        assert!(matches!(Question::from_spec(&empty), Err(QuizError::EmptyCorrectAnswer)));
    }

    #[test]
    fn display_names_the_variant() {
        assert_eq!(capital().to_string(), "Free Response Question: What is the capital of France?");
        assert_eq!(vowels().to_string(), "Multiple Choice Question: Which are vowels?");
    }
}
