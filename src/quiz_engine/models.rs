use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Question kinds
// ---------------------------------------------------------------------------

/// The two question variants a pool entry can describe.
///
/// Parsed case-insensitively from `"free"` / `"multiple"`, so pool files can
/// write `Free`, `FREE` or `free` interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuestionKind {
    FreeResponse,
    MultipleChoice,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::FreeResponse   => "free",
            QuestionKind::MultipleChoice => "multiple",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::FreeResponse   => write!(f, "Free Response"),
            QuestionKind::MultipleChoice => write!(f, "Multiple Choice"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("free") {
            Ok(QuestionKind::FreeResponse)
        } else if s.eq_ignore_ascii_case("multiple") {
            Ok(QuestionKind::MultipleChoice)
        } else {
            Err(QuizError::UnknownQuestionKind(s.to_string()))
        }
    }
}

impl TryFrom<String> for QuestionKind {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One pool entry before it is turned into a [`Question`](crate::Question):
/// the `(type, text, correctOptions)` tuple accepted at pool initialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub kind: QuestionKind,
    pub text: String,
    pub correct_options: Vec<String>,
}

impl QuestionSpec {
    pub fn new<S: Into<String>>(
        kind: QuestionKind,
        text: impl Into<String>,
        correct_options: impl IntoIterator<Item = S>,
    ) -> Self {
        QuestionSpec {
            kind,
            text: text.into(),
            correct_options: correct_options.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

/// A student taking quizzes. Two students are the same student when name and
/// date of birth all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Student {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
        }
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_parses_case_insensitively() {
        assert_eq!("Free".parse::<QuestionKind>().unwrap(), QuestionKind::FreeResponse);
        assert_eq!("MULTIPLE".parse::<QuestionKind>().unwrap(), QuestionKind::MultipleChoice);
        assert!(matches!(
            "essay".parse::<QuestionKind>(),
            Err(QuizError::UnknownQuestionKind(k)) if k == "essay"
        ));
    }

    #[test]
    fn students_compare_on_all_fields() {
        let dob = NaiveDate::from_ymd_opt(1995, 2, 1).unwrap();
        let a = Student::new("John", "Doe", dob);
        let b = Student::new("John", "Doe", dob);
        let c = Student::new("John", "Doe", NaiveDate::from_ymd_opt(1996, 2, 1).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.full_name(), "John Doe");
    }
}
