use std::rc::Rc;

use tracing::debug;

use crate::quiz_engine::{
    error::{QuizError, Result},
    question::QuestionRef,
};

/// An immutable, ordered set of distinct questions.
///
/// Answers are matched to questions by position. Cloning a quiz clones the
/// handles, not the questions.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<QuestionRef>,
}

impl Quiz {
    /// Wrap `questions`, dropping any handle that repeats an earlier one.
    pub fn new(questions: impl IntoIterator<Item = QuestionRef>) -> Self {
        let mut distinct: Vec<QuestionRef> = Vec::new();
        for q in questions {
            if !distinct.iter().any(|d| Rc::ptr_eq(d, &q)) {
                distinct.push(q);
            }
        }
        Quiz { questions: distinct }
    }

    pub fn questions(&self) -> &[QuestionRef] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, question: &QuestionRef) -> bool {
        self.questions.iter().any(|q| Rc::ptr_eq(q, question))
    }

    /// Fraction of questions answered correctly.
    ///
    /// Fails only on an empty answer list. A question with no answer at its
    /// position counts as wrong and surplus answers are ignored; use
    /// [`Quiz::check_answers`] first when the counts must agree.
    pub fn score<S: AsRef<str>>(&self, answers: &[S]) -> Result<f64> {
        if answers.is_empty() {
            return Err(QuizError::EmptyAnswers);
        }
        if self.questions.is_empty() {
            return Ok(0.0);
        }

        let correct = self.correct_count(answers);
        let score = correct as f64 / self.questions.len() as f64;
        debug!(correct, total = self.questions.len(), score, "scored quiz");
        Ok(score)
    }

    /// Reject an answer list that is empty or whose length differs from the
    /// number of questions.
    pub fn check_answers<S: AsRef<str>>(&self, answers: &[S]) -> Result<()> {
        if answers.is_empty() {
            return Err(QuizError::EmptyAnswers);
        }
        if answers.len() != self.questions.len() {
            return Err(QuizError::AnswerCountMismatch {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }
        Ok(())
    }

    pub fn correct_count<S: AsRef<str>>(&self, answers: &[S]) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| q.is_correct(answer_at(answers, *i)))
            .count()
    }

    /// Questions whose positional answer is wrong or missing, in quiz order.
    pub fn incorrect_questions<'a, S: AsRef<str>>(
        &'a self,
        answers: &'a [S],
    ) -> impl Iterator<Item = &'a QuestionRef> + 'a {
        self.questions
            .iter()
            .enumerate()
            .filter(move |(i, q)| !q.is_correct(answer_at(answers, *i)))
            .map(|(_, q)| q)
    }
}

fn answer_at<S: AsRef<str>>(answers: &[S], idx: usize) -> Option<&str> {
    answers.get(idx).map(|a| a.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::question::Question;

    fn capitals() -> Vec<QuestionRef> {
        [
            ("France", "Paris"),
            ("Germany", "Berlin"),
            ("Japan", "Tokyo"),
            ("India", "New Delhi"),
            ("Australia", "Canberra"),
        ]
        .into_iter()
        .map(|(country, city)| {
            Rc::new(Question::free_response(format!("What is the capital of {country}?"), city).unwrap())
        })
        .collect()
    }

    const RIGHT: [&str; 5] = ["Paris", "Berlin", "Tokyo", "New Delhi", "Canberra"];

    #[test]
    fn all_right_scores_one_all_wrong_scores_zero() {
        let quiz = Quiz::new(capitals());
        assert_eq!(quiz.score(&RIGHT).unwrap(), 1.0);
        assert_eq!(quiz.score(&["wrong"; 5]).unwrap(), 0.0);
    }

    #[test]
    fn partial_score_is_a_fraction() {
        let quiz = Quiz::new(capitals());
        let answers = ["paris", "bonn", "TOKYO", "Mumbai", " canberra "];
        assert!((quiz.score(&answers).unwrap() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn empty_answers_fail() {
        let quiz = Quiz::new(capitals());
        let none: [&str; 0] = [];
        assert!(matches!(quiz.score(&none), Err(QuizError::EmptyAnswers)));
        assert!(matches!(quiz.check_answers(&none), Err(QuizError::EmptyAnswers)));
    }

    #[test]
    fn score_tolerates_short_answer_lists_but_check_does_not() {
        let quiz = Quiz::new(capitals());
        let short = ["Paris", "Berlin"];
        assert!((quiz.score(&short).unwrap() - 0.4).abs() < 1e-9);
        assert!(matches!(
            quiz.check_answers(&short),
            Err(QuizError::AnswerCountMismatch { expected: 5, actual: 2 })
        ));
        assert!(quiz.check_answers(&RIGHT).is_ok());
    }

    #[test]
    fn repeated_handles_are_dropped() {
        let qs = capitals();
        let quiz = Quiz::new([qs[0].clone(), qs[1].clone(), qs[0].clone()]);
        assert_eq!(quiz.len(), 2);
        assert!(quiz.contains(&qs[0]));
        assert!(!quiz.contains(&qs[2]));
    }

    #[test]
    fn incorrect_questions_follow_quiz_order() {
        let qs = capitals();
        let quiz = Quiz::new(qs.clone());
        let answers = ["Paris", "wrong", "Tokyo", "wrong"];
        let missed: Vec<_> = quiz.incorrect_questions(&answers).collect();
        assert_eq!(missed.len(), 3);
        assert!(Rc::ptr_eq(missed[0], &qs[1]));
        assert!(Rc::ptr_eq(missed[1], &qs[3]));
        // No answer at position 4.
        assert!(Rc::ptr_eq(missed[2], &qs[4]));
    }
}
