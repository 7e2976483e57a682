//! In-memory store of everything the quiz system knows about each student.
//!
//! The store is owned by [`QuizSystem`](crate::QuizSystem) and lives as long as
//! it does. It is not synchronised: callers sharing a system across threads
//! must serialise access themselves.

use std::collections::HashMap;
use std::rc::Rc;

use crate::quiz_engine::{
    error::Result,
    models::Student,
    question::QuestionRef,
    quiz::Quiz,
    statistics::StudentStatistics,
};

/// One submitted quiz: the quiz as it was and the answers given, in order.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    quiz: Quiz,
    answers: Vec<String>,
}

impl QuizAttempt {
    pub fn new(quiz: Quiz, answers: Vec<String>) -> Self {
        QuizAttempt { quiz, answers }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn score(&self) -> f64 {
        if self.quiz.is_empty() {
            return 0.0;
        }
        self.quiz.correct_count(&self.answers) as f64 / self.quiz.len() as f64
    }
}

/// Attempt counters, history and statistics for one student.
#[derive(Debug, Clone, Default)]
pub struct StudentEntry {
    quiz_attempts: u32,
    revision_attempts: u32,
    history: Vec<QuizAttempt>,
    statistics: StudentStatistics,
}

impl StudentEntry {
    pub fn quiz_attempts(&self) -> u32 {
        self.quiz_attempts
    }

    pub fn revision_attempts(&self) -> u32 {
        self.revision_attempts
    }

    pub fn history(&self) -> &[QuizAttempt] {
        &self.history
    }

    pub fn statistics(&self) -> &StudentStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut StudentStatistics {
        &mut self.statistics
    }

    /// Count a regular attempt, keep it in the history and record its score.
    ///
    /// Nothing changes if the score is rejected.
    pub fn record_quiz(&mut self, attempt: QuizAttempt, score: f64) -> Result<()> {
        self.statistics.add_quiz_score(score)?;
        self.quiz_attempts += 1;
        self.history.push(attempt);
        Ok(())
    }

    pub fn record_revision(&mut self, score: f64) {
        self.statistics.add_revision_score(score);
        self.revision_attempts += 1;
    }

    /// Every question missed in any recorded attempt, once each, in the order
    /// first missed. The same questions are added to the statistics record.
    pub fn collect_incorrect(&mut self) -> Vec<QuestionRef> {
        let mut missed: Vec<QuestionRef> = Vec::new();
        for attempt in &self.history {
            self.statistics.add_incorrect_questions(&attempt.quiz, &attempt.answers);
            for q in attempt.quiz.incorrect_questions(&attempt.answers) {
                if !missed.iter().any(|m| Rc::ptr_eq(m, q)) {
                    missed.push(Rc::clone(q));
                }
            }
        }
        missed
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentRepository {
    entries: HashMap<Student, StudentEntry>,
}

impl StudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, student: &Student) -> Option<&StudentEntry> {
        self.entries.get(student)
    }

    pub fn get_mut(&mut self, student: &Student) -> Option<&mut StudentEntry> {
        self.entries.get_mut(student)
    }

    /// The student's entry, created empty on first use.
    pub fn entry(&mut self, student: &Student) -> &mut StudentEntry {
        self.entries.entry(student.clone()).or_default()
    }

    pub fn quiz_attempts(&self, student: &Student) -> u32 {
        self.get(student).map_or(0, StudentEntry::quiz_attempts)
    }

    pub fn revision_attempts(&self, student: &Student) -> u32 {
        self.get(student).map_or(0, StudentEntry::revision_attempts)
    }

    pub fn history(&self, student: &Student) -> &[QuizAttempt] {
        self.get(student).map(StudentEntry::history).unwrap_or_default()
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
