use serde_json::{json, Value};

use crate::quiz_engine::{models::Student, statistics::StudentStatistics};

/// Render one student's statistics as a JSON object for dashboards and
/// exports.
///
/// Missed questions are listed by text, in the order they were first missed.
pub fn statistics_snapshot(student: &Student, stats: &StudentStatistics) -> Value {
    let incorrect: Vec<&str> = stats.incorrect_questions().iter().map(|q| q.text()).collect();

    json!({
        "student": {
            "name": student.full_name(),
            "date_of_birth": student.date_of_birth,
        },
        "quiz_attempts": stats.number_of_attempts(),
        "revision_attempts": stats.number_of_revisions(),
        "quiz_scores": stats.quiz_scores(),
        "revision_scores": stats.revision_scores(),
        "average_score": stats.quiz_average_score(),
        "verdict": stats.final_verdict().to_string(),
        "incorrect_questions": incorrect,
    })
}
