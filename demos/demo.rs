//! End-to-end walk through the quiz lifecycle.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=quiz_revision=debug` to see the engine's tracing output.
//!
//! 1. **Regular quizzes**: a student takes two quizzes from the built-in pool,
//!    answering with the five capitals in order, then all wrong.
//! 2. **Attempt limit**: a third quiz is refused.
//! 3. **Revision**: a revision quiz is built from every question missed and
//!    taken twice, the second time with the right answers.
//! 4. **Statistics**: the text report and the JSON snapshot.

use chrono::NaiveDate;
use quiz_revision::{Quiz, QuizConfig, QuizSystem, Student};

/// Print a quiz with a marker per question showing whether `answers` got it right.
fn print_attempt(label: &str, quiz: &Quiz, answers: &[String]) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {label}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, q) in quiz.questions().iter().enumerate() {
        let given = answers.get(i).map(String::as_str).unwrap_or("");
        let marker = if q.is_correct(given) { "✓" } else { "✗" };
        println!("  [{marker}] {q}");
        println!("        answered: {given:?}  expected: {}", q.correct_answers().join(", "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = QuizConfig { rng_seed: Some(2024), ..QuizConfig::default() };
    let mut system = match QuizSystem::with_config(config) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let dob = NaiveDate::from_ymd_opt(1995, 2, 1).expect("valid calendar date");
    let student = Student::new("John", "Doe", dob);

    let capitals: Vec<String> = ["Paris", "Berlin", "Tokyo", "New Delhi", "Canberra"]
        .into_iter()
        .map(String::from)
        .collect();
    let wrong = vec!["wrong".to_string(); 5];

    for (label, answers) in [("Quiz 1: the capitals, in order", &capitals), ("Quiz 2: all wrong", &wrong)] {
        let quiz = match system.generate_quiz(5) {
            Ok(quiz) => quiz,
            Err(e) => {
                eprintln!("could not generate quiz: {e}");
                return;
            }
        };
        print_attempt(label, &quiz, answers);
        match system.take_quiz(&student, &quiz, answers) {
            Ok(score) => println!("  score: {score:.2}\n"),
            Err(e) => println!("  rejected: {e}\n"),
        }
    }

    if let Ok(quiz) = system.generate_quiz(5) {
        if let Err(e) = system.take_quiz(&student, &quiz, &capitals) {
            println!("Third quiz refused: {e}\n");
        }
    }

    match system.generate_revision_quiz(&student) {
        Ok(Some(revision)) => {
            print_attempt("Revision 1: all wrong", &revision, &wrong);
            if let Ok(score) = system.take_revision_quiz(&student, &revision, &wrong) {
                println!("  score: {score:.2}\n");
            }

            let right: Vec<String> = revision
                .questions()
                .iter()
                .map(|q| q.correct_answers().join(", "))
                .collect();
            print_attempt("Revision 2: all right", &revision, &right);
            if let Ok(score) = system.take_revision_quiz(&student, &revision, &right) {
                println!("  score: {score:.2}\n");
            }
        }
        Ok(None) => println!("Nothing to revise.\n"),
        Err(e) => println!("Revision failed: {e}\n"),
    }

    println!("{}\n", system.generate_statistics(&student));
    if let Some(snapshot) = system.statistics_json(&student) {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("could not render snapshot: {e}"),
        }
    }
}
