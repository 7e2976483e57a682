use std::rc::Rc;

use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    error::Result,
    question::QuestionRef,
    quiz::Quiz,
    sampler,
};

/// Builds quizzes by sampling a question pool without replacement.
///
/// With `rng_seed: Some(_)` the sequence of quizzes is reproducible; with
/// `None` the generator draws from OS entropy.
#[derive(Debug, Clone)]
pub struct QuizGenerator {
    rng: StdRng,
}

impl QuizGenerator {
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        QuizGenerator { rng }
    }

    /// Draw `n` distinct questions from `pool`.
    ///
    /// Handles repeated in the pool count once. Fails if `n` exceeds the
    /// number of distinct questions.
    pub fn sample(&mut self, pool: &[QuestionRef], n: usize) -> Result<Vec<QuestionRef>> {
        let distinct = distinct_questions(pool);
        sampler::sample(&mut self.rng, &distinct, n)
    }

    /// Build a quiz of exactly `n` distinct questions drawn from `pool`.
    pub fn create_quiz(&mut self, pool: &[QuestionRef], n: usize) -> Result<Quiz> {
        let picked = self.sample(pool, n)?;
        debug!(requested = n, pool = pool.len(), "generated quiz");
        Ok(Quiz::new(picked))
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        QuizGenerator::new(None)
    }
}

/// Build a quiz of `n` questions from `pool` with a fresh entropy-seeded RNG.
pub fn create_quiz(pool: &[QuestionRef], n: usize) -> Result<Quiz> {
    QuizGenerator::default().create_quiz(pool, n)
}

fn distinct_questions(pool: &[QuestionRef]) -> Vec<QuestionRef> {
    let mut distinct: Vec<QuestionRef> = Vec::with_capacity(pool.len());
    for q in pool {
        if !distinct.iter().any(|d| Rc::ptr_eq(d, q)) {
            distinct.push(Rc::clone(q));
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::error::QuizError;
    use crate::quiz_engine::question::Question;

    fn pool(n: usize) -> Vec<QuestionRef> {
        (0..n)
            .map(|i| Rc::new(Question::free_response(format!("Question {i}?"), &format!("answer {i}")).unwrap()))
            .collect()
    }

    #[test]
    fn quiz_has_exactly_n_distinct_pool_questions() {
        let pool = pool(10);
        for n in 1..=10 {
            let quiz = create_quiz(&pool, n).unwrap();
            assert_eq!(quiz.len(), n);
            for q in quiz.questions() {
                assert!(pool.iter().any(|p| Rc::ptr_eq(p, q)), "question not from pool");
            }
        }
    }

    #[test]
    fn oversized_request_is_rejected() {
        assert!(matches!(
            create_quiz(&pool(4), 5),
            Err(QuizError::PoolTooSmall { requested: 5, available: 4 })
        ));
    }

    #[test]
    fn repeated_pool_handles_count_once() {
        let base = pool(3);
        let doubled: Vec<_> = base.iter().chain(base.iter()).cloned().collect();
        assert_eq!(create_quiz(&doubled, 3).unwrap().len(), 3);
        assert!(matches!(
            create_quiz(&doubled, 4),
            Err(QuizError::PoolTooSmall { requested: 4, available: 3 })
        ));
    }

    #[test]
    fn seeded_generators_agree() {
        let pool = pool(10);
        let texts = |seed| {
            let mut generator = QuizGenerator::new(Some(seed));
            let quiz = generator.create_quiz(&pool, 5).unwrap();
            quiz.questions().iter().map(|q| q.text().to_string()).collect::<Vec<_>>()
        };
        assert_eq!(texts(12345), texts(12345));
    }
}
