use std::collections::HashSet;

use rand::Rng;

use crate::quiz_engine::error::{QuizError, Result};

/// Pick `n` distinct positions in `0..pool_len`, uniformly and without
/// replacement.
///
/// Draws a uniform index and keeps it only if it has not been drawn yet, until
/// `n` unique indices are collected. Indices come back in draw order.
pub fn sample_indices<R: Rng>(rng: &mut R, pool_len: usize, n: usize) -> Result<Vec<usize>> {
    if n > pool_len {
        return Err(QuizError::PoolTooSmall { requested: n, available: pool_len });
    }

    let mut seen = HashSet::with_capacity(n);
    let mut picked = Vec::with_capacity(n);
    while picked.len() < n {
        let idx = rng.gen_range(0..pool_len);
        if seen.insert(idx) {
            picked.push(idx);
        }
    }
    Ok(picked)
}

/// Draw `n` distinct elements of `pool` (distinct by position).
pub fn sample<R: Rng, T: Clone>(rng: &mut R, pool: &[T], n: usize) -> Result<Vec<T>> {
    let picked = sample_indices(rng, pool.len(), n)?;
    Ok(picked.into_iter().map(|i| pool[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_are_unique_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..=10 {
            let picked = sample_indices(&mut rng, 10, n).unwrap();
            assert_eq!(picked.len(), n);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), n, "duplicate index in {picked:?}");
            assert!(picked.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn oversized_request_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_indices(&mut rng, 3, 4),
            Err(QuizError::PoolTooSmall { requested: 4, available: 3 })
        ));
    }

    #[test]
    fn empty_request_from_empty_pool_is_fine() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked: Vec<u8> = sample(&mut rng, &[], 0).unwrap();
        assert!(picked.is_empty());
    }

    #[test]
    fn same_seed_same_sample() {
        let draw = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample(&mut rng, &["a", "b", "c", "d", "e", "f"], 3).unwrap()
        };
        assert_eq!(draw(99), draw(99));
    }

    #[test]
    fn every_position_gets_drawn() {
        // Uniformity smoke test: over many single draws each slot shows up.
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = [0usize; 5];
        for _ in 0..1_000 {
            hits[sample_indices(&mut rng, 5, 1).unwrap()[0]] += 1;
        }
        assert!(hits.iter().all(|&h| h > 100), "skewed draws: {hits:?}");
    }
}
