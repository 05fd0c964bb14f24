//! Uniform random selection without replacement.

use crate::error::{QuizError, Result};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Draw `k` distinct elements of `items`, uniformly without replacement.
pub fn sample<'a, T, R>(rng: &mut R, items: &'a [T], k: usize) -> Result<Vec<&'a T>>
where
    R: Rng + ?Sized,
{
    if k > items.len() {
        return Err(QuizError::InsufficientSize {
            requested: k,
            available: items.len(),
        });
    }

    Ok(index::sample(rng, items.len(), k)
        .into_iter()
        .map(|i| &items[i])
        .collect())
}

/// Draw a single element.
pub fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    let mut drawn = sample(rng, items, 1)?;
    drawn.pop().ok_or(QuizError::InsufficientSize {
        requested: 1,
        available: 0,
    })
}

/// Uniform random permutation of `items`.
pub fn shuffle<T, R>(rng: &mut R, items: &[T]) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn sample_returns_k_distinct_members() {
        let items: Vec<u32> = (0..10).collect();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for k in 0..=items.len() {
                let drawn = sample(&mut rng, &items, k).unwrap();
                assert_eq!(drawn.len(), k);
                let distinct: HashSet<_> = drawn.iter().copied().collect();
                assert_eq!(distinct.len(), k);
                assert!(drawn.iter().all(|x| items.contains(x)));
            }
        }
    }

    #[test]
    fn sample_rejects_oversized_request() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = ["a", "b"];
        assert_eq!(
            sample(&mut rng, &items, 3),
            Err(QuizError::InsufficientSize {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn pick_from_empty_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: [&str; 0] = [];
        assert!(pick(&mut rng, &items).is_err());
    }

    #[test]
    fn pick_reaches_every_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ["a", "b", "c"];
        let seen: HashSet<_> = (0..200).map(|_| *pick(&mut rng, &items).unwrap()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = vec!["a", "b", "c", "d", "e"];
        let mut shuffled = shuffle(&mut rng, &items);
        shuffled.sort();
        assert_eq!(shuffled, items);
    }
}
