//! Random permutation of a sequence.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniformly shuffled copy of `seq`, using the thread-local RNG.
///
/// The input is not modified.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Like [`shuffle`], but draws from the given RNG (useful for reproducible output).
///
/// Uses the decreasing-bound Fisher–Yates shuffle, so every permutation is equally likely.
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = seq.to_vec();
    copy.shuffle(rng);
    copy
}

#[cfg(test)]
mod tests {
    use super::{shuffle, shuffle_with};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_returns_a_permutation() {
        let input: Vec<i32> = (0..50).collect();
        let mut out = shuffle(&input);
        assert_eq!(out.len(), input.len());
        out.sort();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffle_does_not_mutate_input() {
        let input = vec![4, 5, 6];
        let _ = shuffle(&input);
        assert_eq!(input, vec![4, 5, 6]);
    }

    #[test]
    fn shuffle_keeps_duplicates() {
        let input = vec![1, 1, 2, 2, 2];
        let mut out = shuffle(&input);
        out.sort();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffle_with_seed_is_reproducible() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffle_with(&input, &mut StdRng::seed_from_u64(7));
        let b = shuffle_with(&input, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_empty_and_single() {
        assert!(shuffle::<i32>(&[]).is_empty());
        assert_eq!(shuffle(&[9]), vec![9]);
    }

    #[test]
    fn every_element_lands_in_every_position_about_equally() {
        const N: usize = 4;
        const TRIALS: usize = 40_000;
        let input: Vec<usize> = (0..N).collect();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [[0usize; N]; N];

        for _ in 0..TRIALS {
            for (pos, value) in shuffle_with(&input, &mut rng).into_iter().enumerate() {
                counts[value][pos] += 1;
            }
        }

        let expected = TRIALS / N;
        for row in &counts {
            for &count in row {
                assert!(
                    count.abs_diff(expected) < expected / 10,
                    "count {count} too far from {expected}"
                );
            }
        }
    }
}
