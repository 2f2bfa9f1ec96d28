//! This module contains utility functionality shared by the Sudoku and word
//! search pipelines, most importantly the [shuffle] function that drives all
//! randomization in this crate.

use rand::Rng;

use std::collections::HashSet;
use std::hash::Hash;

/// Collects the given values into a vector and puts them in a uniformly
/// random order using a Fisher-Yates shuffle driven by the provided random
/// number generator.
pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len == 0 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// Determines whether the given iterator contains at least two equal elements
/// as defined by the [Eq](std::cmp::Eq) trait. The duplication detection is
/// implemented with a [HashSet](std::collections::HashSet), so it is required
/// that the item type implements the [Hash](std::hash::Hash) trait in a
/// consistent way.
pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|e| !set.insert(e))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn shuffling_uniformly_distributed() {
        // 18000 experiments, 6 options (3!), so if uniformly distributed:
        // p = 1/6, my = 3000, sigma = sqrt(18000 * 1/6 * 5/6) = 50
        // with a probability of the amount being in the range [2600, 3400]
        // is more than 99,9999999999999 %.

        let mut counts = [0; 6];
        let mut rng = rand::thread_rng();

        for _ in 0..18000 {
            let result = shuffle(&mut rng, 1..=3);

            if result == vec![1, 2, 3] {
                counts[0] += 1;
            }
            else if result == vec![1, 3, 2] {
                counts[1] += 1;
            }
            else if result == vec![2, 1, 3] {
                counts[2] += 1;
            }
            else if result == vec![2, 3, 1] {
                counts[3] += 1;
            }
            else if result == vec![3, 1, 2] {
                counts[4] += 1;
            }
            else if result == vec![3, 2, 1] {
                counts[5] += 1;
            }
        }

        for count in counts.iter() {
            assert!(*count >= 2600 && *count <= 3400,
                "Count is not in range [2600, 3400].");
        }
    }

    #[test]
    fn shuffling_empty_iterator_yields_empty_vec() {
        let mut rng = rand::thread_rng();
        let result: Vec<usize> = shuffle(&mut rng, std::iter::empty());
        assert!(result.is_empty());
    }

    #[test]
    fn shuffling_preserves_elements() {
        let mut rng = rand::thread_rng();
        let mut result = shuffle(&mut rng, 1..=10);
        result.sort_unstable();
        assert_eq!((1..=10).collect::<Vec<usize>>(), result);
    }

    #[test]
    fn contains_duplicate_false() {
        let vec = vec![1, 5, 2, 4, 3];
        assert!(!contains_duplicate(vec.iter()));
        assert!(!contains_duplicate(vec.iter().map(|i| i.to_string())));
    }

    #[test]
    fn contains_duplicate_true() {
        let vec = vec![1, 5, 2, 4, 5];
        assert!(contains_duplicate(vec.iter()));
        assert!(contains_duplicate(vec.iter().map(|i| i.to_string())));
    }
}
