//! Element selection: [`filter`], [`reject`], and [`uniq`].

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::Collection;

/// Returns the items for which `predicate` returns `true`, in iteration order.
///
/// The input is left unchanged; kept items are cloned.
pub fn filter<C, F>(collection: &C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> bool,
{
    collection
        .values()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// Returns the items for which `predicate` returns `false`: the complement of [`filter`].
pub fn reject<C, F>(collection: &C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> bool,
{
    filter(collection, |item| !predicate(item))
}

/// Returns each distinct value once, in order of first appearance.
///
/// Runs in O(n) using a set of already-seen values.
pub fn uniq<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(seq.len());
    seq.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{filter, reject, uniq};
    use std::collections::HashMap;

    fn is_even(n: &i32) -> bool {
        n % 2 == 0
    }

    #[test]
    fn filter_keeps_matching_items_in_order() {
        let nums = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(filter(&nums, is_even), vec![2, 4, 6]);
        // Original unchanged
        assert_eq!(nums, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reject_keeps_non_matching_items() {
        assert_eq!(reject(&[1, 2, 3, 4, 5, 6][..], is_even), vec![1, 3, 5]);
    }

    #[test]
    fn filter_and_reject_partition_the_input() {
        let nums: Vec<i32> = (0..37).map(|n| n * 7 % 11).collect();
        let kept = filter(&nums, |n| *n > 4);
        let dropped = reject(&nums, |n| *n > 4);
        assert_eq!(kept.len() + dropped.len(), nums.len());
        assert!(kept.iter().all(|n| *n > 4));
        assert!(dropped.iter().all(|n| *n <= 4));
    }

    #[test]
    fn filter_works_on_mapping_values() {
        let ages = HashMap::from([("moe", 40), ("larry", 50), ("curly", 60)]);
        let mut old = filter(&ages, |age| *age >= 50);
        old.sort();
        assert_eq!(old, vec![50, 60]);
    }

    #[test]
    fn filter_can_return_empty() {
        assert!(filter(&[1, 3, 5][..], is_even).is_empty());
    }

    #[test]
    fn uniq_preserves_first_occurrence_order() {
        assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
        assert_eq!(uniq(&["b", "a", "b"]), vec!["b", "a"]);
        assert!(uniq::<i32>(&[]).is_empty());
    }

    #[test]
    fn uniq_does_not_mutate_input() {
        let input = vec![3, 3, 3];
        assert_eq!(uniq(&input), vec![3]);
        assert_eq!(input, vec![3, 3, 3]);
    }
}
