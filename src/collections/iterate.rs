//! Side-effecting iteration and positional search.

use crate::types::Collection;

/// Calls `iterator(item, key, collection)` once per entry.
///
/// Sequences are visited in index order with `usize` keys; keyed mappings in their own
/// iteration order with borrowed keys. Nothing is returned.
pub fn each<'c, C, F>(collection: &'c C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, C::Key<'c>, &'c C),
{
    for (key, item) in collection.entries() {
        iterator(item, key, collection);
    }
}

/// Returns the index of the first element equal to `target`, or `None` if absent.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

#[cfg(test)]
mod tests {
    use super::{each, index_of};
    use std::collections::BTreeMap;

    #[test]
    fn each_visits_sequence_in_order_with_indices() {
        let letters = vec!["a", "b", "c"];
        let mut seen = Vec::new();
        each(&letters, |item, idx, all| {
            assert_eq!(all.len(), 3);
            seen.push((idx, *item));
        });
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn each_visits_every_key_of_a_mapping() {
        let m = BTreeMap::from([("one", 1), ("two", 2)]);
        let mut seen = Vec::new();
        each(&m, |v, k, _| seen.push((*k, *v)));
        assert_eq!(seen, vec![("one", 1), ("two", 2)]);
    }

    #[test]
    fn each_on_empty_does_nothing() {
        let mut calls = 0;
        each(&Vec::<i32>::new(), |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn index_of_finds_first_match() {
        assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
        assert_eq!(index_of(&[10, 20, 30], &40), None);
        assert_eq!(index_of::<i32>(&[], &1), None);
    }

    #[test]
    fn index_of_uses_strict_equality() {
        let words = ["1", "one"];
        assert_eq!(index_of(&words, &"1"), Some(0));
        assert_eq!(index_of(&[1.0, 2.0], &2.0), Some(1));
    }
}
