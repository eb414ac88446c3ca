//! Set-like operations over sequences.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the values present in every input, deduplicated, in the order of the first input.
///
/// With no inputs, the result is empty.
pub fn intersection<T, S>(seqs: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let Some((first, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    let others: Vec<HashSet<&T>> = rest.iter().map(|s| s.as_ref().iter().collect()).collect();
    let mut seen = HashSet::new();
    first
        .as_ref()
        .iter()
        .filter(|item| others.iter().all(|set| set.contains(*item)) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns the items of `seq` that appear in none of `others`.
///
/// Order and duplicates of `seq` are preserved.
pub fn difference<T, S>(seq: &[T], others: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let excluded: HashSet<&T> = others.iter().flat_map(|s| s.as_ref().iter()).collect();
    seq.iter()
        .filter(|item| !excluded.contains(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{difference, intersection};

    #[test]
    fn intersection_of_several_sequences() {
        let out = intersection(&[vec!["moe", "curly", "larry"], vec!["moe", "groucho"], vec!["moe"]]);
        assert_eq!(out, vec!["moe"]);
    }

    #[test]
    fn intersection_dedups_and_keeps_first_order() {
        let out = intersection(&[vec![3, 1, 3, 2, 1], vec![1, 2, 3]]);
        assert_eq!(out, vec![3, 1, 2]);
    }

    #[test]
    fn intersection_edge_cases() {
        assert!(intersection::<i32, Vec<i32>>(&[]).is_empty());
        assert_eq!(intersection(&[vec![2, 2, 1]]), vec![2, 1]);
        assert!(intersection(&[vec![1], Vec::new()]).is_empty());
    }

    #[test]
    fn difference_removes_values_in_others() {
        let out = difference(&[1, 2, 3, 4, 5, 2], &[vec![5, 2, 10], vec![4]]);
        assert_eq!(out, vec![1, 3]);
    }

    #[test]
    fn difference_with_no_others_is_a_copy() {
        let out = difference::<i32, Vec<i32>>(&[1, 1, 2], &[]);
        assert_eq!(out, vec![1, 1, 2]);
    }
}
