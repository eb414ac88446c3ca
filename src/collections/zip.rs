//! Index-aligned grouping of several sequences.

/// Groups the elements at each index across all `seqs`.
///
/// The result is as long as the longest input; positions past the end of a shorter input are
/// `None`.
pub fn zip<T, S>(seqs: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = seqs.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);
    (0..longest)
        .map(|i| seqs.iter().map(|s| s.as_ref().get(i).cloned()).collect())
        .collect()
}

/// Two-sequence [`zip`] for sequences with different element types.
pub fn zip_pair<A, B>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)>
where
    A: Clone,
    B: Clone,
{
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|i| (left.get(i).cloned(), right.get(i).cloned()))
        .collect()
}
