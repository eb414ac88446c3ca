//! Element access at either end of a sequence.

/// Returns its argument unchanged.
///
/// Handy as a default transform, e.g. `map(&xs, |x| identity(x.clone()))`.
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns the first element, or `None` if `seq` is empty.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Returns the first `n` elements. If `n` exceeds the length, the whole sequence is returned.
pub fn first_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Returns the last element, or `None` if `seq` is empty.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Returns the last `n` elements. If `n` exceeds the length, the whole sequence is returned.
pub fn last_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[seq.len() - n.min(seq.len())..]
}
