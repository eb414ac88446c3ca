//! Folding and whole-collection tests.

use crate::error::{UnderbarError, UnderbarResult};
use crate::types::{Collection, Truthy};

/// Left-folds the collection into `initial` by calling `iterator(accumulator, item)`.
///
/// An empty collection returns `initial` unchanged.
pub fn reduce<C, A, F>(collection: &C, mut iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection
        .values()
        .fold(initial, |acc, item| iterator(acc, item))
}

/// Left-folds the collection using its first item as the initial accumulator.
///
/// Returns [`UnderbarError::EmptyReduce`] if the collection is empty, since there is no value
/// to seed the fold with.
pub fn reduce_from_first<C, F>(collection: &C, mut iterator: F) -> UnderbarResult<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut values = collection.values();
    let seed = values.next().ok_or(UnderbarError::EmptyReduce)?.clone();
    Ok(values.fold(seed, |acc, item| iterator(acc, item)))
}

/// Returns `true` if any item equals `target`.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    collection.values().any(|item| item == target)
}

/// Returns `true` if `predicate` holds for every item. Vacuously `true` when empty.
pub fn every<C, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    collection.values().all(|item| predicate(item))
}

/// Returns `true` if every item is truthy. Vacuously `true` when empty.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Returns `true` if `predicate` holds for at least one item. `false` when empty.
pub fn some<C, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    !every(collection, |item| !predicate(item))
}

/// Returns `true` if at least one item is truthy. `false` when empty.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}
