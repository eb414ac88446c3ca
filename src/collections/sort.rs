//! Stable sorting by a derived key.

use std::cmp::Ordering;

use serde_json::Value;

use crate::types::{Collection, Lookup};

/// Total ordering used when sorting by a named property.
///
/// Implemented for the primitive types and for JSON values, which have no `Ord` of their own.
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! natural_order_via_ord {
    ($($t:ty),*) => {
        $(impl NaturalOrder for $t {
            fn natural_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

natural_order_via_ord!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String
);

impl NaturalOrder for f32 {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl NaturalOrder for f64 {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: NaturalOrder + ?Sized> NaturalOrder for &T {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        (**self).natural_cmp(*other)
    }
}

/// JSON values order by kind first (null, bool, number, string, array, object), then by value
/// for scalars. Arrays and objects compare equal to others of the same kind.
impl NaturalOrder for Value {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Number(_) => 2,
                Value::String(_) => 3,
                Value::Array(_) => 4,
                Value::Object(_) => 5,
            }
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

/// Returns the items sorted by `key_fn(item)`, compared with [`NaturalOrder`].
///
/// Items with equal keys keep their input order.
pub fn sort_by<C, K, F>(collection: &C, mut key_fn: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: NaturalOrder,
    F: FnMut(&C::Item) -> K,
{
    let mut keyed: Vec<(K, &C::Item)> = collection
        .values()
        .map(|item| (key_fn(item), item))
        .collect();
    keyed.sort_by(|a, b| a.0.natural_cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Returns the items sorted by the property named `key`, using [`NaturalOrder`].
///
/// The sort is stable. Items without the property sort after all items that have it.
pub fn sort_by_property<C, Q>(collection: &C, key: &Q) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Lookup<Q> + Clone,
    <C::Item as Lookup<Q>>::Output: NaturalOrder,
    Q: ?Sized,
{
    let mut keyed: Vec<_> = collection
        .values()
        .map(|item| (item.lookup(key), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.natural_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}
