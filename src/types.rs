//! Capability traits describing the shapes the helpers operate on.
//!
//! Instead of accepting "anything array-like or object-like", each helper states which
//! capability it needs:
//!
//! - [`Collection`]: ordered sequences (`[T]`, `Vec<T>`) and keyed mappings (`HashMap`,
//!   `BTreeMap`, `serde_json::Map`) that can be walked entry by entry.
//! - [`Truthy`]: values that have a truthiness, used when no predicate is supplied.
//! - [`Lookup`]: read access to a named or indexed property (`pluck`, `sort_by_property`).
//! - [`KeyedMap`]: mutable keyed mappings that can be merged (`extend`, `defaults`).
//! - [`Methods`]: items that expose callable methods by name (`invoke`).

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{UnderbarError, UnderbarResult};

/// Something that can be walked entry by entry.
///
/// Ordered sequences yield their index as the key, in index order. Keyed mappings yield their
/// keys in whatever order the mapping iterates; callers must not rely on it for `HashMap`.
pub trait Collection {
    /// Element type.
    type Item;
    /// Key type passed alongside each element.
    type Key<'a>
    where
        Self: 'a;

    /// Iterate `(key, item)` pairs.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)>;

    /// Iterate items only.
    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, v)| v)
    }

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn len(&self) -> usize {
        Map::len(self)
    }
}

/// Truthiness, used by the predicate-less forms of `every` and `some`.
///
/// Numbers are truthy when non-zero (and, for floats, not NaN), strings when non-empty,
/// `Option` when it holds a truthy value. JSON values follow JavaScript rules: `null`,
/// `false`, `0`, and `""` are falsy; arrays and objects are always truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Read access to a property of an item by key.
pub trait Lookup<Q: ?Sized> {
    /// Property value type.
    type Output;

    /// Returns the property stored under `key`, if present.
    fn lookup(&self, key: &Q) -> Option<&Self::Output>;
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl Lookup<str> for Map<String, Value> {
    type Output = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl Lookup<str> for Value {
    type Output = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl Lookup<usize> for Value {
    type Output = Value;

    fn lookup(&self, key: &usize) -> Option<&Value> {
        self.get(*key)
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Output = T;

    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Lookup<usize> for [T] {
    type Output = T;

    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

/// A mutable keyed mapping that can be merged into.
pub trait KeyedMap {
    type Key;
    type Value;

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Inserts or overwrites `key`.
    fn put(&mut self, key: Self::Key, value: Self::Value);

    /// Iterate all key/value pairs.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> KeyedMap for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> KeyedMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl KeyedMap for Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn contains(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: String, value: Value) {
        let _ = self.insert(key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.iter()
    }
}

/// Items that expose methods callable by name.
///
/// This is the named half of [`crate::collections::Invocation`]: rather than inspecting an
/// item at runtime, the item type declares which names it answers to.
pub trait Methods<A: ?Sized> {
    /// Return type shared by all methods.
    type Output;

    /// Call the method called `name` with `args`.
    ///
    /// Implementations return [`UnderbarError::UnknownMethod`] for names they do not provide.
    fn call_method(&self, name: &str, args: &A) -> UnderbarResult<Self::Output>;
}

impl<T, A> Methods<A> for &T
where
    T: Methods<A> + ?Sized,
    A: ?Sized,
{
    type Output = T::Output;

    fn call_method(&self, name: &str, args: &A) -> UnderbarResult<Self::Output> {
        (**self).call_method(name, args)
    }
}

/// String methods: `to_uppercase`, `to_lowercase`, `trim`, `reverse`.
impl Methods<()> for str {
    type Output = String;

    fn call_method(&self, name: &str, _args: &()) -> UnderbarResult<String> {
        match name {
            "to_uppercase" => Ok(self.to_uppercase()),
            "to_lowercase" => Ok(self.to_lowercase()),
            "trim" => Ok(self.trim().to_string()),
            "reverse" => Ok(self.chars().rev().collect()),
            other => Err(UnderbarError::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

impl Methods<()> for String {
    type Output = String;

    fn call_method(&self, name: &str, args: &()) -> UnderbarResult<String> {
        self.as_str().call_method(name, args)
    }
}

/// An arbitrarily nested list, the input shape of [`crate::collections::flatten`].
///
/// Deserializes from plain JSON: `[1, [2, [3]]]` becomes
/// `List([Item(1), List([Item(2), List([Item(3)])])])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A single element.
    Item(T),
    /// A nested list of elements or further lists.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build a list node.
    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, KeyedMap, Lookup, Methods, Nested, Truthy};
    use crate::error::UnderbarError;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn sequence_entries_are_index_ordered() {
        let v = vec!["a", "b", "c"];
        let entries: Vec<_> = v.entries().map(|(i, s)| (i, *s)).collect();
        assert_eq!(entries, vec![(0, "a"), (1, "b"), (2, "c")]);
        assert_eq!(Collection::len(&v), 3);
        assert!(Collection::is_empty(&Vec::<i32>::new()));
    }

    #[test]
    fn keyed_entries_yield_keys() {
        let m = BTreeMap::from([("x", 1), ("y", 2)]);
        let entries: Vec<_> = m.entries().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("x", 1), ("y", 2)]);

        let obj = json!({"a": 1}).as_object().cloned().unwrap();
        let keys: Vec<_> = obj.entries().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["a".to_string()]);
    }

    #[test]
    fn truthiness_follows_documented_rules() {
        assert!(1.is_truthy());
        assert!(!0u8.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!("x".is_truthy());
        assert!(!None::<bool>.is_truthy());
        assert!(!Some(false).is_truthy());
        assert!(Some(3).is_truthy());
        assert!(Vec::<i32>::new().is_truthy());

        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(!json!("").is_truthy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
        assert!(json!(-1.5).is_truthy());
    }

    #[test]
    fn lookup_by_name_and_index() {
        let m: HashMap<String, i32> = HashMap::from([("age".to_string(), 40)]);
        assert_eq!(m.lookup("age"), Some(&40));
        assert_eq!(m.lookup("name"), None);

        let person = json!({"name": "moe"});
        assert_eq!(Lookup::<str>::lookup(&person, "name"), Some(&json!("moe")));
        assert_eq!(Lookup::<str>::lookup(&json!(5), "name"), None);

        let row = vec![10, 20];
        assert_eq!(row.lookup(&1), Some(&20));
        assert_eq!(row.lookup(&2), None);
    }

    #[test]
    fn keyed_map_put_overwrites() {
        let mut m = BTreeMap::new();
        m.put("a", 1);
        m.put("a", 2);
        assert!(m.contains(&"a"));
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(&"a", &2)]);
    }

    #[test]
    fn string_methods_resolve_by_name() {
        assert_eq!("Moe".call_method("to_uppercase", &()).unwrap(), "MOE");
        assert_eq!("abc".to_string().call_method("reverse", &()).unwrap(), "cba");
        let err = "abc".call_method("explode", &()).unwrap_err();
        assert!(matches!(err, UnderbarError::UnknownMethod { name } if name == "explode"));
    }

    #[test]
    fn nested_deserializes_from_json() {
        let n: Nested<i64> = serde_json::from_value(json!([1, [2, [3]]])).unwrap();
        assert_eq!(
            n,
            Nested::list([
                Nested::Item(1),
                Nested::list([Nested::Item(2), Nested::list([Nested::Item(3)])]),
            ])
        );
    }
}
