//! Helpers over ordered sequences and keyed mappings.
//!
//! Helpers that only make sense positionally (`first`, `index_of`, `uniq`, `shuffle`, `zip`,
//! set operations) take slices. Helpers that only need to visit items (`each`, `filter`, `map`,
//! `reduce`, `every`, ...) accept any [`crate::types::Collection`], so the same call works on a
//! `Vec`, a `HashMap`, a `BTreeMap`, or a JSON object.
//!
//! Inputs are never modified; helpers that return items clone them.
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use underbar::collections::{filter, map, reduce};
//!
//! let scores = vec![72, 95, 88, 40];
//! let passing = filter(&scores, |s| *s >= 50);
//! let curved = map(&passing, |s| s + 5);
//! let total = reduce(&curved, |acc, s| acc + s, 0);
//! assert_eq!(total, 77 + 100 + 93);
//! ```
//!
//! ## Example: keyed mappings
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::collections::{each, every};
//!
//! let stock = BTreeMap::from([("apples", 3), ("pears", 0)]);
//! let mut lines = Vec::new();
//! each(&stock, |count, fruit, _| lines.push(format!("{fruit}={count}")));
//! assert_eq!(lines, vec!["apples=3", "pears=0"]);
//! assert!(!every(&stock, |count| *count > 0));
//! ```

pub mod access;
pub mod filter;
pub mod flatten;
pub mod iterate;
pub mod map;
pub mod reduce;
pub mod set;
pub mod shuffle;
pub mod sort;
pub mod zip;

pub use access::{first, first_n, identity, last, last_n};
pub use filter::{filter, reject, uniq};
pub use flatten::{flatten, flatten_json};
pub use iterate::{each, index_of};
pub use map::{invoke, map, pluck, Invocation};
pub use reduce::{contains, every, every_truthy, reduce, reduce_from_first, some, some_truthy};
pub use set::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_property, NaturalOrder};
pub use zip::{zip, zip_pair};
