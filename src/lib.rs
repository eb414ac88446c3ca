//! `underbar` is a small library of collection utilities: the familiar
//! map/filter/reduce family, deduplication and set operations, object merging, and function
//! decorators such as [`functions::once`] and [`functions::memoize`].
//!
//! ## What the helpers accept
//!
//! Instead of guessing whether an argument is "array-like" or "object-like", each helper
//! asks for a capability from [`types`]:
//!
//! - [`types::Collection`]: `[T]`, `Vec<T>`, `HashMap`, `BTreeMap`, `serde_json::Map`
//! - [`types::Truthy`]: for the predicate-less [`collections::every_truthy`] /
//!   [`collections::some_truthy`]
//! - [`types::Lookup`]: named or indexed properties, for [`collections::pluck`] and
//!   [`collections::sort_by_property`]
//! - [`types::KeyedMap`]: mergeable maps, for [`objects::extend`] / [`objects::defaults`]
//! - [`types::Methods`]: methods callable by name, for [`collections::invoke`]
//!
//! Equality is always Rust's `PartialEq`: there is no type coercion.
//!
//! ## Quick example
//!
//! ```rust
//! use underbar::collections::{first, pluck, reduce_from_first, uniq};
//! use serde_json::json;
//!
//! let people = vec![
//!     json!({"name": "moe", "age": 40}),
//!     json!({"name": "larry", "age": 50}),
//! ];
//! assert_eq!(pluck(&people, "name"), vec![Some(json!("moe")), Some(json!("larry"))]);
//!
//! assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
//! assert_eq!(first(&[7, 8]), Some(&7));
//! assert_eq!(reduce_from_first(&vec![1, 2, 3], |a, b| a + b).unwrap(), 6);
//! ```
//!
//! ### Edge cases
//!
//! - Empty input: `first`/`last` return `None`, `every` is `true`, `some` is `false`,
//!   `reduce` returns its initial value.
//! - [`collections::reduce_from_first`] on an empty collection returns
//!   [`UnderbarError::EmptyReduce`].
//! - A missing key in [`collections::pluck`] yields `None` at that position.
//! - [`collections::invoke`] with an unknown method returns [`UnderbarError::UnknownMethod`].
//!
//! ## Modules
//!
//! - [`collections`]: sequence and mapping helpers
//! - [`objects`]: `extend` / `defaults`
//! - [`functions`]: `once`, `memoize`, `delay`, `throttle`, plus observer/metrics hooks
//! - [`types`]: capability traits
//! - [`error`]: error type

pub mod collections;
pub mod error;
pub mod functions;
pub mod objects;
pub mod types;

pub use error::{UnderbarError, UnderbarResult};
