//! Item transformation: [`map`], [`pluck`], and [`invoke`].

use crate::error::UnderbarResult;
use crate::types::{Collection, Lookup, Methods};

/// Returns the results of applying `mapper` to every item, in iteration order.
pub fn map<C, U, F>(collection: &C, mapper: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    collection.values().map(mapper).collect()
}

/// Extracts the property `key` from every item.
///
/// Items that lack the property yield `None` at their position, so the output always has one
/// entry per input item.
pub fn pluck<C, Q>(collection: &C, key: &Q) -> Vec<Option<<C::Item as Lookup<Q>>::Output>>
where
    C: Collection + ?Sized,
    C::Item: Lookup<Q>,
    <C::Item as Lookup<Q>>::Output: Clone,
    Q: ?Sized,
{
    map(collection, |item| item.lookup(key).cloned())
}

/// What [`invoke`] calls on each item.
///
/// Build the named form with [`Invocation::method`], which resolves the name through the
/// item's [`Methods`] impl. The function form places no bound on the item type.
pub enum Invocation<'f, T: ?Sized, A: ?Sized, R> {
    /// Call this function with the item as receiver.
    Function(&'f dyn Fn(&T, &A) -> R),
    /// Call the item's method called `name` through `dispatch`.
    Method {
        name: &'f str,
        dispatch: fn(&T, &str, &A) -> UnderbarResult<R>,
    },
}

impl<'f, T, A, R> Invocation<'f, T, A, R>
where
    T: Methods<A, Output = R> + ?Sized,
    A: ?Sized,
{
    /// Call the method named `name` on every item.
    pub fn method(name: &'f str) -> Self {
        Invocation::Method {
            name,
            dispatch: <T as Methods<A>>::call_method,
        }
    }
}

/// Calls a function or a named method on every item with `args`, collecting the results.
///
/// Returns [`crate::UnderbarError::UnknownMethod`] on the first item that does not provide
/// the requested method. The function form never fails.
pub fn invoke<C, A, R>(
    collection: &C,
    invocation: Invocation<'_, C::Item, A, R>,
    args: &A,
) -> UnderbarResult<Vec<R>>
where
    C: Collection + ?Sized,
    A: ?Sized,
{
    match invocation {
        Invocation::Function(f) => Ok(map(collection, |item| f(item, args))),
        Invocation::Method { name, dispatch } => collection
            .values()
            .map(|item| dispatch(item, name, args))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{invoke, map, pluck, Invocation};
    use crate::error::{UnderbarError, UnderbarResult};
    use crate::types::Methods;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[test]
    fn map_applies_function_in_order() {
        assert_eq!(map(&vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
        assert!(map(&Vec::<i32>::new(), |x| x * 2).is_empty());
    }

    #[test]
    fn map_does_not_mutate_input() {
        let nums = vec![1, 2, 3];
        let _ = map(&nums, |x| x + 1);
        assert_eq!(nums, vec![1, 2, 3]);
    }

    #[test]
    fn map_over_mapping_values() {
        let m = HashMap::from([("a", 1), ("b", 2)]);
        let mut out = map(&m, |v| v * 10);
        out.sort();
        assert_eq!(out, vec![10, 20]);
    }

    #[test]
    fn pluck_json_property() {
        let people: Vec<Value> = vec![
            json!({"name": "moe", "age": 30}),
            json!({"name": "curly", "age": 50}),
        ];
        assert_eq!(
            pluck(&people, "name"),
            vec![Some(json!("moe")), Some(json!("curly"))]
        );
    }

    #[test]
    fn pluck_missing_key_yields_none() {
        let people = vec![json!({"name": "moe"}), json!({"age": 1}), json!(3)];
        assert_eq!(pluck(&people, "name"), vec![Some(json!("moe")), None, None]);
    }

    #[test]
    fn pluck_by_index_from_rows() {
        let rows = vec![vec![1, 2], vec![3], vec![5, 6]];
        assert_eq!(pluck(&rows, &1), vec![Some(2), None, Some(6)]);
    }

    #[test]
    fn invoke_function_variant() {
        let words = vec!["dog".to_string(), "cat".to_string()];
        let suffix: &dyn Fn(&String, &()) -> String = &|w, _| format!("{w}s");
        let out = invoke(&words, Invocation::Function(suffix), &()).unwrap();
        assert_eq!(out, vec!["dogs".to_string(), "cats".to_string()]);
    }

    #[test]
    fn invoke_function_on_plain_items() {
        let add: &dyn Fn(&i32, &i32) -> i32 = &|x, y| x + y;
        let out = invoke(&vec![1, 2, 3], Invocation::Function(add), &10).unwrap();
        assert_eq!(out, vec![11, 12, 13]);

        struct Point {
            x: i32,
            y: i32,
        }
        let points = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
        let scaled: &dyn Fn(&Point, &i32) -> (i32, i32) = &|p, k| (p.x * k, p.y * k);
        assert_eq!(
            invoke(&points, Invocation::Function(scaled), &2).unwrap(),
            vec![(2, 4), (6, 8)]
        );
    }

    #[test]
    fn invoke_method_variant() {
        let words = vec!["dog", "Cat"];
        let out = invoke(&words, Invocation::method("to_uppercase"), &()).unwrap();
        assert_eq!(out, vec!["DOG".to_string(), "CAT".to_string()]);
    }

    #[test]
    fn invoke_unknown_method_is_an_error() {
        let words = vec!["dog"];
        let err = invoke(&words, Invocation::method("bark"), &()).unwrap_err();
        assert!(matches!(err, UnderbarError::UnknownMethod { name } if name == "bark"));
    }

    struct Counter(i64);

    impl Methods<i64> for Counter {
        type Output = i64;

        fn call_method(&self, name: &str, args: &i64) -> UnderbarResult<i64> {
            match name {
                "add" => Ok(self.0 + args),
                "mul" => Ok(self.0 * args),
                other => Err(UnderbarError::UnknownMethod {
                    name: other.to_string(),
                }),
            }
        }
    }

    #[test]
    fn invoke_passes_arguments() {
        let counters = vec![Counter(1), Counter(2)];
        assert_eq!(
            invoke(&counters, Invocation::method("add"), &10).unwrap(),
            vec![11, 12]
        );
        let square: &dyn Fn(&Counter, &i64) -> i64 = &|c, _| c.0 * c.0;
        assert_eq!(
            invoke(&counters, Invocation::Function(square), &0).unwrap(),
            vec![1, 4]
        );
    }
}
