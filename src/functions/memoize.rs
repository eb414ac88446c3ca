//! Result-caching decorator.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use super::observer::{DecoratorEvent, DecoratorMetrics, DecoratorObserver, Hooks};

/// A function whose results are cached by argument. Created by [`memoize`].
///
/// The cache key is the whole argument value; pass a tuple to key on several arguments.
/// Calling twice with equal arguments runs the wrapped function once.
///
/// `Memoize` is single-threaded: it is not `Sync`.
pub struct Memoize<F, A, R> {
    func: F,
    cache: RefCell<HashMap<A, R>>,
    hooks: Hooks,
}

/// Wrap `func` so its results are cached by argument.
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    Memoize {
        func,
        cache: RefCell::new(HashMap::new()),
        hooks: Hooks::default(),
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    /// Attach an observer for decorator events.
    pub fn with_observer(mut self, observer: Arc<dyn DecoratorObserver>) -> Self {
        self.hooks.set_observer(observer);
        self
    }

    /// Get a handle to this decorator's metrics.
    pub fn metrics(&self) -> Arc<DecoratorMetrics> {
        Arc::clone(self.hooks.metrics())
    }

    /// Return the cached result for `args`, computing and caching it on a miss.
    ///
    /// The cache is not borrowed while the wrapped function runs, so it may call back into
    /// this `Memoize`.
    pub fn call(&self, args: A) -> R {
        self.hooks.metrics().on_call();

        let cached = self.cache.borrow().get(&args).cloned();
        if let Some(result) = cached {
            self.hooks.metrics().on_cache_hit();
            self.hooks.emit(DecoratorEvent::CacheHit);
            return result;
        }

        self.hooks.metrics().on_cache_miss();
        self.hooks.metrics().on_invocation();
        let result = (self.func)(args.clone());

        let mut cache = self.cache.borrow_mut();
        let _ = cache.insert(args, result.clone());
        self.hooks.emit(DecoratorEvent::CacheMiss {
            cached: cache.len(),
        });
        result
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Forget every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}
