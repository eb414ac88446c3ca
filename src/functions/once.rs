//! Run-once decorator.

use std::cell::{Cell, OnceCell};
use std::marker::PhantomData;
use std::sync::Arc;

use super::observer::{DecoratorEvent, DecoratorMetrics, DecoratorObserver, Hooks};

/// A function that runs at most once. Created by [`once`].
///
/// The first [`Once::call`] runs the wrapped function with that call's arguments and caches
/// the result; every call, including the first, returns a clone of that result. Arguments of
/// later calls are ignored.
///
/// `Once` is single-threaded: it is not `Sync`, so it cannot be shared between threads
/// without external locking.
pub struct Once<F, A, R> {
    func: Cell<Option<F>>,
    result: OnceCell<R>,
    hooks: Hooks,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so it runs at most once. Use a tuple for several arguments and `()` for none.
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        func: Cell::new(Some(func)),
        result: OnceCell::new(),
        hooks: Hooks::default(),
        _args: PhantomData,
    }
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
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

    /// Returns `true` once the wrapped function has produced its result.
    pub fn is_called(&self) -> bool {
        self.result.get().is_some()
    }

    /// Run the wrapped function on the first call; return its cached result.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from inside the wrapped function, or after an earlier call
    /// panicked inside it.
    pub fn call(&self, args: A) -> R {
        self.hooks.metrics().on_call();
        if let Some(result) = self.result.get() {
            self.hooks.emit(DecoratorEvent::OnceReused);
            return result.clone();
        }

        let func = self
            .func
            .take()
            .expect("once: wrapped function is running or previously panicked");
        self.hooks.metrics().on_invocation();
        self.hooks.emit(DecoratorEvent::OnceInvoked);
        self.result.get_or_init(|| func(args)).clone()
    }
}
