//! Leading-edge rate limiting.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::observer::{DecoratorEvent, DecoratorMetrics, DecoratorObserver, Hooks};

/// Configuration for [`Throttle::with_options`].
#[derive(Clone)]
pub struct ThrottleOptions {
    /// Minimum spacing between two executions of the wrapped function.
    pub wait: Duration,
    /// Optional observer for fire/drop events.
    pub observer: Option<Arc<dyn DecoratorObserver>>,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(100),
            observer: None,
        }
    }
}

impl fmt::Debug for ThrottleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottleOptions")
            .field("wait", &self.wait)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

/// A function that runs at most once per window. Created by [`throttle`].
///
/// Leading-edge policy: a call runs the wrapped function immediately if at least `wait` has
/// passed since the last *executed* call (or nothing has executed yet). Calls inside the
/// window are dropped, not deferred, and return a clone of the most recent result.
///
/// `Throttle` is single-threaded: it is not `Sync`.
pub struct Throttle<F, A, R> {
    func: F,
    wait: Duration,
    last_fired: Cell<Option<Instant>>,
    last_result: RefCell<Option<R>>,
    hooks: Hooks,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so it executes at most once per `wait`.
pub fn throttle<F, A, R>(func: F, wait: Duration) -> Throttle<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    Throttle::with_options(
        func,
        ThrottleOptions {
            wait,
            ..Default::default()
        },
    )
}

impl<F, A, R> Throttle<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    /// Wrap `func` using explicit [`ThrottleOptions`].
    pub fn with_options(func: F, opts: ThrottleOptions) -> Self {
        Self {
            func,
            wait: opts.wait,
            last_fired: Cell::new(None),
            last_result: RefCell::new(None),
            hooks: Hooks::with_observer(opts.observer),
            _args: PhantomData,
        }
    }

    /// Attach an observer for decorator events.
    pub fn with_observer(mut self, observer: Arc<dyn DecoratorObserver>) -> Self {
        self.hooks.set_observer(observer);
        self
    }

    /// Get a handle to this decorator's metrics.
    pub fn metrics(&self) -> Arc<DecoratorMetrics> {
        Arc::clone(self.hooks.metrics())
    }

    /// The configured window.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Run the wrapped function unless the last execution is less than `wait` ago.
    ///
    /// Returns the fresh result when it runs, otherwise the most recent one.
    pub fn call(&self, args: A) -> R {
        self.hooks.metrics().on_call();
        let now = Instant::now();

        if let Some(last) = self.last_fired.get() {
            let elapsed = now.saturating_duration_since(last);
            let previous = self.last_result.borrow().clone();
            // No result yet only while the first execution is still running.
            if elapsed < self.wait {
                if let Some(previous) = previous {
                    self.hooks.metrics().on_dropped();
                    self.hooks.emit(DecoratorEvent::ThrottleDropped {
                        remaining: self.wait - elapsed,
                    });
                    return previous;
                }
            }
        }

        self.last_fired.set(Some(now));
        self.hooks.metrics().on_invocation();
        self.hooks.emit(DecoratorEvent::ThrottleFired);
        let result = (self.func)(args);
        *self.last_result.borrow_mut() = Some(result.clone());
        result
    }

    /// Forget the last execution so the next call runs immediately.
    pub fn reset(&self) {
        self.last_fired.set(None);
    }
}
