use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Events emitted by the function decorators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorEvent {
    OnceInvoked,
    OnceReused,
    CacheHit,
    CacheMiss { cached: usize },
    ThrottleFired,
    ThrottleDropped { remaining: Duration },
    DelayScheduled { wait: Duration },
    DelayFired { late_by: Duration },
}

/// Observer hook for decorator events.
pub trait DecoratorObserver: Send + Sync {
    fn on_event(&self, event: &DecoratorEvent);
}

/// A simple stderr logger for decorator events.
#[derive(Debug, Default)]
pub struct StdErrDecoratorObserver;

impl DecoratorObserver for StdErrDecoratorObserver {
    fn on_event(&self, event: &DecoratorEvent) {
        eprintln!("[underbar] {event:?}");
    }
}

/// Forwards decorator events to the `log` facade at debug level.
#[derive(Debug, Default)]
pub struct LogDecoratorObserver;

impl DecoratorObserver for LogDecoratorObserver {
    fn on_event(&self, event: &DecoratorEvent) {
        log::debug!(target: "underbar", "{event:?}");
    }
}

/// Counters for one decorated function.
///
/// The decorator updates these on every call; callers can snapshot them at any time.
pub struct DecoratorMetrics {
    calls: AtomicU64,
    invocations: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    dropped: AtomicU64,
}

impl DecoratorMetrics {
    pub fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            invocations: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    pub fn on_call(&self) {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// The wrapped function actually ran.
    pub fn on_invocation(&self) {
        let _ = self.invocations.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_cache_hit(&self) {
        let _ = self.cache_hits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_cache_miss(&self) {
        let _ = self.cache_misses.fetch_add(1, Ordering::SeqCst);
    }

    /// A call was swallowed without running the wrapped function.
    pub fn on_dropped(&self) {
        let _ = self.dropped.fetch_add(1, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
        self.invocations.store(0, Ordering::SeqCst);
        self.cache_hits.store(0, Ordering::SeqCst);
        self.cache_misses.store(0, Ordering::SeqCst);
        self.dropped.store(0, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> DecoratorMetricsSnapshot {
        DecoratorMetricsSnapshot {
            calls: self.calls.load(Ordering::SeqCst),
            invocations: self.invocations.load(Ordering::SeqCst),
            cache_hits: self.cache_hits.load(Ordering::SeqCst),
            cache_misses: self.cache_misses.load(Ordering::SeqCst),
            dropped: self.dropped.load(Ordering::SeqCst),
        }
    }
}

impl Default for DecoratorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`DecoratorMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoratorMetricsSnapshot {
    pub calls: u64,
    pub invocations: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub dropped: u64,
}

impl fmt::Display for DecoratorMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calls={}, invocations={}, cache={}/{} (hit/miss), dropped={}",
            self.calls, self.invocations, self.cache_hits, self.cache_misses, self.dropped
        )
    }
}

/// Observer + metrics pair carried by every decorator.
#[derive(Clone, Default)]
pub(crate) struct Hooks {
    observer: Option<Arc<dyn DecoratorObserver>>,
    metrics: Arc<DecoratorMetrics>,
}

impl Hooks {
    pub(crate) fn with_observer(observer: Option<Arc<dyn DecoratorObserver>>) -> Self {
        Self::new(observer, None)
    }

    /// Uses `metrics` when given, otherwise fresh counters.
    pub(crate) fn new(
        observer: Option<Arc<dyn DecoratorObserver>>,
        metrics: Option<Arc<DecoratorMetrics>>,
    ) -> Self {
        Self {
            observer,
            metrics: metrics.unwrap_or_default(),
        }
    }

    pub(crate) fn set_observer(&mut self, observer: Arc<dyn DecoratorObserver>) {
        self.observer = Some(observer);
    }

    pub(crate) fn metrics(&self) -> &Arc<DecoratorMetrics> {
        &self.metrics
    }

    pub(crate) fn emit(&self, event: DecoratorEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("has_observer", &self.observer.is_some())
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}
