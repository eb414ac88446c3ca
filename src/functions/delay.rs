//! Fire-and-forget delayed invocation.

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::UnderbarResult;

use super::observer::{DecoratorEvent, DecoratorMetrics, DecoratorObserver, Hooks};

/// Configuration for [`delay_with_options`].
#[derive(Clone)]
pub struct DelayOptions {
    /// Minimum time to wait before running the function.
    pub wait: Duration,
    /// Name given to the background thread.
    pub thread_name: Option<String>,
    /// Optional observer for scheduling events.
    pub observer: Option<Arc<dyn DecoratorObserver>>,
    /// Counters to update: `calls` per scheduled delay, `invocations` per fired one.
    /// Share one handle across several delays to aggregate them.
    pub metrics: Option<Arc<DecoratorMetrics>>,
}

impl Default for DelayOptions {
    fn default() -> Self {
        Self {
            wait: Duration::ZERO,
            thread_name: Some("underbar-delay".to_string()),
            observer: None,
            metrics: None,
        }
    }
}

impl fmt::Debug for DelayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayOptions")
            .field("wait", &self.wait)
            .field("thread_name", &self.thread_name)
            .field("has_observer", &self.observer.is_some())
            .field("metrics", &self.metrics.as_ref().map(|m| m.snapshot()))
            .finish()
    }
}

/// Run `func(args)` on a background thread no earlier than `wait` from now.
///
/// Returns immediately. The function's return value is discarded and the call cannot be
/// cancelled. Several delays carry no ordering guarantee relative to each other beyond each
/// respecting its own `wait`.
pub fn delay<F, A, R>(func: F, wait: Duration, args: A) -> UnderbarResult<()>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    delay_with_options(
        func,
        args,
        &DelayOptions {
            wait,
            ..Default::default()
        },
    )
}

/// [`delay`] with explicit [`DelayOptions`].
///
/// Returns [`crate::UnderbarError::Spawn`] if the background thread cannot be created.
pub fn delay_with_options<F, A, R>(func: F, args: A, opts: &DelayOptions) -> UnderbarResult<()>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    let wait = opts.wait;
    let hooks = Hooks::new(opts.observer.clone(), opts.metrics.clone());
    let mut builder = thread::Builder::new();
    if let Some(name) = &opts.thread_name {
        builder = builder.name(name.clone());
    }

    let scheduled_at = Instant::now();
    let worker_hooks = hooks.clone();
    let _detached = builder.spawn(move || {
        thread::sleep(wait);
        let late_by = scheduled_at.elapsed().saturating_sub(wait);
        worker_hooks.metrics().on_invocation();
        worker_hooks.emit(DecoratorEvent::DelayFired { late_by });
        let _ = func(args);
    })?;

    hooks.metrics().on_call();
    hooks.emit(DecoratorEvent::DelayScheduled { wait });
    Ok(())
}
