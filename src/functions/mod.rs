//! Function decorators: wrap a function and change how it is called.
//!
//! - [`once()`]: run at most once, always return the first result
//! - [`memoize()`]: cache results by argument
//! - [`delay()`]: run later on a background thread
//! - [`throttle()`]: run at most once per time window (leading edge)
//!
//! Wrapped functions take a single argument; use a tuple for several and `()` for none.
//!
//! `Once`, `Memoize`, and `Throttle` keep their state in `Cell`/`RefCell` and are therefore
//! not `Sync`: they are meant for one thread. Every decorator carries [`DecoratorMetrics`] and
//! can report to a [`DecoratorObserver`].
//!
//! ## Example
//!
//! ```rust
//! use underbar::functions::{memoize, once};
//!
//! let init = once(|()| vec![1, 2, 3]);
//! assert_eq!(init.call(()), vec![1, 2, 3]);
//!
//! let slow_square = memoize(|n: u64| n * n);
//! assert_eq!(slow_square.call(12), 144);
//! assert_eq!(slow_square.call(12), 144);
//! assert_eq!(slow_square.metrics().snapshot().invocations, 1);
//! ```

mod delay;
mod memoize;
mod observer;
mod once;
mod throttle;

pub use delay::{delay, delay_with_options, DelayOptions};
pub use memoize::{memoize, Memoize};
pub use observer::{
    DecoratorEvent, DecoratorMetrics, DecoratorMetricsSnapshot, DecoratorObserver,
    LogDecoratorObserver, StdErrDecoratorObserver,
};
pub use once::{once, Once};
pub use throttle::{throttle, Throttle, ThrottleOptions};
