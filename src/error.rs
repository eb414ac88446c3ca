use thiserror::Error;

/// Convenience result type for fallible collection and decorator operations.
pub type UnderbarResult<T> = Result<T, UnderbarError>;

/// Error type returned by the operations that have no sane default.
///
/// Most helpers return a neutral value on empty or partial input (`None`, an empty `Vec`,
/// vacuous `true`); this enum covers the few cases where that would hide a mistake.
#[derive(Debug, Error)]
pub enum UnderbarError {
    /// A reduction without an initial accumulator was asked to fold an empty collection.
    #[error("cannot reduce an empty collection without an initial value")]
    EmptyReduce,

    /// [`crate::collections::Invocation::Method`] named a method the item does not provide.
    #[error("unknown method '{name}'")]
    UnknownMethod { name: String },

    /// A JSON merge was given a target or source that is not a JSON object.
    #[error("expected a json object, found {found}")]
    NotAnObject { found: &'static str },

    /// The background thread used by `delay` could not be spawned.
    #[error("failed to spawn delay thread: {0}")]
    Spawn(#[from] std::io::Error),
}
