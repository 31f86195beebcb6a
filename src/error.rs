//! Error types surfaced by pulling on a [`Seq`](crate::Seq).

use thiserror::Error;

/// A sequence pull either produced a value, found the sequence exhausted, or
/// failed with one of these.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error<E> {
    /// A producer somewhere in the chain returned `Err`. Nested failures are
    /// reported exactly as if the outermost producer had failed.
    #[error("producer failed: {0}")]
    Producer(#[source] E),

    /// The caller broke the sequence contract.
    #[error(transparent)]
    Violation(#[from] Violation),
}

/// Ways a caller can misuse a sequence. These never return stale data; they
/// fail instead.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Violation {
    /// A frame that already completed was resumed.
    #[error("resumed a frame that already completed")]
    ResumedCompleted,

    /// A value was read while no value was available, at the end of the
    /// sequence or before the first pull.
    #[error("no current value: the cursor is at the end of the sequence")]
    NoValue,
}

impl<E> Error<E> {
    /// The producer's error, if this is a producer failure.
    pub fn into_producer(self) -> Option<E> {
        match self {
            Error::Producer(e) => Some(e),
            Error::Violation(_) => None,
        }
    }
}
