use crate::seq::Seq;

/// One step of a producer: a terminal value for the consumer, or a whole
/// sub-sequence to be drained in place before the producer runs again.
///
/// ```rust
/// use recoro::Emit::{Nested, Value};
/// use recoro::IntoCoro;
/// use recoro::{Coro, Seq};
///
/// let inner: Seq<i32> = [Value(10), Value(11)].into_coro().into_seq();
/// let outer: Seq<i32> =
///     [Value(1), Nested(inner), Value(2)].into_coro().into_seq();
/// let values = outer.collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(values, vec![1, 10, 11, 2]);
/// ```
pub enum Emit<'a, T, E> {
    Value(T),
    Nested(Seq<'a, T, E>),
}

impl<T: core::fmt::Debug, E> core::fmt::Debug for Emit<'_, T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Emit::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Emit::Nested(seq) => f.debug_tuple("Nested").field(seq).finish(),
        }
    }
}

impl<T: PartialEq, E> PartialEq for Emit<'_, T, E> {
    /// Values compare by value. Nested sequences never compare equal, since
    /// comparing them would mean running them.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Emit::Value(a), Emit::Value(b)) => a == b,
            _ => false,
        }
    }
}

/// How a producer's return value reports success or failure to the frame
/// that ran it.
///
/// Producers that cannot fail return `()`. Fallible producers return
/// `Result<(), E>`, and an `Err` travels to the consumer as
/// [`Error::Producer`](crate::Error::Producer).
pub trait Completion<E> {
    fn into_result(self) -> Result<(), E>;
}

impl<E> Completion<E> for () {
    fn into_result(self) -> Result<(), E> {
        Ok(())
    }
}

impl<E> Completion<E> for Result<(), E> {
    fn into_result(self) -> Result<(), E> {
        self
    }
}
