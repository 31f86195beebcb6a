use crate::coro::Coro;

/// A coroutine whose `Next` associated type is `Self`.
///
/// A frame stores its producer in a single slot of a fixed type and puts the
/// successor back into that slot after each yield, so only fixed-point
/// coroutines can back a [`Seq`](crate::Seq). Both `from_control_flow()` and
/// `into_coro()` produce fixed-point coroutines, and `map_yield()` preserves
/// the property.
///
/// # Safety
///
/// This is a marker trait. It is implemented automatically for every `Coro`
/// with `Next = Self` and should never be implemented by hand.
#[cfg_attr(docsrs, doc(notable_trait))]
pub unsafe trait FixedPointCoro<I, Y, R>:
    Coro<I, Y, R, Next = Self>
{
    /// A no-op that fails to compile when called on a coroutine that is not
    /// a fixed point. Insert it between combinators to find where the
    /// property was lost.
    fn fixed_point(self) -> Self {
        self
    }
}

unsafe impl<I, Y, R, C> FixedPointCoro<I, Y, R> for C where
    C: Coro<I, Y, R, Next = C>
{
}
