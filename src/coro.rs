use crate::emit::Completion;
use crate::emit::Emit;
use crate::fixed_point::FixedPointCoro;
use crate::map_yield::MapYield;
use crate::metaprogramming::Is;
use crate::seq::Seq;
use crate::suspended::Suspended;

/// A coroutine that can be resumed with an input value of type `I`, returning
/// a suspended state that either "yields" a value of type `Y` or "returns" a
/// value of type `R`.
///
/// `resume()` consumes the coroutine and only hands a successor back when the
/// coroutine yields. Once it returns there is nothing left to call `resume()`
/// on, so a finished producer can never be driven again by construction.
///
/// Producers for a [`Seq`] are coroutines that take `()` as input, yield
/// [`Emit`] values and return something that implements [`Completion`]. They
/// are usually built with `from_control_flow()` or `into_coro()` rather than
/// by implementing this trait directly.
pub trait Coro<I, Y, R>: Sized {
    /// The next state of the coroutine after a call to `resume()`, if the
    /// coroutine yields a value.
    ///
    /// When `Next` is `Self` the coroutine is a "fixed-point coroutine" and
    /// automatically implements [`FixedPointCoro`].
    type Next: Coro<I, Y, R>;

    /// Usually `Suspend<Y, R, Self::Next>`, but it can be any type that
    /// implements the `Suspended` trait.
    type Suspend: Suspended<I, Y, R, Next = Self::Next>;

    /// Runs the coroutine to its next yield or to its return.
    fn resume(self, input: I) -> Self::Suspend;

    /// Fixes the yield type when the compiler cannot infer it.
    ///
    /// ```rust
    /// use recoro::Coro;
    /// use recoro::CoroAssertions;
    /// use recoro::IntoCoro;
    ///
    /// core::iter::empty()
    ///     .into_coro()
    ///     .yields::<i32>()
    ///     .assert_returns((), ());
    /// ```
    fn yields<Y2>(
        self,
    ) -> impl Coro<I, Y, R, Next = Self::Next, Suspend = Self::Suspend>
    where
        Y2: Is<Type = Y>,
    {
        self
    }

    /// Fixes the return type when the compiler cannot infer it.
    fn returns<R2>(
        self,
    ) -> impl Coro<I, Y, R, Next = Self::Next, Suspend = Self::Suspend>
    where
        R2: Is<Type = R>,
    {
        self
    }

    /// Calls the provided closure on each element *yielded* from this
    /// coroutine. The closure runs lazily, when the coroutine is resumed.
    ///
    /// The common use is lifting plain values into [`Emit::Value`]:
    ///
    /// ```rust
    /// use recoro::Coro;
    /// use recoro::Emit;
    /// use recoro::IntoCoro;
    /// use recoro::Seq;
    ///
    /// let seq: Seq<i32> =
    ///     (1..=3).into_coro().map_yield(Emit::Value).into_seq();
    /// let values = seq.collect::<Result<Vec<_>, _>>().unwrap();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    fn map_yield<Y2, F>(self, f: F) -> MapYield<Y, Self, F>
    where
        F: FnMut(Y) -> Y2,
    {
        MapYield::new(self, f)
    }

    /// Wraps this producer in a [`Seq`] handle. No frame is created until the
    /// sequence is first pulled or attached under another producer.
    fn into_seq<'a, T, E>(self) -> Seq<'a, T, E>
    where
        Self: FixedPointCoro<(), Emit<'a, T, E>, R> + 'a,
        R: Completion<E> + 'a,
        T: 'a,
        E: 'a,
    {
        Seq::new(self)
    }
}
