use crate::coro::Coro;
use crate::suspended::Suspended;

/// Step-by-step assertions for testing a single producer in isolation,
/// without wrapping it in a [`Seq`](crate::Seq).
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use recoro::Emit::{self, Value};
/// use recoro::{Coro, CoroAssertions, from_control_flow};
///
/// let mut n = 0;
/// from_control_flow(move |()| {
///     n += 1;
///     if n <= 2 { Continue(Value(n)) } else { Break(()) }
/// })
/// .yields::<Emit<'_, i32, ()>>()
/// .assert_yields(Value(1), ())
/// .assert_yields(Value(2), ())
/// .assert_returns((), ());
/// ```
pub trait CoroAssertions<I, Y, R>: Coro<I, Y, R> {
    /// Resumes the coroutine and asserts that it yielded `expected`,
    /// returning the next state so that assertions can be chained.
    ///
    /// Panics if the coroutine returns instead of yielding or yields
    /// something else.
    fn assert_yields(self, expected: Y, input: I) -> Self::Next
    where
        Y: PartialEq + core::fmt::Debug,
        R: core::fmt::Debug,
    {
        use crate::Return;
        use crate::Yield;

        match self.resume(input).into_enum() {
            Yield(actual, next) => {
                assert_eq!(
                    actual, expected,
                    "expected Yield({expected:?}), got Yield({actual:?})"
                );
                next
            }
            Return(actual) => {
                panic!("expected Yield({expected:?}), got Return({actual:?})")
            }
        }
    }

    /// Resumes the coroutine and asserts that it returned `expected`.
    ///
    /// Panics if the coroutine yields instead of returning or returns
    /// something else.
    fn assert_returns(self, expected: R, input: I)
    where
        Y: core::fmt::Debug,
        R: PartialEq + core::fmt::Debug,
    {
        use crate::Return;
        use crate::Yield;

        match self.resume(input).into_enum() {
            Yield(actual, _) => {
                panic!("expected Return({expected:?}), got Yield({actual:?})")
            }
            Return(actual) => {
                assert_eq!(
                    actual, expected,
                    "expected Return({expected:?}), got Return({actual:?})"
                );
            }
        }
    }
}

impl<I, Y, R, T> CoroAssertions<I, Y, R> for T where T: Coro<I, Y, R> {}
