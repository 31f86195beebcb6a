use crate::coro::Coro;
use crate::suspended::Suspended;
use crate::suspended::SuspendedVisitor;

/// Where a producer stopped after a call to `resume()`.
///
///   * `Yield(y, n)`: the producer emitted `y` and can be resumed again
///     through `n`. For the producers stored in a frame, `y` is an
///     [`Emit`](crate::Emit) and `n` is the same producer type.
///   * `Return(r)`: the producer finished with `r`. There is nothing left to
///     resume, because `resume()` consumed the producer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suspend<Y, R, N> {
    Yield(Y, N),
    Return(R),
}

use Suspend::*;

impl<Y, R, N> Suspend<Y, R, N> {
    /// The emitted value and the successor, if the producer yielded.
    pub fn into_yield(self) -> Option<(Y, N)> {
        match self {
            Yield(y, n) => Some((y, n)),
            Return(_) => None,
        }
    }

    /// The final value, if the producer returned.
    pub fn into_return(self) -> Option<R> {
        match self {
            Yield(_, _) => None,
            Return(r) => Some(r),
        }
    }
}

impl<I, Y, R, N> Suspended<I, Y, R> for Suspend<Y, R, N>
where
    N: Coro<I, Y, R>,
{
    type Next = N;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Y, R, N, Out = X>,
    ) -> X {
        match self {
            Yield(y, next) => visitor.on_yield(y, next),
            Return(r) => visitor.on_return(r),
        }
    }

    fn into_enum(self) -> Suspend<Y, R, N> {
        self
    }
}
