use core::convert::Infallible;
use core::iter::FusedIterator;

use crate::chain::Chain;
use crate::coro::Coro;
use crate::cursor::Cursor;
use crate::cursor::Position;
use crate::emit::Completion;
use crate::emit::Emit;
use crate::error::Error;
use crate::fixed_point::FixedPointCoro;
use crate::frame;
use crate::frame::BoxedBody;
use crate::into_coro::IntoCoro;
use crate::pull::Pulled;
use crate::pull::pull;

pub(crate) enum State<'a, T, E> {
    /// Not pulled yet. The producer has no frame.
    Pending(BoxedBody<'a, T, E>),
    Running(Chain<'a, T, E>),
    Exhausted,
    /// A producer failed; its chain has been torn down.
    Failed,
}

/// A lazy sequence whose producer may emit values or whole nested sequences,
/// observed by the consumer as one flat, depth-first run of values.
///
/// A `Seq` owns its producer and, once pulled, every frame nested under it.
/// It cannot be cloned, since that would duplicate a half-run computation.
/// Dropping it tears down all of its frames without resuming any of them.
///
/// There are two ways to consume it:
///
///   * [`begin()`](Seq::begin) gives a [`Cursor`] that borrows each value in
///     place. The borrow ends before the cursor can advance, so a value can
///     never be observed after its producer has moved on.
///   * As an [`Iterator`], each value is moved out to the caller.
///
/// Either way the sequence is single-pass: a second `begin()` continues where
/// the last pull left off.
///
/// # Example
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use recoro::Emit::{Nested, Value};
/// use recoro::{Coro, Seq, from_control_flow};
///
/// fn countdown(n: u32) -> Seq<'static, u32> {
///     let mut step = 0;
///     from_control_flow(move |()| {
///         step += 1;
///         match step {
///             1 if n > 0 => Continue(Value(n)),
///             2 if n > 0 => Continue(Nested(countdown(n - 1))),
///             _ => Break(()),
///         }
///     })
///     .into_seq()
/// }
///
/// let values = countdown(3).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub struct Seq<'a, T, E = Infallible> {
    state: State<'a, T, E>,
}

impl<'a, T, E> Seq<'a, T, E> {
    /// Wraps a producer. It will not run until the sequence is pulled.
    pub fn new<C, R>(producer: C) -> Self
    where
        C: FixedPointCoro<(), Emit<'a, T, E>, R> + 'a,
        R: Completion<E> + 'a,
        T: 'a,
        E: 'a,
    {
        Seq {
            state: State::Pending(frame::boxed(producer)),
        }
    }

    /// A sequence with no values.
    pub fn empty() -> Self {
        Seq {
            state: State::Exhausted,
        }
    }

    /// A sequence of plain values with no nesting.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: 'a,
        E: 'a,
    {
        values.into_coro().map_yield(Emit::Value).into_seq()
    }

    /// Pulls the first value not yet seen and returns a cursor on it, or on
    /// the end if there is none.
    pub fn begin(&mut self) -> Result<Cursor<'_, 'a, T, E>, Error<E>> {
        let position = self.pull()?;
        Ok(Cursor::new(self, position))
    }

    /// The position every cursor reaches after the last value.
    pub const fn end() -> Position {
        Position::END
    }

    /// Whether the sequence will produce nothing more, either because it ran
    /// out or because a producer failed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted | State::Failed)
    }

    /// Whether a producer failed and took the sequence down with it.
    pub fn has_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }

    /// How many producers are currently nested, counting the outermost one.
    /// Zero when no frame is alive.
    pub fn depth(&self) -> usize {
        match &self.state {
            State::Running(chain) => chain.depth(),
            _ => 0,
        }
    }

    pub(crate) fn into_state(self) -> State<'a, T, E> {
        self.state
    }

    /// Runs one pull, moving to the next state of the handle.
    pub(crate) fn pull(&mut self) -> Result<Position, Error<E>> {
        self.state = match core::mem::replace(&mut self.state, State::Exhausted)
        {
            State::Pending(body) => State::Running(Chain::new(body)),
            other => other,
        };
        let State::Running(chain) = &mut self.state else {
            return Ok(Position::END);
        };
        match pull(chain) {
            Ok(Pulled::Value) => {
                Ok(Position::at(chain.id(), chain.active_serial()))
            }
            Ok(Pulled::Exhausted) => {
                self.state = State::Exhausted;
                Ok(Position::END)
            }
            Err(e) => {
                debug!(chain = ?chain.id(), "producer failed");
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    pub(crate) fn current(&self) -> Option<&T> {
        match &self.state {
            State::Running(chain) => chain.value(),
            _ => None,
        }
    }

    fn take_current(&mut self) -> Option<T> {
        match &mut self.state {
            State::Running(chain) => chain.take_value(),
            _ => None,
        }
    }
}

impl<T, E> Default for Seq<'_, T, E> {
    fn default() -> Self {
        Seq::empty()
    }
}

impl<T, E> Iterator for Seq<'_, T, E> {
    type Item = Result<T, Error<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.pull() {
            Ok(position) if position.is_end() => None,
            Ok(_) => self.take_current().map(Ok),
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, E> FusedIterator for Seq<'_, T, E> {}

impl<T, E> core::fmt::Debug for Seq<'_, T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match &self.state {
            State::Pending(_) => "pending",
            State::Running(_) => "running",
            State::Exhausted => "exhausted",
            State::Failed => "failed",
        };
        f.debug_struct("Seq")
            .field("state", &state)
            .field("depth", &self.depth())
            .finish()
    }
}
