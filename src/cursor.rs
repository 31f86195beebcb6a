use core::convert::Infallible;

use crate::chain::ChainId;
use crate::error::Error;
use crate::error::Violation;
use crate::seq::Seq;

/// Where a cursor stands: at the end, or on the value held by one particular
/// active frame of one particular sequence.
///
/// Two positions are equal only if they name the same frame. A frame that
/// was popped and a later frame never share a position, even though the
/// later one may reuse its storage. Positions are only meaningful while
/// their sequence is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(Option<(ChainId, u64)>);

impl Position {
    pub const END: Position = Position(None);

    pub(crate) fn at(chain: ChainId, serial: u64) -> Self {
        Position(Some((chain, serial)))
    }

    /// Whether this is the end position.
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

/// A forward-only view of a [`Seq`], obtained from [`Seq::begin()`].
///
/// The cursor borrows the sequence mutably, so the only way to observe
/// values is through it, and a reference from [`value()`](Cursor::value)
/// cannot outlive the next [`advance()`](Cursor::advance). Clone the value
/// if it has to be kept.
///
/// ```rust
/// use recoro::Emit::{Nested, Value};
/// use recoro::{Coro, IntoCoro, Seq};
///
/// let inner = Seq::from_values([10, 11]);
/// let mut seq: Seq<i32> =
///     [Value(1), Nested(inner), Value(2)].into_coro().into_seq();
///
/// let mut seen = Vec::new();
/// let mut cursor = seq.begin().unwrap();
/// while cursor != Seq::<i32>::end() {
///     seen.push(*cursor.value());
///     cursor.advance().unwrap();
/// }
/// assert_eq!(seen, vec![1, 10, 11, 2]);
/// ```
pub struct Cursor<'s, 'a, T, E = Infallible> {
    seq: &'s mut Seq<'a, T, E>,
    position: Position,
}

impl<'s, 'a, T, E> Cursor<'s, 'a, T, E> {
    pub(crate) fn new(seq: &'s mut Seq<'a, T, E>, position: Position) -> Self {
        Cursor { seq, position }
    }

    /// The frame the cursor stands on, or [`Position::END`].
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the cursor has moved past the last value.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// The current value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// The current value, or [`Violation::NoValue`] at the end.
    pub fn try_value(&self) -> Result<&T, Violation> {
        if self.is_end() {
            return Err(Violation::NoValue);
        }
        self.seq.current().ok_or(Violation::NoValue)
    }

    /// Moves to the next value. Does nothing once the cursor is at the end.
    ///
    /// On a producer failure the cursor moves to the end and the sequence is
    /// torn down.
    pub fn advance(&mut self) -> Result<(), Error<E>> {
        if self.is_end() {
            return Ok(());
        }
        match self.seq.pull() {
            Ok(position) => {
                self.position = position;
                Ok(())
            }
            Err(e) => {
                self.position = Position::END;
                Err(e)
            }
        }
    }
}

impl<T, E> PartialEq for Cursor<'_, '_, T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T, E> PartialEq<Position> for Cursor<'_, '_, T, E> {
    fn eq(&self, other: &Position) -> bool {
        self.position == *other
    }
}

impl<T: core::fmt::Debug, E> core::fmt::Debug for Cursor<'_, '_, T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("value", &self.try_value().ok())
            .finish()
    }
}
