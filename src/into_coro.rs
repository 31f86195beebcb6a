use crate::coro::Coro;
use crate::suspend::Suspend;
use Suspend::{Return, Yield};

/// Implemented by types that can be converted into a coroutine.
///
/// Every `IntoIterator` converts into a producer that takes `()`, yields the
/// items in order, and returns `()` when they run out. An iterator of
/// [`Emit`](crate::Emit) items is therefore already a complete producer for a
/// [`Seq`](crate::Seq); any nested sequences inside it stay unstarted until
/// the outer sequence reaches them.
pub trait IntoCoro<I, Y, R> {
    type IntoCoro: Coro<I, Y, R>;
    fn into_coro(self) -> Self::IntoCoro;
}

impl<T, It: IntoIterator<Item = T>> IntoCoro<(), T, ()> for It {
    type IntoCoro = IteratorCoro<It::IntoIter>;
    fn into_coro(self) -> Self::IntoCoro {
        IteratorCoro(self.into_iter())
    }
}

pub struct IteratorCoro<It>(It);

impl<T, It: Iterator<Item = T>> Coro<(), T, ()> for IteratorCoro<It> {
    type Next = Self;
    type Suspend = Suspend<T, (), Self>;
    fn resume(mut self, _: ()) -> Self::Suspend {
        match self.0.next() {
            Some(x) => Yield(x, self),
            None => Return(()),
        }
    }
}
