use core::marker::PhantomData;
use core::ops::ControlFlow;

use ControlFlow::*;
use Suspend::*;

use crate::coro::Coro;
use crate::suspend::Suspend;

#[derive(Clone)]
pub struct FromControlFlow<F, I, Y, R> {
    f: F,
    _marker: PhantomData<fn(I) -> (Y, R)>,
}

/// Creates a producer from a closure that returns [`ControlFlow`].
///
/// The closure runs once per resume. `Continue(y)` yields `y` and keeps the
/// producer alive; `Break(r)` returns `r` and ends it. Any state the
/// producer needs between steps lives in the closure's captures, which makes
/// this the usual way to write a producer as a small state machine.
///
/// # Examples
///
/// A post-order walk that drains both subtrees before emitting the node:
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use recoro::Emit::{Nested, Value};
/// use recoro::{Coro, Seq, from_control_flow};
///
/// struct Node {
///     value: i32,
///     children: Vec<Node>,
/// }
///
/// fn postorder(node: &Node) -> Seq<'_, i32> {
///     let mut children = node.children.iter();
///     let mut done = false;
///     from_control_flow(move |()| match children.next() {
///         Some(child) => Continue(Nested(postorder(child))),
///         None if !done => {
///             done = true;
///             Continue(Value(node.value))
///         }
///         None => Break(()),
///     })
///     .into_seq()
/// }
///
/// let leaf = |value| Node { value, children: vec![] };
/// let tree = Node { value: 1, children: vec![leaf(2), leaf(3)] };
/// let values = postorder(&tree).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(values, vec![2, 3, 1]);
/// ```
pub fn from_control_flow<I, Y, R, F>(f: F) -> FromControlFlow<F, I, Y, R>
where
    F: FnMut(I) -> ControlFlow<R, Y>,
{
    FromControlFlow {
        f,
        _marker: PhantomData,
    }
}

impl<I, Y, R, F> Coro<I, Y, R> for FromControlFlow<F, I, Y, R>
where
    F: FnMut(I) -> ControlFlow<R, Y>,
{
    type Next = Self;
    type Suspend = Suspend<Y, R, Self::Next>;

    fn resume(mut self, input: I) -> Self::Suspend {
        match (self.f)(input) {
            Continue(y) => Yield(y, self),
            Break(r) => Return(r),
        }
    }
}
