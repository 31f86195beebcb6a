use alloc::boxed::Box;
use core::marker::PhantomData;

use crate::emit::Completion;
use crate::emit::Emit;
use crate::error::Error;
use crate::error::Violation;
use crate::fixed_point::FixedPointCoro;
use crate::seq::Seq;
use crate::suspend::Suspend::Return;
use crate::suspend::Suspend::Yield;
use crate::suspended::Suspended;

/// Index of a frame in its chain's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct FrameId(pub(crate) usize);

/// What a producer did on one resume, with the producer's type erased.
pub(crate) enum Step<'a, T, E> {
    Emit(Emit<'a, T, E>),
    Done(Result<(), E>),
}

/// A producer as seen by a frame.
pub(crate) trait Body<'a, T, E> {
    fn step(&mut self) -> Option<Step<'a, T, E>>;
}

/// Holds a fixed-point producer between resumes. `None` once it returned.
pub(crate) struct Resumable<C, R> {
    coro: Option<C>,
    _returns: PhantomData<fn() -> R>,
}

impl<C, R> Resumable<C, R> {
    pub(crate) fn new(coro: C) -> Self {
        Resumable {
            coro: Some(coro),
            _returns: PhantomData,
        }
    }
}

impl<'a, T, E, R, C> Body<'a, T, E> for Resumable<C, R>
where
    C: FixedPointCoro<(), Emit<'a, T, E>, R>,
    R: Completion<E>,
{
    fn step(&mut self) -> Option<Step<'a, T, E>> {
        let coro = self.coro.take()?;
        Some(match coro.resume(()).into_enum() {
            Yield(emit, next) => {
                self.coro = Some(next);
                Step::Emit(emit)
            }
            Return(r) => Step::Done(r.into_result()),
        })
    }
}

pub(crate) type BoxedBody<'a, T, E> = Box<dyn Body<'a, T, E> + 'a>;

pub(crate) fn boxed<'a, T, E, C, R>(producer: C) -> BoxedBody<'a, T, E>
where
    C: FixedPointCoro<(), Emit<'a, T, E>, R> + 'a,
    R: Completion<E> + 'a,
    T: 'a,
    E: 'a,
{
    Box::new(Resumable::<C, R>::new(producer))
}

#[derive(Debug)]
pub(crate) enum FrameState<T> {
    NotStarted,
    /// Stopped at a value yield point. The value belongs to the frame until
    /// it is taken or the frame resumes.
    Value(T),
    /// Stopped, but holding no value: either the value was moved out, or the
    /// frame is waiting for a nested sequence it yielded to drain.
    Suspended,
    Completed,
}

pub(crate) enum Resumed<'a, T, E> {
    Value,
    Nested(Seq<'a, T, E>),
    Completed,
}

/// One suspended producer and its links into the chain.
pub(crate) struct Frame<'a, T, E> {
    body: BoxedBody<'a, T, E>,
    state: FrameState<T>,
    /// Link towards the root of the chain. Points at itself on the root.
    pub(crate) root: FrameId,
    /// On the root: the deepest active frame. Elsewhere: the parent.
    pub(crate) directory: FrameId,
    /// Assigned by the chain on insertion; never reused within one chain.
    pub(crate) serial: u64,
}

impl<'a, T, E> Frame<'a, T, E> {
    pub(crate) fn new(body: BoxedBody<'a, T, E>, id: FrameId) -> Self {
        Frame {
            body,
            state: FrameState::NotStarted,
            root: id,
            directory: id,
            serial: 0,
        }
    }

    /// Runs the producer to its next suspension point.
    pub(crate) fn resume(&mut self) -> Result<Resumed<'a, T, E>, Error<E>> {
        if self.is_done() {
            debug_assert!(false, "resumed a completed frame");
            return Err(Violation::ResumedCompleted.into());
        }
        match self.body.step() {
            Some(Step::Emit(Emit::Value(value))) => {
                self.state = FrameState::Value(value);
                Ok(Resumed::Value)
            }
            Some(Step::Emit(Emit::Nested(seq))) => {
                self.state = FrameState::Suspended;
                Ok(Resumed::Nested(seq))
            }
            Some(Step::Done(Ok(()))) => {
                self.state = FrameState::Completed;
                Ok(Resumed::Completed)
            }
            Some(Step::Done(Err(e))) => {
                self.state = FrameState::Completed;
                Err(Error::Producer(e))
            }
            None => {
                self.state = FrameState::Completed;
                Err(Violation::ResumedCompleted.into())
            }
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        matches!(self.state, FrameState::Completed)
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match &self.state {
            FrameState::Value(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn take_value(&mut self) -> Option<T> {
        match core::mem::replace(&mut self.state, FrameState::Suspended) {
            FrameState::Value(value) => Some(value),
            other => {
                self.state = other;
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &FrameState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use core::ops::ControlFlow::{Break, Continue};

    use super::*;
    use crate::from_control_flow::from_control_flow;

    fn frame<'a>(
        values: &'a [i32],
        fail_at_end: bool,
    ) -> Frame<'a, i32, &'static str> {
        let mut rest = values.iter();
        let producer = from_control_flow(move |()| match rest.next() {
            Some(&v) => Continue(Emit::Value(v)),
            None if fail_at_end => Break(Err("boom")),
            None => Break(Ok(())),
        });
        Frame::new(boxed(producer), FrameId(0))
    }

    #[test]
    fn starts_lazily_then_holds_each_value() {
        let mut f = frame(&[1, 2], false);
        assert!(matches!(f.state(), FrameState::NotStarted));
        assert!(matches!(f.resume(), Ok(Resumed::Value)));
        assert_eq!(f.value(), Some(&1));
        assert!(matches!(f.resume(), Ok(Resumed::Value)));
        assert_eq!(f.take_value(), Some(2));
        assert_eq!(f.value(), None);
        assert!(matches!(f.resume(), Ok(Resumed::Completed)));
        assert!(f.is_done());
    }

    #[test]
    fn failure_completes_the_frame() {
        let mut f = frame(&[], true);
        assert!(matches!(f.resume(), Err(Error::Producer("boom"))));
        assert!(f.is_done());
        assert_eq!(f.value(), None);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "completed frame"))]
    fn resuming_a_completed_frame_is_a_violation() {
        let mut f = frame(&[], false);
        assert!(matches!(f.resume(), Ok(Resumed::Completed)));
        assert!(matches!(
            f.resume(),
            Err(Error::Violation(Violation::ResumedCompleted))
        ));
    }
}
