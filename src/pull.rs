use crate::chain::Chain;
use crate::error::Error;

/// Outcome of one successful pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pulled {
    /// The active frame holds a fresh value.
    Value,
    /// The root completed. Nothing in the chain will run again.
    Exhausted,
}

/// Advances the chain to its next terminal value.
///
/// The active frame is resumed once (attaching whatever it nests), then
/// exhausted frames are popped off the leaf end, each pop resuming the
/// parent that was waiting on the popped frame, until a frame stops at a
/// value or the root itself completes. Empty nested sequences fall out of
/// this loop naturally: they complete on their first resume and get popped.
pub(crate) fn pull<T, E>(
    chain: &mut Chain<'_, T, E>,
) -> Result<Pulled, Error<E>> {
    let active = chain.current_active();
    if !chain.frame(active).is_done() {
        chain.resume(active)?;
    }
    loop {
        let active = chain.current_active();
        if !chain.frame(active).is_done() {
            return Ok(Pulled::Value);
        }
        if active == chain.root() {
            trace!(chain = ?chain.id(), "sequence exhausted");
            return Ok(Pulled::Exhausted);
        }
        let parent = chain.pop();
        chain.resume(parent)?;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::Cell;
    use core::convert::Infallible;
    use core::ops::ControlFlow::{Break, Continue};

    use super::*;
    use crate::coro::Coro;
    use crate::emit::Emit;
    use crate::frame::FrameId;
    use crate::from_control_flow::from_control_flow;
    use crate::seq::Seq;
    use crate::seq::State;

    /// One producer per level; each nests the next level once, and the last
    /// level yields `1..=leaf_values`. Every resume is counted per level.
    fn tower(
        level: usize,
        resumes: &[Cell<usize>],
        leaf_values: usize,
    ) -> Seq<'_, usize> {
        let mut emitted = 0;
        from_control_flow(move |()| {
            resumes[level].set(resumes[level].get() + 1);
            if level + 1 < resumes.len() {
                if emitted == 0 {
                    emitted = 1;
                    let next = tower(level + 1, resumes, leaf_values);
                    Continue(Emit::Nested(next))
                } else {
                    Break(())
                }
            } else if emitted < leaf_values {
                emitted += 1;
                Continue(Emit::Value(emitted))
            } else {
                Break(())
            }
        })
        .into_seq()
    }

    fn chain_of<T>(seq: Seq<'_, T>) -> Chain<'_, T, Infallible> {
        match seq.into_state() {
            State::Pending(body) => Chain::new(body),
            _ => unreachable!("fresh sequences are pending"),
        }
    }

    #[test]
    fn deep_leaf_is_found_without_touching_ancestors() {
        let resumes = (0..1000).map(|_| Cell::new(0)).collect::<Vec<_>>();
        let mut chain = chain_of(tower(0, &resumes, 100));

        assert_eq!(pull(&mut chain), Ok(Pulled::Value));
        assert_eq!(chain.value(), Some(&1));
        assert_eq!(chain.depth(), 1000);
        assert!(resumes.iter().all(|r| r.get() == 1));

        let leaf = chain.current_active();
        for expected in 2..=100 {
            assert_eq!(pull(&mut chain), Ok(Pulled::Value));
            assert_eq!(chain.value(), Some(&expected));
            assert_eq!(chain.current_active(), leaf);
        }
        assert!(resumes[..999].iter().all(|r| r.get() == 1));
        assert_eq!(resumes[999].get(), 100);
    }

    #[test]
    fn exhausting_the_leaf_unwinds_every_level_once() {
        let resumes = (0..50).map(|_| Cell::new(0)).collect::<Vec<_>>();
        let mut chain = chain_of(tower(0, &resumes, 3));
        for _ in 0..3 {
            assert_eq!(pull(&mut chain), Ok(Pulled::Value));
        }
        assert_eq!(pull(&mut chain), Ok(Pulled::Exhausted));
        assert_eq!(chain.current_active(), chain.root());
        assert_eq!(chain.depth(), 1);
        assert!(resumes[..49].iter().all(|r| r.get() == 2));
        assert_eq!(resumes[49].get(), 4);
    }

    #[test]
    fn popped_slots_are_reused() {
        let values = [1, 2, 3];
        let mut rest = 0..4;
        let producer = from_control_flow(move |()| match rest.next() {
            Some(i) if i < 3 => {
                Continue(Emit::Nested(Seq::from_values([values[i]])))
            }
            _ => Break(()),
        });
        let mut chain = chain_of(producer.into_seq());
        let mut serials = Vec::new();
        for expected in values {
            assert_eq!(pull(&mut chain), Ok(Pulled::Value));
            assert_eq!(chain.value(), Some(&expected));
            assert_eq!(chain.current_active(), FrameId(1));
            serials.push(chain.active_serial());
        }
        assert_eq!(pull(&mut chain), Ok(Pulled::Exhausted));
        assert_eq!(chain.arena_len(), 2);
        // Same slot every time, but never the same frame.
        assert_eq!(serials, [1, 2, 3]);
    }
}
