use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::frame::BoxedBody;
use crate::frame::Frame;
use crate::frame::FrameId;
use crate::frame::Resumed;
use crate::seq::Seq;
use crate::seq::State;

/// Identifies one live chain: the heap address of its root producer, which
/// stays put for as long as the chain exists. A boxed producer is never
/// zero-sized, so no two live chains share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ChainId(usize);

impl ChainId {
    fn of<T: ?Sized>(root: &T) -> Self {
        ChainId(core::ptr::from_ref(root).cast::<()>() as usize)
    }
}

/// The frames of one running sequence: the root producer and everything
/// currently nested under it.
///
/// Frames live in an arena and refer to each other by index. Only the frames
/// on the path from the root to the active leaf are ever alive, since a
/// nested sequence is drained completely before its parent runs again. Slots
/// of popped frames are recycled, so the arena is as large as the deepest
/// nesting seen so far.
///
/// Every frame carries two links. `root` leads towards the root (one hop for
/// frames attached directly, more for grafted ones). `directory` has a dual
/// meaning: on the root it names the active leaf, on every other frame it
/// names the parent. The active frame is therefore always one lookup away,
/// however deep the nesting.
///
/// Slots are reused, so a `FrameId` does not name a frame for good. Every
/// inserted frame also gets a serial that is never handed out twice by the
/// same chain.
pub(crate) struct Chain<'a, T, E> {
    id: ChainId,
    frames: Vec<Option<Frame<'a, T, E>>>,
    free: Vec<FrameId>,
    root: FrameId,
    next_serial: u64,
}

impl<'a, T, E> Chain<'a, T, E> {
    pub(crate) fn new(body: BoxedBody<'a, T, E>) -> Self {
        let root = FrameId(0);
        Chain {
            id: ChainId::of(&*body),
            frames: vec![Some(Frame::new(body, root))],
            free: Vec::new(),
            root,
            next_serial: 1,
        }
    }

    pub(crate) fn id(&self) -> ChainId {
        self.id
    }

    pub(crate) fn root(&self) -> FrameId {
        self.root
    }

    pub(crate) fn frame(&self, id: FrameId) -> &Frame<'a, T, E> {
        match self.frames.get(id.0) {
            Some(Some(frame)) => frame,
            _ => unreachable!("frame {id:?} is not in the chain"),
        }
    }

    fn frame_mut(&mut self, id: FrameId) -> &mut Frame<'a, T, E> {
        match self.frames.get_mut(id.0) {
            Some(Some(frame)) => frame,
            _ => unreachable!("frame {id:?} is not in the chain"),
        }
    }

    fn insert(
        &mut self,
        make: impl FnOnce(FrameId) -> Frame<'a, T, E>,
    ) -> FrameId {
        let id = self.free.pop().unwrap_or(FrameId(self.frames.len()));
        let mut frame = make(id);
        frame.serial = self.next_serial;
        self.next_serial += 1;
        match self.frames.get_mut(id.0) {
            Some(slot) => *slot = Some(frame),
            None => self.frames.push(Some(frame)),
        }
        id
    }

    /// Follows `root` links until reaching the frame that is its own root.
    pub(crate) fn root_of(&self, id: FrameId) -> FrameId {
        let mut id = id;
        loop {
            let next = self.frame(id).root;
            if next == id {
                return id;
            }
            id = next;
        }
    }

    /// The deepest frame that is not yet exhausted.
    pub(crate) fn current_active(&self) -> FrameId {
        self.frame(self.root).directory
    }

    /// Serial of the active frame, unique within this chain.
    pub(crate) fn active_serial(&self) -> u64 {
        self.frame(self.current_active()).serial
    }

    /// Links the frames of `seq` under `parent` and makes the deepest of them
    /// the active frame, returning it. Returns `None` when `seq` has nothing
    /// left to run, in which case the chain is unchanged.
    ///
    /// The caller resumes the returned frame right away, so the first outcome
    /// of the nested sequence is known before control leaves the pull.
    pub(crate) fn attach(
        &mut self,
        parent: FrameId,
        seq: Seq<'a, T, E>,
    ) -> Option<FrameId> {
        let root = self.root_of(parent);
        let leaf = match seq.into_state() {
            State::Pending(body) => {
                let child = self.insert(|id| Frame::new(body, id));
                let frame = self.frame_mut(child);
                frame.root = root;
                frame.directory = parent;
                trace!(
                    chain = self.id.0,
                    parent = parent.0,
                    child = child.0,
                    "attached nested sequence"
                );
                child
            }
            State::Running(other) => self.graft(parent, other),
            State::Exhausted | State::Failed => {
                trace!(
                    chain = self.id.0,
                    parent = parent.0,
                    "skipped finished nested sequence"
                );
                return None;
            }
        };
        self.frame_mut(root).directory = leaf;
        Some(leaf)
    }

    /// Moves every frame of a sequence that was already pulled elsewhere into
    /// this arena, hanging its root under `parent`. Returns the grafted leaf.
    fn graft(
        &mut self,
        parent: FrameId,
        mut other: Chain<'a, T, E>,
    ) -> FrameId {
        let frames = core::mem::take(&mut other.frames);
        let mut moved = vec![None; frames.len()];
        for (old, frame) in frames.into_iter().enumerate() {
            if let Some(frame) = frame {
                moved[old] = Some(self.insert(|_| frame));
            }
        }
        let relink = |id: FrameId| match moved[id.0] {
            Some(new) => new,
            None => unreachable!("grafted frame links to a freed slot"),
        };
        for new in moved.iter().flatten().copied() {
            let frame = self.frame_mut(new);
            frame.root = relink(frame.root);
            frame.directory = relink(frame.directory);
        }
        let old_root = relink(other.root);
        let leaf = self.frame(old_root).directory;
        let root = self.root_of(parent);
        let frame = self.frame_mut(old_root);
        frame.root = root;
        frame.directory = parent;
        trace!(
            chain = self.id.0,
            from = other.id.0,
            parent = parent.0,
            leaf = leaf.0,
            "grafted running sequence"
        );
        leaf
    }

    /// Discards the exhausted active frame and makes its parent active.
    pub(crate) fn pop(&mut self) -> FrameId {
        let dead = self.current_active();
        debug_assert!(dead != self.root, "popped the root frame");
        debug_assert!(self.frame(dead).is_done(), "popped a live frame");
        let parent = self.frame(dead).directory;
        let root = self.root;
        self.frame_mut(root).directory = parent;
        self.frames[dead.0] = None;
        self.free.push(dead);
        trace!(
            chain = self.id.0,
            frame = dead.0,
            parent = parent.0,
            "popped exhausted frame"
        );
        parent
    }

    /// Resumes `id` once. Nested sequences it yields are attached and
    /// entered until some frame stops at a value or completes.
    pub(crate) fn resume(&mut self, id: FrameId) -> Result<(), Error<E>> {
        let mut id = id;
        loop {
            match self.frame_mut(id).resume()? {
                Resumed::Value | Resumed::Completed => return Ok(()),
                Resumed::Nested(seq) => {
                    if let Some(child) = self.attach(id, seq) {
                        id = child;
                    }
                }
            }
        }
    }

    /// Number of frames between the active leaf and the root, inclusive.
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 1;
        let mut id = self.current_active();
        while id != self.root {
            id = self.frame(id).directory;
            depth += 1;
        }
        depth
    }

    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn value(&self) -> Option<&T> {
        self.frame(self.current_active()).value()
    }

    pub(crate) fn take_value(&mut self) -> Option<T> {
        let active = self.current_active();
        self.frame_mut(active).take_value()
    }
}

impl<T, E> Drop for Chain<'_, T, E> {
    /// Drops frames from the active leaf up to the root, without resuming
    /// any of them.
    fn drop(&mut self) {
        let mut id = match self.frames.get(self.root.0) {
            Some(Some(root)) => root.directory,
            _ => return,
        };
        debug!(
            chain = self.id.0,
            frames = self.frames.iter().flatten().count(),
            "tearing down chain"
        );
        loop {
            let Some(frame) = self.frames.get_mut(id.0).and_then(Option::take)
            else {
                break;
            };
            let next = frame.directory;
            drop(frame);
            if id == self.root {
                break;
            }
            id = next;
        }
    }
}

