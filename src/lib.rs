//! The `recoro` crate builds lazy sequences out of producers that may emit
//! either a value or an entire nested sequence. The consumer sees a single
//! flat sequence of values, in exactly the depth-first order a non-lazy
//! recursive traversal would produce them.
//!
//! A *producer* is a stackless coroutine in the style of the `Coro` trait:
//!
//! ```rust
//! # use recoro::Suspended;
//! pub trait Coro<I, Y, R>: Sized {
//!     type Next: Coro<I, Y, R>;
//!     type Suspend: Suspended<I, Y, R, Next = Self::Next>;
//!     fn resume(self, input: I) -> Self::Suspend;
//! }
//! ```
//!
//! `resume()` consumes the coroutine and hands back a successor only when it
//! yields, so a producer that has returned cannot be resumed again. A
//! producer for a [`Seq<'a, T, E>`](Seq) takes `()` as input, yields
//! [`Emit<'a, T, E>`](Emit) and returns `()` or `Result<(), E>`:
//!
//! ```rust
//! pub enum Emit<'a, T, E> {
//!     Value(T),
//!     Nested(Seq<'a, T, E>),
//! }
//! # pub struct Seq<'a, T, E>(&'a (T, E));
//! ```
//!
//! # Examples
//!
//! ## Flattening
//!
//! ```rust
//! use recoro::Emit::{Nested, Value};
//! use recoro::{Coro, IntoCoro, Seq};
//!
//! let g: Seq<i32> = Seq::from_values([10, 11]);
//! let h: Seq<i32> = Seq::from_values([1000, 2000]);
//! let f: Seq<i32> =
//!     [Value(1), Nested(g), Value(-1), Nested(h)].into_coro().into_seq();
//!
//! let values = f.collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(values, vec![1, 10, 11, -1, 1000, 2000]);
//! ```
//!
//! ## Recursive producers
//!
//! Without native generators, a producer that "recursively calls itself and
//! yields" is a small state machine that emits a `Nested` sequence where the
//! recursive call would be. `from_control_flow()` keeps that state in a
//! closure:
//!
//! ```rust
//! use core::ops::ControlFlow::{Break, Continue};
//!
//! use recoro::Emit::{Nested, Value};
//! use recoro::{Coro, Seq, from_control_flow};
//!
//! /// Every integer in `lo..hi`, split in halves recursively.
//! fn halves(lo: u32, hi: u32) -> Seq<'static, u32> {
//!     let mut step = 0;
//!     from_control_flow(move |()| {
//!         step += 1;
//!         let mid = lo + (hi - lo) / 2;
//!         match (hi - lo, step) {
//!             (1, 1) => Continue(Value(lo)),
//!             (2..=u32::MAX, 1) => Continue(Nested(halves(lo, mid))),
//!             (2..=u32::MAX, 2) => Continue(Nested(halves(mid, hi))),
//!             _ => Break(()),
//!         }
//!     })
//!     .into_seq()
//! }
//!
//! let values = halves(0, 8).collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(values, (0..8).collect::<Vec<_>>());
//! ```
//!
//! ## Borrowing values in place
//!
//! [`Seq::begin()`] returns a [`Cursor`] whose `value()` borrows the value
//! held by the active producer. The borrow checker makes sure the reference
//! is gone before the cursor advances.
//!
//! ```rust
//! use recoro::Seq;
//!
//! let mut seq: Seq<String> = Seq::from_values(["a".to_string(), "b".into()]);
//! let mut cursor = seq.begin().unwrap();
//! let first = cursor.value().clone();
//! cursor.advance().unwrap();
//! assert_eq!((first.as_str(), cursor.value().as_str()), ("a", "b"));
//! cursor.advance().unwrap();
//! assert!(cursor.is_end());
//! ```
//!
//! # How it works
//!
//! Each producer that is being drained runs in a *frame*. Frames live in an
//! arena owned by the outermost `Seq` and form a chain from the active leaf
//! up to the root. The root's directory link always names the active leaf,
//! so finding the frame to resume is a single lookup regardless of depth;
//! the chain is only walked when a frame is exhausted and its parent takes
//! over. See [`Seq`] for the ownership rules and [`Error`] for how failures
//! surface.

// Frames live in a heap arena, so the crate needs `alloc`, but nothing else
// from `std`.
//
// Tests for integrations with standard library APIs belong in the integration
// tests in the `tests/` folder.
#![no_std]

extern crate alloc;

#[macro_use]
mod log;

mod chain;
mod coro;
mod coro_assertions;
mod cursor;
mod emit;
pub mod error;
mod fixed_point;
mod frame;
mod from_control_flow;
mod into_coro;
mod map_yield;
mod metaprogramming;
mod pull;
mod seq;
mod suspend;
mod suspended;

pub use coro::Coro;
pub use coro_assertions::CoroAssertions;
pub use cursor::Cursor;
pub use cursor::Position;
pub use emit::Completion;
pub use emit::Emit;
pub use error::Error;
pub use error::Violation;
pub use fixed_point::FixedPointCoro;
pub use from_control_flow::FromControlFlow;
pub use from_control_flow::from_control_flow;
pub use into_coro::IntoCoro;
pub use into_coro::IteratorCoro;
pub use map_yield::MapYield;
pub use metaprogramming::Is;
pub use seq::Seq;
pub use suspend::Suspend;
pub use suspended::Suspended;
pub use suspended::SuspendedVisitor;

/// `Yield` and `Return` are imported into the crate root namespace because
/// they are used so often.
pub use Suspend::{Return, Yield};

#[cfg(test)]
mod test;
