use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::ControlFlow::{Break, Continue};

use crate::*;

#[test]
fn iterator_producer_yields_items_then_returns() {
    [1, 2, 3]
        .into_coro()
        .assert_yields(1, ())
        .assert_yields(2, ())
        .assert_yields(3, ())
        .assert_returns((), ());
}

#[test]
fn map_yield_lifts_plain_values() {
    [4, 5]
        .into_coro()
        .map_yield(Emit::Value)
        .yields::<Emit<'_, i32, ()>>()
        .assert_yields(Emit::Value(4), ())
        .assert_yields(Emit::Value(5), ())
        .assert_returns((), ());
}

#[test]
fn control_flow_producer_reports_failure_on_return() {
    let mut steps = 0;
    from_control_flow(move |()| {
        steps += 1;
        if steps == 1 {
            Continue(Emit::Value(steps))
        } else {
            Break(Err::<(), _>("gave up"))
        }
    })
    .yields::<Emit<'_, i32, &str>>()
    .assert_yields(Emit::Value(1), ())
    .assert_returns(Err("gave up"), ());
}

#[test]
fn completion_of_unit_and_result() {
    assert_eq!(<() as Completion<&str>>::into_result(()), Ok(()));
    assert_eq!(Completion::into_result(Err::<(), _>("no")), Err("no"));
}

#[test]
fn nested_emits_never_compare_equal() {
    let a: Emit<'_, i32, ()> = Emit::Nested(Seq::empty());
    let b: Emit<'_, i32, ()> = Emit::Nested(Seq::empty());
    assert_ne!(a, b);
    assert_eq!(Emit::<i32, ()>::Value(1), Emit::Value(1));
}

#[test]
fn suspend_accessors() {
    let yielded: Suspend<i32, (), ()> = Yield(1, ());
    assert_eq!(yielded.into_yield(), Some((1, ())));
    let returned: Suspend<i32, &str, ()> = Return("done");
    assert_eq!(returned.into_return(), Some("done"));
}

#[test]
fn seq_debug_reports_state_and_depth() {
    let mut seq: Seq<'_, i32> = Seq::from_values([1]);
    assert_eq!(format!("{seq:?}"), "Seq { state: \"pending\", depth: 0 }");
    assert_eq!(seq.next(), Some(Ok(1)));
    assert_eq!(format!("{seq:?}"), "Seq { state: \"running\", depth: 1 }");
    assert_eq!(seq.next(), None);
    assert_eq!(format!("{seq:?}"), "Seq { state: \"exhausted\", depth: 0 }");
}

#[test]
fn from_values_and_default() {
    let values = Seq::<'_, u8>::from_values(vec![7, 8, 9])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(values, vec![7, 8, 9]);
    assert!(Seq::<'_, u8>::default().is_exhausted());
}
