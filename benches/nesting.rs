use std::hint::black_box;
use std::ops::ControlFlow::{Break, Continue};

use criterion::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use recoro::Coro;
use recoro::Emit::{Nested, Value};
use recoro::Seq;
use recoro::from_control_flow;

/// `depth` producers nested inside each other, with `leaves` values at the
/// bottom.
fn tower(depth: usize, leaves: u64) -> Seq<'static, u64> {
    let mut started = false;
    from_control_flow(move |()| {
        if started {
            return Break(());
        }
        started = true;
        if depth == 0 {
            Continue(Nested(Seq::from_values(0..leaves)))
        } else {
            Continue(Nested(tower(depth - 1, leaves)))
        }
    })
    .into_seq()
}

/// A complete binary tree of the given height, emitted in post-order.
fn binary(height: u32, label: u64) -> Seq<'static, u64> {
    let mut step = 0;
    from_control_flow(move |()| {
        step += 1;
        match (height, step) {
            (0, 1) => Continue(Value(label)),
            (1.., 1) => Continue(Nested(binary(height - 1, label * 2))),
            (1.., 2) => Continue(Nested(binary(height - 1, label * 2 + 1))),
            (1.., 3) => Continue(Value(label)),
            _ => Break(()),
        }
    })
    .into_seq()
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");
    for &count in &[100u64, 10_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(
            BenchmarkId::new("from_values", count),
            &count,
            |b, &count| {
                b.iter(|| {
                    let sum: u64 =
                        Seq::from_values(0..count).map(Result::unwrap).sum();
                    black_box(sum)
                });
            },
        );
    }
    group.finish();
}

fn bench_deep_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_leaf");
    let leaves = 1_000;
    group.throughput(Throughput::Elements(leaves));
    for &depth in &[1usize, 10, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("depth", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let sum: u64 =
                        tower(depth, leaves).map(Result::unwrap).sum();
                    black_box(sum)
                });
            },
        );
    }
    group.finish();
}

fn bench_binary_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_tree");
    for &height in &[4u32, 10, 14] {
        group.throughput(Throughput::Elements((1u64 << (height + 1)) - 1));
        group.bench_with_input(
            BenchmarkId::new("postorder", height),
            &height,
            |b, &height| {
                b.iter(|| black_box(binary(height, 1).count()));
            },
        );
    }
    group.finish();
}

fn bench_cursor(c: &mut Criterion) {
    c.bench_function("cursor_walk_depth_100", |b| {
        b.iter(|| {
            let mut seq = tower(100, 1_000);
            let mut sum = 0;
            let mut cursor = seq.begin().unwrap();
            while !cursor.is_end() {
                sum += *cursor.value();
                cursor.advance().unwrap();
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_flat,
    bench_deep_leaf,
    bench_binary_tree,
    bench_cursor
);
criterion_main!(benches);
