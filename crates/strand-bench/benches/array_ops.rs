//! Criterion micro-benchmarks for array growth and combinators.

use std::hint::black_box;
use std::ops::ControlFlow;

use criterion::{criterion_group, criterion_main, Criterion};
use strand_array::{DynArray, Order};
use strand_bench::append_workload;

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_10k", |b| {
        b.iter(|| black_box(append_workload(black_box(10_000))));
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("resize_grow_shrink_10k", |b| {
        b.iter(|| {
            let mut array: DynArray<u32> = DynArray::new(0).unwrap();
            array.resize(black_box(10_000)).unwrap();
            array.resize(black_box(10)).unwrap();
            black_box(array.capacity())
        });
    });
}

fn bench_combinators(c: &mut Criterion) {
    let array = append_workload(10_000);

    c.bench_function("map_10k", |b| {
        b.iter(|| black_box(array.map(|e, _, _| e.map(|v| v * 2)).unwrap()));
    });

    c.bench_function("filter_10k", |b| {
        b.iter(|| black_box(array.filter(|e, _, _| e.is_some_and(|v| v % 3 == 0)).unwrap()));
    });

    c.bench_function("fold_10k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            array.fold(&mut acc, |acc, e, _, _| *acc += e.copied().unwrap_or(0));
            black_box(acc)
        });
    });

    c.bench_function("for_each_10k", |b| {
        let mut scratch = array.copy().unwrap();
        b.iter(|| {
            let _ = scratch.for_each(|i, slots| {
                if let Some(v) = &mut slots[i] {
                    *v = v.wrapping_add(1);
                }
                ControlFlow::Continue(())
            });
        });
    });

    c.bench_function("zip_with_10k", |b| {
        b.iter(|| {
            black_box(
                DynArray::zip_with(&array, &array, |x, y, _, _, _| Some(x? + y?)).unwrap(),
            )
        });
    });

    c.bench_function("slice_join_10k", |b| {
        b.iter(|| {
            let head = array.slice(0, 4_999).unwrap();
            let tail = array.slice(5_000, 9_999).unwrap();
            black_box(DynArray::join(&tail, &head).unwrap())
        });
    });
}

fn bench_sort(c: &mut Criterion) {
    let reversed = DynArray::from_elements((0..1_000u32).rev()).unwrap();
    c.bench_function("sort_reversed_1k", |b| {
        b.iter(|| {
            let mut array = reversed.copy().unwrap();
            array.sort_by(Order::natural);
            black_box(array)
        });
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_resize,
    bench_combinators,
    bench_sort
);
criterion_main!(benches);
