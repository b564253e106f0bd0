// SPDX-License-Identifier: MPL-2.0

//! A synthetic large-multirange benchmark. Builds two multiranges with a
//! few thousand non-overlapping-within-themselves member ranges each, then
//! times the operations whose cost scales with member count: construction
//! (sort + merge pass), membership lookup (binary search), and the
//! pairwise set operations.

use criterion::{criterion_group, criterion_main, Criterion};
use pgrange::Multirange;
use range_core::{BoundValue, Range, RangeOptions};

const MEMBER_COUNT: i32 = 4000;

fn make_ranges(offset: i32, stride: i32, width: i32) -> Vec<Range<i32>> {
    (0..MEMBER_COUNT)
        .map(|i| {
            let lo = offset + i * stride;
            Range::new(
                BoundValue::Value(lo),
                BoundValue::Value(lo + width),
                RangeOptions {
                    lower_inclusive: true,
                    upper_inclusive: false,
                },
            )
            .unwrap()
        })
        .collect()
}

fn large_case(c: &mut Criterion) {
    let a_ranges = make_ranges(0, 10, 4);
    let b_ranges = make_ranges(3, 10, 4);

    c.bench_function("multirange construction", |b| {
        b.iter(|| Multirange::new(a_ranges.clone()))
    });

    let a = Multirange::new(a_ranges.clone());
    let b = Multirange::new(b_ranges.clone());

    c.bench_function("multirange contains (worst case miss)", |b| {
        b.iter(|| a.contains(&(MEMBER_COUNT * 10 + 1)))
    });

    c.bench_function("multirange union", |b| b.iter(|| a.union(&b)));
    c.bench_function("multirange intersection", |b| b.iter(|| a.intersection(&b)));
    c.bench_function("multirange difference", |b| b.iter(|| a.difference(&b)));
}

criterion_group!(benches, large_case);
criterion_main!(benches);
