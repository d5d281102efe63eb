use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};
use quietboard::solutions;

fn counts(pairs: &[(char, i64)]) -> BTreeMap<char, i64> {
    pairs.iter().copied().collect()
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("enumerate_4x4_two_kings_one_queen", |b| {
        let counts = counts(&[('K', 2), ('Q', 1)]);
        b.iter(|| solutions(4, 4, &counts).unwrap().count())
    });

    c.bench_function("enumerate_4x4_three_kings_three_knights", |b| {
        let counts = counts(&[('K', 3), ('N', 3)]);
        b.iter(|| solutions(4, 4, &counts).unwrap().count())
    });

    c.bench_function("enumerate_7x7_reference_challenge", |b| {
        let counts = counts(&[('K', 2), ('Q', 2), ('B', 2), ('N', 1)]);
        b.iter(|| solutions(7, 7, &counts).unwrap().count())
    });
}

fn bench_first_solution_only(c: &mut Criterion) {
    // exercises laziness: time to produce just the first board, not the
    // whole sequence.
    c.bench_function("first_solution_7x7_reference_challenge", |b| {
        let counts = counts(&[('K', 2), ('Q', 2), ('B', 2), ('N', 1)]);
        b.iter(|| solutions(7, 7, &counts).unwrap().next())
    });
}

criterion_group!(benches, bench_enumerate, bench_first_solution_only);
criterion_main!(benches);
