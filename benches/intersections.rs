// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT
#![allow(missing_docs)]

//! Benchmarks of the root finders and the intersection queries built on them.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use bezout::{CubicBez, Ellipse, Polynomial, QuadBez, Shape};

fn bench_roots(cc: &mut Criterion) {
    // (t - 1)(t - 2)(t - 3)(t - 4)
    let quartic = Polynomial::new(&[1.0, -10.0, 35.0, -50.0, 24.0]);
    cc.bench_function("quartic roots", |bb| {
        bb.iter(|| black_box(&quartic).roots());
    });

    // Roots at 0.1, 0.2, ..., 0.9
    let mut nonic = Polynomial::new(&[1.0]);
    for i in 1..10 {
        nonic = &nonic * &Polynomial::new(&[1.0, -f64::from(i) / 10.0]);
    }
    cc.bench_function("degree 9 isolation", |bb| {
        bb.iter(|| black_box(&nonic).roots_in_interval(0.0, 1.0));
    });
}

fn bench_intersections(cc: &mut Criterion) {
    let c0 = CubicBez::new((100.0, 200.0), (200.0, 300.0), (300.0, 100.0), (400.0, 200.0));
    let c1 = CubicBez::new((150.0, 100.0), (250.0, 300.0), (300.0, 50.0), (350.0, 300.0));
    cc.bench_function("cubic/cubic", |bb| {
        bb.iter(|| black_box(c0).intersect_cubic_bez(black_box(&c1)));
    });

    let q0 = QuadBez::new((23.0, 24.0), (59.0, 47.0), (94.0, 37.0));
    let q1 = QuadBez::new((41.0, 66.0), (23.0, 43.0), (71.0, 10.0));
    cc.bench_function("quad/quad", |bb| {
        bb.iter(|| black_box(q0).intersect_quad_bez(black_box(&q1)));
    });

    let e0 = Ellipse::new((40.0, 50.0), 20.0, 10.0);
    let e1 = Ellipse::new((50.0, 55.0), 15.0, 25.0);
    cc.bench_function("ellipse/ellipse", |bb| {
        bb.iter(|| black_box(e0).intersect_ellipse(black_box(&e1)));
    });

    let arc = CubicBez::new((10.0, 50.0), (60.0, 10.0), (140.0, 90.0), (190.0, 50.0));
    let e2 = Ellipse::new((100.0, 50.0), 40.0, 20.0);
    cc.bench_function("cubic/ellipse", |bb| {
        bb.iter(|| black_box(arc).intersect_ellipse(black_box(&e2)));
    });
}

fn bench_bounding_box(cc: &mut Criterion) {
    let c = CubicBez::new((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
    cc.bench_function("cubic bounding box", |bb| {
        bb.iter(|| black_box(c).bounding_box());
    });
}

criterion_group!(benches, bench_roots, bench_intersections, bench_bounding_box);
criterion_main!(benches);
