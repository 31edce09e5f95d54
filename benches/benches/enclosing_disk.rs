// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::f64::consts::TAU;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_enclosing_disk::{smallest_enclosing_disk, smallest_enclosing_disk_in_order};

fn gen_ring(n: usize, seed: u64) -> Vec<Circle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let dist = rng.gen_range(1.0..50.0);
            let radius = rng.gen_range(0.05..5.0);
            Circle::new((Vec2::from_angle(angle) * dist).to_point(), radius)
        })
        .collect()
}

fn bench_shuffled(c: &mut Criterion) {
    let mut group = c.benchmark_group("enclosing_disk_shuffled");
    for n in [3_usize, 16, 128, 1024, 16_384, 131_072] {
        let disks = gen_ring(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(
                || SmallRng::seed_from_u64(7),
                |mut rng| black_box(smallest_enclosing_disk(&disks, &mut rng)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_in_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("enclosing_disk_in_order");
    for n in [16_usize, 128, 1024, 16_384, 131_072] {
        let disks = gen_ring(n, 0xd15c);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| black_box(smallest_enclosing_disk_in_order(&disks)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shuffled, bench_in_order);
criterion_main!(benches);
