// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_cone_tree::{ConeTreeLayout, LayoutSettings, TreeNode};

struct Node {
    size: f64,
    kids: Vec<Node>,
}

impl TreeNode for Node {
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.kids.iter()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.kids);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.kids);
        }
    }
}

fn gen_uniform(depth: usize, fan_out: usize) -> Node {
    Node {
        size: 0.0,
        kids: if depth == 0 {
            Vec::new()
        } else {
            (0..fan_out).map(|_| gen_uniform(depth - 1, fan_out)).collect()
        },
    }
}

fn gen_random(rng: &mut SmallRng, depth: usize) -> Node {
    let fan_out = if depth == 0 { 0 } else { rng.gen_range(0..9) };
    Node {
        size: rng.gen_range(0.0..3.0),
        kids: (0..fan_out).map(|_| gen_random(rng, depth - 1)).collect(),
    }
}

fn gen_chain(depth: usize) -> Node {
    let mut node = Node {
        size: 1.0,
        kids: Vec::new(),
    };
    for _ in 0..depth {
        node = Node {
            size: 0.0,
            kids: vec![node],
        };
    }
    node
}

fn count(node: &Node) -> u64 {
    let mut total = 0;
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        total += 1;
        stack.extend(n.kids.iter());
    }
    total
}

fn bench_shapes(c: &mut Criterion) {
    let layout = ConeTreeLayout::new(LayoutSettings::new(0.5, 0.1))
        .with_leaf_radius(|n: &Node| n.size);
    let shapes = [
        ("wide_d2_f64", gen_uniform(2, 64)),
        ("flat_100k", gen_uniform(1, 100_000)),
        ("balanced_d5_f6", gen_uniform(5, 6)),
        ("random_d6", gen_random(&mut SmallRng::seed_from_u64(42), 6)),
        ("chain_10k", gen_chain(10_000)),
    ];

    let mut group = c.benchmark_group("cone_tree_layout");
    for (name, root) in &shapes {
        group.throughput(Throughput::Elements(count(root)));
        group.bench_function(*name, |b| {
            b.iter(|| black_box(layout.layout_seeded(root, 1)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
