// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cone tree layout of a variability model.
//!
//! Features form a tree of options. All nodes use the minimum radius with the default
//! settings. A tight `max_radius` shows how clamping is reported.
//!
//! Run:
//! - `cargo run -p understory_demos --example cone_tree_feature_model`

use rand::SeedableRng;
use rand::rngs::SmallRng;
use understory_cone_tree::{LayoutSettings, LayoutWarning, TreeNode, layout};

#[derive(Debug)]
struct Feature {
    name: &'static str,
    optional: bool,
    children: Vec<Feature>,
}

impl Feature {
    fn new(name: &'static str, children: Vec<Self>) -> Self {
        Self {
            name,
            optional: false,
            children,
        }
    }

    fn optional(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
            children: Vec::new(),
        }
    }
}

impl TreeNode for Feature {
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}

fn model() -> Feature {
    Feature::new(
        "root",
        vec![
            Feature::new(
                "compression",
                vec![
                    Feature::optional("gzip"),
                    Feature::optional("lz4"),
                    Feature::optional("zstd"),
                    Feature::optional("brotli"),
                ],
            ),
            Feature::new(
                "encryption",
                vec![Feature::optional("aes"), Feature::optional("chacha")],
            ),
            Feature::new("cache", vec![Feature::new("size", vec![])]),
            Feature::optional("statistics"),
            Feature::optional("logging"),
        ],
    )
}

fn main() {
    let root = model();
    let mut rng = SmallRng::seed_from_u64(7);

    let settings = LayoutSettings::default();
    let tree = layout(&root, settings, &mut rng).unwrap();
    println!("default settings: {settings:?}");
    for (id, info) in tree.iter() {
        let indent = "  ".repeat(info.level);
        let kind = if info.node.optional { "?" } else { "" };
        println!(
            "{indent}{}{kind} #{} r={:.3} rel=({:.3}, {:.3})",
            info.node.name,
            id.index(),
            info.radius,
            info.rel_pos.x,
            info.rel_pos.y
        );
    }

    let tight = settings.with_max_radius(0.2);
    let clamped = layout(&root, tight, &mut rng).unwrap();
    for warning in clamped.warnings() {
        let LayoutWarning::RadiusLimitReached { node, .. } = warning;
        let name = clamped.get(*node).map_or("?", |info| info.node.name);
        println!("{name}: {warning}");
    }

    // Settings are validated before anything is laid out.
    let invalid = LayoutSettings::new(-1.0, 0.05);
    match layout(&root, invalid, &mut rng) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("rejected: {err}"),
    }
}
