// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cone tree layout of a source tree.
//!
//! Files and folders get different leaf radii. The layout is printed with absolute
//! positions per level, plus the height a renderer would stack the levels to.
//!
//! Run:
//! - `cargo run -p understory_demos --example cone_tree_file_tree`

use understory_cone_tree::{ConeTreeLayout, LayoutSettings, PosId, TreeNode};

const FILE_RADIUS: f64 = 0.06;
const FOLDER_RADIUS: f64 = 0.1;
const LEVEL_SPACING: f64 = 0.5;

#[derive(Debug)]
enum Entry {
    File(&'static str),
    Folder(&'static str, Vec<Entry>),
}

impl Entry {
    fn name(&self) -> &'static str {
        match self {
            Self::File(name) | Self::Folder(name, _) => *name,
        }
    }
}

impl TreeNode for Entry {
    fn children(&self) -> impl Iterator<Item = &Self> {
        let entries: &[Self] = match self {
            Self::File(_) => &[],
            Self::Folder(_, entries) => entries,
        };
        entries.iter()
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

fn source_tree() -> Entry {
    use Entry::{File, Folder};
    Folder(
        "project",
        vec![
            File("Cargo.toml"),
            File("README.md"),
            Folder(
                "src",
                vec![
                    File("lib.rs"),
                    File("error.rs"),
                    Folder(
                        "layout",
                        vec![File("mod.rs"), File("placement.rs"), File("tree.rs")],
                    ),
                    Folder("io", vec![File("mod.rs")]),
                ],
            ),
            Folder("tests", vec![File("smoke.rs"), File("scenarios.rs")]),
            Folder("assets", vec![]),
        ],
    )
}

fn main() {
    let root = source_tree();
    let settings = LayoutSettings::new(0.05, 0.05)
        .with_max_radius(2.0)
        .with_rotation_degrees(90.0);
    let layout = ConeTreeLayout::new(settings).with_leaf_radius(|e: &Entry| match e {
        Entry::File(_) => FILE_RADIUS,
        Entry::Folder(..) => FOLDER_RADIUS,
    });
    let tree = layout.layout_seeded(&root, 2025).unwrap();

    let positions = tree.absolute_positions();
    for level in 0..=tree.tree_levels() {
        println!("level {level}:");
        for (id, info) in tree.level(level) {
            let p = positions[id.index()];
            let parent = tree
                .parent(id)
                .and_then(|p| tree.get(p))
                .map_or("-", |p| p.node.name());
            println!(
                "  {:<14} parent={:<8} radius={:.3} at ({:.3}, {:.3})",
                info.node.name(),
                parent,
                info.radius,
                p.x,
                p.y
            );
        }
    }

    let height = tree.tree_levels() as f64 * LEVEL_SPACING;
    println!(
        "{} nodes, {} levels, footprint radius {:.3}, height {height:.2}",
        tree.len(),
        tree.tree_levels() + 1,
        tree.root().radius
    );
    println!("root children: {}", tree.children(PosId::ROOT).len());
    for warning in tree.warnings() {
        println!("warning: {warning}");
    }
}
