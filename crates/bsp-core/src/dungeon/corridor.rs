//! Corridor derivation from the partition tree
//!
//! Every internal node joins its children's region centers to its own,
//! so sibling subtrees stay reachable through their shared ancestor.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::grid::GridPoint;
use super::tree::{NodeId, SpaceTree};

/// An L-shaped corridor between two cells
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub start: GridPoint,
    pub end: GridPoint,
    width: i32,
    /// Cells covered by the corridor band
    pub floor: HashSet<GridPoint>,
}

impl Corridor {
    /// Dig from `start` to `end`: sweep along z one cell at a time until the
    /// rows match, then along x, filling a `width`-cell band centered on the
    /// sweep position at every step. The band on the current row/column is
    /// filled even when no movement was needed, and the bend always lands at
    /// `(start.x, end.z)`.
    pub fn new(start: GridPoint, end: GridPoint, width: i32) -> Self {
        let mut floor = HashSet::new();
        let half = width / 2;

        let mut pos = start;
        loop {
            if end.z > pos.z {
                pos.z += 1;
            } else if end.z < pos.z {
                pos.z -= 1;
            }
            for x in (pos.x - half)..=(pos.x + half) {
                floor.insert(GridPoint::new(x, pos.z));
            }
            if pos.z == end.z {
                break;
            }
        }
        loop {
            if end.x > pos.x {
                pos.x += 1;
            } else if end.x < pos.x {
                pos.x -= 1;
            }
            for z in (pos.z - half)..=(pos.z + half) {
                floor.insert(GridPoint::new(pos.x, z));
            }
            if pos.x == end.x {
                break;
            }
        }

        Self {
            start,
            end,
            width,
            floor,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }
}

/// Create corridors for every internal node, children's subtrees first.
///
/// A node with two children gets two corridors (left center to node center,
/// node center to right center); a node with one live child gets one, from
/// the child's center to its own. Leaves contribute nothing.
pub fn connect_tree(tree: &SpaceTree, width: i32) -> Vec<Corridor> {
    let mut corridors = Vec::new();
    if let Some(root) = tree.root() {
        connect_node(tree, root, width, &mut corridors);
    }
    corridors
}

fn connect_node(tree: &SpaceTree, id: NodeId, width: i32, out: &mut Vec<Corridor>) {
    let node = tree.node(id);
    if let Some(left) = node.left {
        connect_node(tree, left, width, out);
    }
    if let Some(right) = node.right {
        connect_node(tree, right, width, out);
    }

    let center = node.region.center();
    match (node.left, node.right) {
        (Some(left), Some(right)) => {
            out.push(Corridor::new(tree.node(left).region.center(), center, width));
            out.push(Corridor::new(center, tree.node(right).region.center(), width));
        }
        (Some(left), None) => {
            out.push(Corridor::new(tree.node(left).region.center(), center, width));
        }
        (None, Some(right)) => {
            out.push(Corridor::new(
                tree.node(right).region.center(),
                center,
                width,
            ));
        }
        (None, None) => {}
    }
}
