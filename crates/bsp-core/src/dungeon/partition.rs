//! Recursive binary space partitioning
//!
//! Splits the map region along its larger axis at a random cut until regions
//! can no longer host two rooms side by side or the depth limit is reached.
//! Regions too small for even one room are dropped, so a branch may die while
//! its sibling survives.

use crate::config::GenConfig;
use crate::rng::LayoutRng;

use super::grid::Region;
use super::tree::{NodeId, SpaceTree};

/// Builds a space tree from a map region
pub struct Partitioner<'a> {
    config: &'a GenConfig,
}

impl<'a> Partitioner<'a> {
    pub fn new(config: &'a GenConfig) -> Self {
        Self { config }
    }

    /// Partition `region` into a space tree.
    ///
    /// Returns an empty tree when the region cannot host a single room;
    /// callers must treat that as a valid outcome.
    pub fn build(&self, region: Region, rng: &mut LayoutRng) -> SpaceTree {
        let mut tree = SpaceTree::new();
        self.split(&mut tree, region, 0, rng);
        tree
    }

    fn split(
        &self,
        tree: &mut SpaceTree,
        region: Region,
        depth: u32,
        rng: &mut LayoutRng,
    ) -> Option<NodeId> {
        if self.no_space_for_room(&region) {
            return None;
        }

        let id = tree.alloc(region);
        if self.can_divide(&region, depth) {
            // Cut the larger axis; the cut point ignores room minima, so a
            // half may come up short and its branch returns None.
            let (a, b) = if region.size.x >= region.size.z {
                region.split_x(rng.range(1, region.size.x))
            } else {
                region.split_z(rng.range(1, region.size.z))
            };
            let left = self.split(tree, a, depth + 1, rng);
            let right = self.split(tree, b, depth + 1, rng);
            tree.set_children(id, left, right);
        }
        Some(id)
    }

    /// True when not even a minimum room plus clearance fits the region
    pub fn no_space_for_room(&self, region: &Region) -> bool {
        let min = self.config.min_room_size;
        let offset = self.config.offset;
        region.size.x - offset < min.x || region.size.z - offset < min.z
    }

    /// True while two rooms could still sit side by side on either axis and
    /// the depth limit has not been reached
    pub fn can_divide(&self, region: &Region, depth: u32) -> bool {
        let min = self.config.min_room_size;
        let offset = self.config.offset;
        let size = region.size;

        let two_across_x = size.x >= 2 * (min.x + offset) && size.z >= min.z + offset;
        let two_across_z = size.x >= min.x + offset && size.z >= 2 * (min.z + offset);

        (two_across_x || two_across_z) && depth < self.config.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::GridPoint;

    fn config(map: (i32, i32), min_room: (i32, i32), offset: i32, iterations: u32) -> GenConfig {
        GenConfig {
            map_size: GridPoint::new(map.0, map.1),
            min_room_size: GridPoint::new(min_room.0, min_room.1),
            corridor_width: 1,
            offset,
            max_iterations: iterations,
        }
    }

    fn map_region(config: &GenConfig) -> Region {
        Region::new(GridPoint::new(0, 0), config.map_size)
    }

    #[test]
    fn test_region_too_small_yields_empty_tree() {
        let config = config((5, 5), (6, 6), 2, 3);
        let partitioner = Partitioner::new(&config);

        assert!(partitioner.no_space_for_room(&map_region(&config)));

        let mut rng = LayoutRng::new(1);
        let tree = partitioner.build(map_region(&config), &mut rng);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_undividable_region_yields_single_leaf() {
        // One room fits, two do not.
        let config = config((9, 9), (4, 4), 2, 3);
        let partitioner = Partitioner::new(&config);
        let mut rng = LayoutRng::new(7);

        let tree = partitioner.build(map_region(&config), &mut rng);
        assert_eq!(tree.len(), 1);
        let root = tree.root().unwrap();
        assert!(tree.node(root).is_leaf());
        assert_eq!(tree.node(root).region, map_region(&config));
    }

    #[test]
    fn test_depth_respects_iteration_limit() {
        let config = config((20, 20), (4, 4), 2, 3);
        let partitioner = Partitioner::new(&config);

        for seed in 0..50 {
            let mut rng = LayoutRng::new(seed);
            let tree = partitioner.build(map_region(&config), &mut rng);
            assert!(tree.depth() <= 3, "seed {seed}: depth {}", tree.depth());
            assert!(!tree.is_empty());
        }
    }

    #[test]
    fn test_children_tile_their_parent() {
        let config = config((64, 48), (4, 4), 2, 5);
        let partitioner = Partitioner::new(&config);
        let mut rng = LayoutRng::new(99);
        let tree = partitioner.build(map_region(&config), &mut rng);

        for id in tree.preorder() {
            let node = tree.node(id);
            if node.has_two_children() {
                let left = tree.node(node.left.unwrap()).region;
                let right = tree.node(node.right.unwrap()).region;
                assert!(!left.intersects(&right));
                assert_eq!(left.area() + right.area(), node.region.area());
            }
        }
    }

    #[test]
    fn test_leaves_fit_a_room() {
        let config = config((64, 48), (4, 4), 2, 5);
        let partitioner = Partitioner::new(&config);
        let mut rng = LayoutRng::new(3);
        let tree = partitioner.build(map_region(&config), &mut rng);

        for id in tree.leaves() {
            let region = tree.node(id).region;
            assert!(!partitioner.no_space_for_room(&region));
        }
    }

    #[test]
    fn test_zero_iterations_never_divides() {
        let config = config((64, 48), (4, 4), 2, 0);
        let partitioner = Partitioner::new(&config);
        let mut rng = LayoutRng::new(11);
        let tree = partitioner.build(map_region(&config), &mut rng);
        assert_eq!(tree.len(), 1);
    }
}
