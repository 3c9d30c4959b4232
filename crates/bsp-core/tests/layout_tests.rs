use std::collections::HashSet;

use proptest::prelude::*;

use bsp_core::dungeon::{DungeonLayout, EIGHT_DIRECTIONS, GridPoint, Partitioner, Region};
use bsp_core::{GenConfig, LayoutRng};

fn config(
    map: (i32, i32),
    min_room: (i32, i32),
    corridor_width: i32,
    offset: i32,
    iterations: u32,
) -> GenConfig {
    GenConfig {
        map_size: GridPoint::new(map.0, map.1),
        min_room_size: GridPoint::new(min_room.0, min_room.1),
        corridor_width,
        offset,
        max_iterations: iterations,
    }
}

#[test]
fn test_reference_scenario_20x20() {
    let config = config((20, 20), (4, 4), 1, 2, 3);
    let layout = DungeonLayout::generate(&config, 12345);

    assert!(layout.tree.depth() <= 3);
    assert!(!layout.rooms.is_empty());
    for corridor in &layout.corridors {
        assert_eq!(corridor.width(), 1);
        // A unit-wide corridor never contains a full 2x2 block.
        for &cell in &corridor.floor {
            let block = [
                GridPoint::new(cell.x + 1, cell.z),
                GridPoint::new(cell.x, cell.z + 1),
                GridPoint::new(cell.x + 1, cell.z + 1),
            ];
            assert!(!block.iter().all(|c| corridor.floor.contains(c)));
        }
    }
}

#[test]
fn test_no_space_branch_contributes_nothing() {
    let config = config((5, 5), (6, 6), 1, 2, 3);
    let partitioner = Partitioner::new(&config);
    let region = Region::new(GridPoint::new(0, 0), GridPoint::new(5, 5));

    assert!(partitioner.no_space_for_room(&region));

    let layout = DungeonLayout::generate(&config, 777);
    assert!(layout.rooms.is_empty());
    assert!(layout.corridors.is_empty());
}

#[test]
fn test_rooms_sit_inside_their_leaf_regions() {
    let config = config((60, 40), (4, 4), 1, 2, 4);

    for seed in 0..10 {
        let layout = DungeonLayout::generate(&config, seed);
        let leaves = layout.tree.leaves();
        assert_eq!(layout.rooms.len(), leaves.len());

        for (room, &leaf) in layout.rooms.iter().zip(&leaves) {
            let region = layout.tree.node(leaf).region;
            for &cell in &room.floor {
                assert!(region.contains(cell));
            }
        }
    }
}

#[test]
fn test_sibling_leaf_floors_are_disjoint() {
    let config = config((60, 40), (4, 4), 1, 2, 4);

    for seed in 0..10 {
        let layout = DungeonLayout::generate(&config, seed);
        for (i, a) in layout.rooms.iter().enumerate() {
            for b in layout.rooms.iter().skip(i + 1) {
                assert!(a.floor.is_disjoint(&b.floor));
            }
        }
    }
}

#[test]
fn test_corridors_touch_start_and_end_rows() {
    let config = config((60, 40), (4, 4), 2, 2, 4);
    let layout = DungeonLayout::generate(&config, 4242);

    for corridor in &layout.corridors {
        // The z-leg runs in the start's column, the x-leg along the end's
        // row, and the dig always reaches the end cell itself.
        assert!(corridor.floor.iter().any(|c| c.x == corridor.start.x));
        assert!(corridor.floor.iter().any(|c| c.z == corridor.end.z));
        assert!(corridor.floor.contains(&corridor.end));
    }
}

proptest! {
    #[test]
    fn prop_same_seed_reproduces_layout(seed in any::<u64>()) {
        let config = config((32, 24), (4, 4), 1, 2, 3);
        let a = DungeonLayout::generate(&config, seed);
        let b = DungeonLayout::generate(&config, seed);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_partition_children_tile_parent(
        seed in any::<u64>(),
        width in 16i32..80,
        depth in 16i32..60,
    ) {
        let config = config((width, depth), (4, 4), 1, 2, 5);
        let layout = DungeonLayout::generate(&config, seed);
        let tree = &layout.tree;

        for id in tree.preorder() {
            let node = tree.node(id);
            if node.has_two_children() {
                let left = tree.node(node.left.unwrap()).region;
                let right = tree.node(node.right.unwrap()).region;
                prop_assert!(!left.intersects(&right));
                prop_assert_eq!(left.area() + right.area(), node.region.area());
            }
        }
    }

    #[test]
    fn prop_every_floor_neighbor_is_labeled(seed in any::<u64>()) {
        let config = config((32, 24), (4, 4), 1, 2, 3);
        let layout = DungeonLayout::generate(&config, seed);

        for &pos in &layout.floor {
            for dir in EIGHT_DIRECTIONS {
                let neighbor = pos + dir;
                if !layout.floor.contains(&neighbor) {
                    prop_assert!(layout.walls.contains_key(&neighbor));
                }
            }
        }
        for cell in &layout.floor {
            prop_assert!(!layout.walls.contains_key(cell));
        }
    }

    #[test]
    fn prop_corridor_floors_are_connected(seed in any::<u64>(), width in 1i32..=4) {
        let config = config((48, 32), (4, 4), width, 2, 4);
        let layout = DungeonLayout::generate(&config, seed);

        for corridor in &layout.corridors {
            let mut seen = HashSet::new();
            let first = *corridor.floor.iter().next().unwrap();
            let mut queue = vec![first];
            seen.insert(first);
            while let Some(cell) = queue.pop() {
                for dir in bsp_core::dungeon::CARDINAL_DIRECTIONS {
                    let next = cell + dir;
                    if corridor.floor.contains(&next) && seen.insert(next) {
                        queue.push(next);
                    }
                }
            }
            prop_assert_eq!(seen.len(), corridor.floor.len());
        }
    }

    #[test]
    fn prop_zero_rooms_is_a_valid_outcome(seed in any::<u64>()) {
        // Shrinking the map below the minimum room must not panic.
        let config = config((5, 5), (6, 6), 1, 2, 3);
        let layout = DungeonLayout::generate(&config, seed);
        prop_assert!(layout.rooms.is_empty());
        prop_assert!(layout.floor.is_empty());
    }
}

#[test]
fn test_caller_managed_rng_matches_seeded_generate() {
    let config = config((32, 24), (4, 4), 1, 2, 3);
    let mut rng = LayoutRng::new(99);
    let a = DungeonLayout::generate_with(&config, &mut rng);
    let b = DungeonLayout::generate(&config, 99);
    assert_eq!(a, b);
}
