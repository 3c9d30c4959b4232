//! Room derivation from leaf regions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::GenConfig;
use crate::rng::LayoutRng;

use super::grid::GridPoint;
use super::tree::SpaceTree;

/// A rectangular room on the floor grid
///
/// Built once from a leaf region and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub center: GridPoint,
    pub size: GridPoint,
    /// Cells covered by the room
    pub floor: HashSet<GridPoint>,
}

impl Room {
    /// Fill the rectangle spanned by `center ± size/2` on each axis
    /// (integer halves, inclusive bounds on both ends).
    pub fn new(center: GridPoint, size: GridPoint) -> Self {
        let mut floor = HashSet::new();
        for x in (center.x - size.x / 2)..=(center.x + size.x / 2) {
            for z in (center.z - size.z / 2)..=(center.z + size.z / 2) {
                floor.insert(GridPoint::new(x, z));
            }
        }
        Self { center, size, floor }
    }
}

/// Carve one room per leaf region, visited in preorder.
///
/// Each axis of the room size is drawn uniformly from
/// `[min_room_size, region_size - offset)`; a degenerate range falls back to
/// the minimum. The room is centered on the leaf region's center cell.
pub fn carve_rooms(tree: &SpaceTree, config: &GenConfig, rng: &mut LayoutRng) -> Vec<Room> {
    let mut rooms = Vec::new();
    for id in tree.leaves() {
        let region = tree.node(id).region;
        let sx = rng.range(config.min_room_size.x, region.size.x - config.offset);
        let sz = rng.range(config.min_room_size.z, region.size.z - config.offset);
        rooms.push(Room::new(region.center(), GridPoint::new(sx, sz)));
    }
    rooms
}
