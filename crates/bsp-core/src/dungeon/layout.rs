//! Layout assembly
//!
//! One generation run: partition the map, carve rooms, connect corridors,
//! union the floor, classify walls. Everything is rebuilt from scratch on
//! every request; nothing is updated incrementally.

use std::collections::{HashMap, HashSet};

use crate::config::GenConfig;
use crate::painter::TilePainter;
use crate::rng::LayoutRng;

use super::corridor::{Corridor, connect_tree};
use super::grid::{GridPoint, Region};
use super::partition::Partitioner;
use super::room::{Room, carve_rooms};
use super::tree::SpaceTree;
use super::walls::{WallType, classify_walls};

/// Complete result of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonLayout {
    pub bounds: Region,
    pub tree: SpaceTree,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    /// Union of all room and corridor floor cells
    pub floor: HashSet<GridPoint>,
    /// Every in-bounds non-floor cell, labeled with its boundary shape
    pub walls: HashMap<GridPoint, WallType>,
    pub seed: u64,
}

impl DungeonLayout {
    /// Run the full pipeline with a fresh RNG for `seed`.
    ///
    /// The same seed and configuration always produce an identical layout.
    pub fn generate(config: &GenConfig, seed: u64) -> Self {
        Self::generate_with(config, &mut LayoutRng::new(seed))
    }

    /// Like [`DungeonLayout::generate`], drawing from a caller-managed RNG
    pub fn generate_with(config: &GenConfig, rng: &mut LayoutRng) -> Self {
        let bounds = Region::new(GridPoint::new(0, 0), config.map_size);
        let tree = Partitioner::new(config).build(bounds, rng);
        let rooms = carve_rooms(&tree, config, rng);
        let corridors = connect_tree(&tree, config.corridor_width);

        let mut floor = HashSet::new();
        for room in &rooms {
            floor.extend(room.floor.iter().copied());
        }
        for corridor in &corridors {
            floor.extend(corridor.floor.iter().copied());
        }

        let walls = classify_walls(&floor, bounds);

        Self {
            bounds,
            tree,
            rooms,
            corridors,
            floor,
            walls,
            seed: rng.seed(),
        }
    }

    /// A uniformly random cell inside a random room, for placing spawns.
    ///
    /// Returns `None` when the layout has no rooms.
    pub fn random_room_cell(&self, rng: &mut LayoutRng) -> Option<GridPoint> {
        if self.rooms.is_empty() {
            return None;
        }
        let room = &self.rooms[rng.index(self.rooms.len())];
        let dx = rng.range(-room.size.x / 2, room.size.x / 2);
        let dz = rng.range(-room.size.z / 2, room.size.z / 2);
        Some(GridPoint::new(room.center.x + dx, room.center.z + dz))
    }

    /// Hand the finished layout to a painter: clear, then the floor set,
    /// then every classified wall cell including `None` filler.
    pub fn paint(&self, painter: &mut dyn TilePainter) {
        painter.clear_all();
        painter.paint_floor(&self.floor);
        for (&pos, &wall) in &self.walls {
            painter.paint_wall(pos, wall);
        }
    }
}
