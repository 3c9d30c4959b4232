//! Dungeon layout system
//!
//! Partition tree, rooms, corridors, and wall classification.

mod corridor;
mod grid;
mod layout;
mod partition;
mod room;
mod tree;
mod walls;

pub use corridor::{Corridor, connect_tree};
pub use grid::{CARDINAL_DIRECTIONS, EIGHT_DIRECTIONS, GridPoint, Region};
pub use layout::DungeonLayout;
pub use partition::Partitioner;
pub use room::{Room, carve_rooms};
pub use tree::{NodeId, SpaceTree, SpaceTreeNode};
pub use walls::{
    CardinalMask, CompassMask, WallType, classify_cardinal, classify_diagonal, classify_walls,
};
