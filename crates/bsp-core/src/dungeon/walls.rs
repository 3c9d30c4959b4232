//! Wall-boundary classification over the dungeon floor
//!
//! Two candidate passes assign a shape to every cell bordering the floor: a
//! cardinal pass for cells sharing an edge with the floor, then a diagonal
//! pass for cells touching it only corner-to-corner. Each candidate's
//! neighbor occupancy is packed into a bitmask (first direction in the most
//! significant bit) and looked up in fixed pattern tables. A final pass
//! labels every remaining in-bounds cell `None` so renderers get complete
//! coverage.

use std::collections::{HashMap, HashSet};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::grid::{CARDINAL_DIRECTIONS, EIGHT_DIRECTIONS, GridPoint, Region};

/// Boundary shape of a wall cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WallType {
    /// Solid filler with no visible face
    #[default]
    None = 0,
    /// Interior-facing solid block
    Full = 1,
    Top = 2,
    Right = 3,
    Bottom = 4,
    Left = 5,
    OuterTopLeft = 6,
    OuterTopRight = 7,
    OuterBottomLeft = 8,
    OuterBottomRight = 9,
    InnerTopLeft = 10,
    InnerTopRight = 11,
    InnerBottomLeft = 12,
    InnerBottomRight = 13,
}

impl WallType {
    /// Check if this is a straight edge
    pub const fn is_edge(&self) -> bool {
        matches!(
            self,
            WallType::Top | WallType::Right | WallType::Bottom | WallType::Left
        )
    }

    /// Check if this is a corner shape (outer or inner)
    pub const fn is_corner(&self) -> bool {
        (*self as u8) >= 6
    }
}

bitflags! {
    /// Cardinal neighbor occupancy; `UP` is the most significant bit so a
    /// mask reads in classification order up, right, down, left.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CardinalMask: u8 {
        const UP = 0b1000;
        const RIGHT = 0b0100;
        const DOWN = 0b0010;
        const LEFT = 0b0001;
    }
}

bitflags! {
    /// Eight-direction neighbor occupancy in classification order up,
    /// up-right, right, right-down, down, down-left, left, left-up; `UP` is
    /// the most significant bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CompassMask: u8 {
        const UP = 0b1000_0000;
        const UP_RIGHT = 0b0100_0000;
        const RIGHT = 0b0010_0000;
        const RIGHT_DOWN = 0b0001_0000;
        const DOWN = 0b0000_1000;
        const DOWN_LEFT = 0b0000_0100;
        const LEFT = 0b0000_0010;
        const LEFT_UP = 0b0000_0001;
    }
}

// Pattern tables for the cardinal pass. Each entry is a 4-bit occupancy
// mask; membership decides the shape, first match wins.
const TOP_EDGE: [u8; 5] = [0b0010, 0b1010, 0b1110, 0b1011, 0b0111];
const RIGHT_EDGE: [u8; 1] = [0b0001];
const BOTTOM_EDGE: [u8; 1] = [0b1000];
const LEFT_EDGE: [u8; 1] = [0b0100];
const OUTER_BOTTOM_LEFT: [u8; 1] = [0b1100];
const OUTER_BOTTOM_RIGHT: [u8; 1] = [0b1001];
const OUTER_TOP_LEFT: [u8; 1] = [0b0110];
const OUTER_TOP_RIGHT: [u8; 1] = [0b0011];

// Pattern tables for the diagonal pass, 8-bit occupancy masks.
const INNER_BOTTOM_LEFT: [u8; 1] = [0b0100_0000];
const INNER_BOTTOM_RIGHT: [u8; 1] = [0b0000_0001];
const INNER_TOP_LEFT: [u8; 2] = [0b0001_0000, 0b0101_0000];
const INNER_TOP_RIGHT: [u8; 2] = [0b0000_0100, 0b0000_0101];

/// Patterns enclosed enough that no face shows. The table is lookup data
/// tuned against the tile set, not a formula; entries appear exactly as
/// tuned, including the repeats.
const ENCLOSED: [u8; 34] = [
    0b0001_0100,
    0b1110_0100,
    0b1001_0011,
    0b0111_0100,
    0b0001_0111,
    0b0001_0110,
    0b0011_0100,
    0b0001_0101,
    0b0101_0100,
    0b0001_0010,
    0b0010_0100,
    0b0001_0011,
    0b0110_0100,
    0b1001_0111,
    0b1111_0100,
    0b1001_0110,
    0b1011_0100,
    0b1110_0101,
    0b1101_0011,
    0b1111_0101,
    0b1101_0111,
    0b1101_0111,
    0b1111_0101,
    0b0111_0101,
    0b0101_0111,
    0b0110_0101,
    0b0101_0011,
    0b0101_0010,
    0b0010_0101,
    0b0011_0101,
    0b0101_0110,
    0b1101_0101,
    0b1101_0100,
    0b1001_0101,
];

const BOTTOM_EDGE_DIAGONAL: [u8; 1] = [0b0100_0001];

/// Pack a cell's cardinal neighbor occupancy into a mask
fn cardinal_mask(floor: &HashSet<GridPoint>, pos: GridPoint) -> CardinalMask {
    let mut bits = 0u8;
    for dir in CARDINAL_DIRECTIONS {
        bits <<= 1;
        if floor.contains(&(pos + dir)) {
            bits |= 1;
        }
    }
    CardinalMask::from_bits_retain(bits)
}

/// Pack a cell's eight-direction neighbor occupancy into a mask
fn compass_mask(floor: &HashSet<GridPoint>, pos: GridPoint) -> CompassMask {
    let mut bits = 0u8;
    for dir in EIGHT_DIRECTIONS {
        bits <<= 1;
        if floor.contains(&(pos + dir)) {
            bits |= 1;
        }
    }
    CompassMask::from_bits_retain(bits)
}

/// Shape for a cardinal wall candidate; unmatched patterns face the
/// interior and classify as `Full`
pub fn classify_cardinal(mask: CardinalMask) -> WallType {
    let bits = mask.bits();
    if TOP_EDGE.contains(&bits) {
        WallType::Top
    } else if RIGHT_EDGE.contains(&bits) {
        WallType::Right
    } else if BOTTOM_EDGE.contains(&bits) {
        WallType::Bottom
    } else if LEFT_EDGE.contains(&bits) {
        WallType::Left
    } else if OUTER_BOTTOM_LEFT.contains(&bits) {
        WallType::OuterBottomLeft
    } else if OUTER_BOTTOM_RIGHT.contains(&bits) {
        WallType::OuterBottomRight
    } else if OUTER_TOP_LEFT.contains(&bits) {
        WallType::OuterTopLeft
    } else if OUTER_TOP_RIGHT.contains(&bits) {
        WallType::OuterTopRight
    } else {
        WallType::Full
    }
}

/// Shape for a diagonal wall candidate; unmatched patterns classify as
/// `None`
pub fn classify_diagonal(mask: CompassMask) -> WallType {
    let bits = mask.bits();
    if INNER_BOTTOM_LEFT.contains(&bits) {
        WallType::InnerBottomLeft
    } else if INNER_BOTTOM_RIGHT.contains(&bits) {
        WallType::InnerBottomRight
    } else if INNER_TOP_LEFT.contains(&bits) {
        WallType::InnerTopLeft
    } else if INNER_TOP_RIGHT.contains(&bits) {
        WallType::InnerTopRight
    } else if ENCLOSED.contains(&bits) {
        WallType::None
    } else if BOTTOM_EDGE_DIAGONAL.contains(&bits) {
        WallType::Bottom
    } else {
        WallType::None
    }
}

/// Non-floor neighbors of the floor in the given directions, skipping cells
/// already claimed by an earlier pass
fn wall_candidates(
    floor: &HashSet<GridPoint>,
    directions: &[GridPoint],
    claimed: &HashMap<GridPoint, WallType>,
) -> HashSet<GridPoint> {
    let mut candidates = HashSet::new();
    for &pos in floor {
        for &dir in directions {
            let neighbor = pos + dir;
            if !floor.contains(&neighbor) && !claimed.contains_key(&neighbor) {
                candidates.insert(neighbor);
            }
        }
    }
    candidates
}

/// Assign a wall type to every boundary cell of the floor, then label every
/// other in-bounds cell `None`.
///
/// Coverage spans `min..=min+size` on both axes so the filler reaches one
/// cell past the last floor column and row.
pub fn classify_walls(
    floor: &HashSet<GridPoint>,
    bounds: Region,
) -> HashMap<GridPoint, WallType> {
    let mut walls = HashMap::new();

    for pos in wall_candidates(floor, &CARDINAL_DIRECTIONS, &walls) {
        walls.insert(pos, classify_cardinal(cardinal_mask(floor, pos)));
    }
    for pos in wall_candidates(floor, &EIGHT_DIRECTIONS, &walls) {
        walls.insert(pos, classify_diagonal(compass_mask(floor, pos)));
    }

    for x in bounds.min.x..=bounds.min.x + bounds.size.x {
        for z in bounds.min.z..=bounds.min.z + bounds.size.z {
            let pos = GridPoint::new(x, z);
            if !floor.contains(&pos) {
                walls.entry(pos).or_insert(WallType::None);
            }
        }
    }

    walls
}
