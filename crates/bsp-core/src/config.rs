//! Generation parameters and up-front validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::GridPoint;

/// Narrowest corridor band the digger supports
pub const MIN_CORRIDOR_WIDTH: i32 = 1;

/// Widest corridor band the digger supports
pub const MAX_CORRIDOR_WIDTH: i32 = 4;

/// Smallest allowed clearance between rooms and partition boundaries
pub const MIN_OFFSET: i32 = 1;

/// Largest allowed clearance between rooms and partition boundaries
pub const MAX_OFFSET: i32 = 10;

/// Parameters for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Overall map extent in cells
    pub map_size: GridPoint,
    /// Smallest room footprint a leaf region may host
    pub min_room_size: GridPoint,
    /// Corridor band width in cells
    pub corridor_width: i32,
    /// Clearance subtracted from a region's size before a room may fit
    pub offset: i32,
    /// Maximum partition recursion depth
    pub max_iterations: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            map_size: GridPoint::new(60, 40),
            min_room_size: GridPoint::new(4, 4),
            corridor_width: 1,
            offset: 2,
            max_iterations: 4,
        }
    }
}

/// Configuration the generator cannot meaningfully interpret
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map size must be positive on both axes, got {0}x{1}")]
    MapSizeNotPositive(i32, i32),

    #[error("minimum room size must be positive on both axes, got {0}x{1}")]
    RoomSizeNotPositive(i32, i32),

    #[error("corridor width must be in 1..=4, got {0}")]
    CorridorWidthOutOfRange(i32),

    #[error("offset must be in 1..=10, got {0}")]
    OffsetOutOfRange(i32),
}

impl GenConfig {
    /// Reject configurations outside the supported parameter ranges.
    ///
    /// An accepted configuration may still produce zero rooms (for example a
    /// map smaller than the minimum room plus clearance); callers must treat
    /// an empty layout as a valid outcome, not an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_size.x <= 0 || self.map_size.z <= 0 {
            return Err(ConfigError::MapSizeNotPositive(
                self.map_size.x,
                self.map_size.z,
            ));
        }
        if self.min_room_size.x <= 0 || self.min_room_size.z <= 0 {
            return Err(ConfigError::RoomSizeNotPositive(
                self.min_room_size.x,
                self.min_room_size.z,
            ));
        }
        if !(MIN_CORRIDOR_WIDTH..=MAX_CORRIDOR_WIDTH).contains(&self.corridor_width) {
            return Err(ConfigError::CorridorWidthOutOfRange(self.corridor_width));
        }
        if !(MIN_OFFSET..=MAX_OFFSET).contains(&self.offset) {
            return Err(ConfigError::OffsetOutOfRange(self.offset));
        }
        Ok(())
    }
}
