//! bsp-core: dungeon layout generation
//!
//! Recursive binary space partitioning over a rectangular map, one room per
//! leaf region, L-shaped corridors joining sibling subtrees, and
//! bitmask-table wall classification over the resulting floor set.
//!
//! This crate is pure computation with no I/O dependencies. Frontends consume
//! a finished [`dungeon::DungeonLayout`] directly or through the
//! [`TilePainter`] boundary.

pub mod config;
pub mod dungeon;
pub mod painter;

mod rng;

pub use config::{ConfigError, GenConfig};
pub use painter::TilePainter;
pub use rng::LayoutRng;
