//! Collaborator boundary for consumers of a finished layout

use std::collections::HashSet;

use crate::dungeon::{GridPoint, WallType};

/// Sink for the cells of a finished layout
///
/// Implemented by tile renderers, collider builders, or anything else that
/// consumes the floor set and the classified wall cells. `clear_all` runs
/// before repainting so a regeneration fully replaces prior output.
pub trait TilePainter {
    /// Discard everything painted by a previous run
    fn clear_all(&mut self);

    /// Consume the finished dungeon-floor cell set
    fn paint_floor(&mut self, floor: &HashSet<GridPoint>);

    /// Consume one classified wall cell (including `None` filler cells)
    fn paint_wall(&mut self, pos: GridPoint, wall: WallType);
}
