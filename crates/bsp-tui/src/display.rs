//! Glyph and color mapping for layout cells

use std::collections::HashSet;

use ratatui::style::Color;

use bsp_core::TilePainter;
use bsp_core::dungeon::{GridPoint, Region, WallType};

/// Glyph painted for floor cells
pub const FLOOR_GLYPH: char = '.';

/// ASCII glyph for a wall shape
pub fn wall_glyph(wall: WallType) -> char {
    match wall {
        WallType::None => ' ',
        WallType::Full => '#',
        WallType::Top | WallType::Bottom => '-',
        WallType::Left | WallType::Right => '|',
        WallType::OuterTopLeft
        | WallType::OuterTopRight
        | WallType::OuterBottomLeft
        | WallType::OuterBottomRight
        | WallType::InnerTopLeft
        | WallType::InnerTopRight
        | WallType::InnerBottomLeft
        | WallType::InnerBottomRight => '+',
    }
}

/// Display color for a wall shape
pub fn wall_color(wall: WallType) -> Color {
    match wall {
        WallType::None => Color::Black,
        WallType::Full => Color::DarkGray,
        _ if wall.is_corner() => Color::Yellow,
        _ => Color::Gray,
    }
}

/// Character-grid painter
///
/// Renders a layout into rows of text. Covers the map bounds plus a one-cell
/// apron for the walls the neighbor passes place just outside them; cells
/// painted beyond that are ignored.
pub struct CharGrid {
    origin: GridPoint,
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn new(bounds: Region) -> Self {
        let origin = GridPoint::new(bounds.min.x - 1, bounds.min.z - 1);
        // Filler runs min..=min+size, so the covered span is size+1 cells
        // plus the apron on each side.
        let width = bounds.size.x + 3;
        let height = bounds.size.z + 3;
        Self {
            origin,
            width,
            height,
            cells: vec![' '; (width * height) as usize],
        }
    }

    fn index(&self, pos: GridPoint) -> Option<usize> {
        let dx = pos.x - self.origin.x;
        let dz = pos.z - self.origin.z;
        if dx < 0 || dz < 0 || dx >= self.width || dz >= self.height {
            return None;
        }
        Some((dz * self.width + dx) as usize)
    }

    fn set(&mut self, pos: GridPoint, glyph: char) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = glyph;
        }
    }

    /// Rows top-down for printing; the grid's z axis grows upward
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .rev()
            .map(|z| {
                (0..self.width)
                    .map(|x| self.cells[(z * self.width + x) as usize])
                    .collect()
            })
            .collect()
    }
}

impl TilePainter for CharGrid {
    fn clear_all(&mut self) {
        self.cells.fill(' ');
    }

    fn paint_floor(&mut self, floor: &HashSet<GridPoint>) {
        for &pos in floor {
            self.set(pos, FLOOR_GLYPH);
        }
    }

    fn paint_wall(&mut self, pos: GridPoint, wall: WallType) {
        self.set(pos, wall_glyph(wall));
    }
}
