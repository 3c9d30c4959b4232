//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use bsp_core::dungeon::{DungeonLayout, GridPoint};

use crate::display::{FLOOR_GLYPH, wall_color, wall_glyph};

/// Widget for rendering a dungeon layout
pub struct MapWidget<'a> {
    layout: &'a DungeonLayout,
}

impl<'a> MapWidget<'a> {
    pub fn new(layout: &'a DungeonLayout) -> Self {
        Self { layout }
    }

    fn cell_display(&self, pos: GridPoint) -> (char, Style) {
        if self.layout.floor.contains(&pos) {
            return (FLOOR_GLYPH, Style::default().fg(Color::White));
        }
        if let Some(&wall) = self.layout.walls.get(&pos) {
            return (wall_glyph(wall), Style::default().fg(wall_color(wall)));
        }
        (' ', Style::default())
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Dungeon");

        let inner = block.inner(area);
        block.render(area, buf);

        let bounds = self.layout.bounds;
        // One-cell apron around the bounds; top screen row shows the
        // highest z (the grid's z axis grows upward).
        let origin = GridPoint::new(bounds.min.x - 1, bounds.min.z - 1);
        let top_z = bounds.min.z + bounds.size.z + 1;
        let cols = (bounds.size.x + 3).min(inner.width as i32);
        let rows = (bounds.size.z + 3).min(inner.height as i32);

        for row in 0..rows {
            for col in 0..cols {
                let pos = GridPoint::new(origin.x + col, top_z - row);
                let (ch, style) = self.cell_display(pos);
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + col as u16, inner.y + row as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
