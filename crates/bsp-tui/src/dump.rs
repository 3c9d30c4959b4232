//! Stable JSON export of a layout

use serde::Serialize;

use bsp_core::dungeon::{DungeonLayout, GridPoint, Region, WallType};

#[derive(Serialize)]
struct RoomDump {
    center: GridPoint,
    size: GridPoint,
}

#[derive(Serialize)]
struct CorridorDump {
    start: GridPoint,
    end: GridPoint,
    width: i32,
}

#[derive(Serialize)]
struct WallDump {
    pos: GridPoint,
    wall: WallType,
}

/// Serializable snapshot of a layout with deterministic cell ordering
#[derive(Serialize)]
pub struct LayoutDump {
    seed: u64,
    bounds: Region,
    rooms: Vec<RoomDump>,
    corridors: Vec<CorridorDump>,
    floor: Vec<GridPoint>,
    walls: Vec<WallDump>,
}

impl LayoutDump {
    pub fn new(layout: &DungeonLayout) -> Self {
        let rooms = layout
            .rooms
            .iter()
            .map(|r| RoomDump {
                center: r.center,
                size: r.size,
            })
            .collect();
        let corridors = layout
            .corridors
            .iter()
            .map(|c| CorridorDump {
                start: c.start,
                end: c.end,
                width: c.width(),
            })
            .collect();

        let mut floor: Vec<GridPoint> = layout.floor.iter().copied().collect();
        floor.sort_by_key(|p| (p.z, p.x));

        let mut walls: Vec<WallDump> = layout
            .walls
            .iter()
            .map(|(&pos, &wall)| WallDump { pos, wall })
            .collect();
        walls.sort_by_key(|w| (w.pos.z, w.pos.x));

        Self {
            seed: layout.seed,
            bounds: layout.bounds,
            rooms,
            corridors,
            floor,
            walls,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsp_core::GenConfig;

    #[test]
    fn test_dump_is_stable_across_runs() {
        let config = GenConfig::default();
        let a = LayoutDump::new(&DungeonLayout::generate(&config, 42))
            .to_json()
            .unwrap();
        let b = LayoutDump::new(&DungeonLayout::generate(&config, 42))
            .to_json()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dump_carries_seed_and_counts() {
        let config = GenConfig::default();
        let layout = DungeonLayout::generate(&config, 7);
        let json = LayoutDump::new(&layout).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 7);
        assert_eq!(
            value["rooms"].as_array().unwrap().len(),
            layout.rooms.len()
        );
        assert_eq!(
            value["walls"].as_array().unwrap().len(),
            layout.walls.len()
        );
    }
}
