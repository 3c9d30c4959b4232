//! Dungeon layout viewer
//!
//! Generates a BSP dungeon layout and displays it in the terminal, or dumps
//! it as ASCII/JSON for scripting.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use bsp_core::dungeon::{DungeonLayout, GridPoint};
use bsp_core::{GenConfig, LayoutRng};
use bsp_tui::{App, CharGrid};
use bsp_tui::dump::LayoutDump;

/// Generate and explore BSP dungeon layouts
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Generate and explore BSP dungeon layouts", long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(long, default_value_t = 60)]
    width: i32,

    /// Map depth in cells
    #[arg(long, default_value_t = 40)]
    depth: i32,

    /// Minimum room width
    #[arg(long, default_value_t = 4)]
    min_room_width: i32,

    /// Minimum room depth
    #[arg(long, default_value_t = 4)]
    min_room_depth: i32,

    /// Corridor width in cells (1-4)
    #[arg(short = 'c', long, default_value_t = 1)]
    corridor_width: i32,

    /// Clearance between rooms and partition boundaries
    #[arg(short = 'o', long, default_value_t = 2)]
    offset: i32,

    /// Maximum partition depth
    #[arg(short = 'i', long, default_value_t = 4)]
    iterations: u32,

    /// Seed for reproducible layouts; random when omitted
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Print the layout as ASCII and exit
    #[arg(long)]
    ascii: bool,

    /// Dump the layout as JSON and exit
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> GenConfig {
        GenConfig {
            map_size: GridPoint::new(self.width, self.depth),
            min_room_size: GridPoint::new(self.min_room_width, self.min_room_depth),
            corridor_width: self.corridor_width,
            offset: self.offset,
            max_iterations: self.iterations,
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = args.config();
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {err}");
        std::process::exit(2);
    }

    let seed = args.seed.unwrap_or_else(|| LayoutRng::from_entropy().seed());

    if args.json {
        let layout = DungeonLayout::generate(&config, seed);
        let json = LayoutDump::new(&layout)
            .to_json()
            .map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    if args.ascii {
        let layout = DungeonLayout::generate(&config, seed);
        let mut grid = CharGrid::new(layout.bounds);
        layout.paint(&mut grid);
        for row in grid.rows() {
            println!("{row}");
        }
        eprintln!("seed: {seed}");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, seed);

    // Main loop
    let result = loop {
        if let Err(err) = terminal.draw(|frame| app.render(frame)) {
            break Err(err);
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if app.handle_event(event) {
                        break Ok(());
                    }
                }
                Err(err) => break Err(err),
            },
            Ok(false) => {}
            Err(err) => break Err(err),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}
