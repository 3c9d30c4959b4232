//! bsp-tui: Terminal viewer using ratatui
//!
//! Renders generated dungeon layouts in the terminal, with plain-ASCII and
//! JSON dump modes for scripting.

pub mod app;
pub mod display;
pub mod dump;
pub mod widgets;

pub use app::App;
pub use display::CharGrid;
