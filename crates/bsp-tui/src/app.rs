//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use bsp_core::dungeon::DungeonLayout;
use bsp_core::{GenConfig, LayoutRng};

use crate::widgets::MapWidget;

/// Viewer state: the current layout and the configuration used to build it
pub struct App {
    config: GenConfig,
    layout: DungeonLayout,
}

impl App {
    pub fn new(config: GenConfig, seed: u64) -> Self {
        let layout = DungeonLayout::generate(&config, seed);
        Self { config, layout }
    }

    pub fn layout(&self) -> &DungeonLayout {
        &self.layout
    }

    /// Rebuild the layout with a fresh random seed
    pub fn regenerate(&mut self) {
        let mut rng = LayoutRng::from_entropy();
        self.layout = DungeonLayout::generate_with(&self.config, &mut rng);
    }

    /// Handle a terminal event; returns true when the app should quit
    pub fn handle_event(&mut self, event: Event) -> bool {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return false;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('r') => self.regenerate(),
                _ => {}
            }
        }
        false
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        frame.render_widget(MapWidget::new(&self.layout), chunks[0]);

        let status = Line::from(vec![
            Span::styled(
                format!(" seed {} ", self.layout.seed),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(
                "| {} rooms, {} corridors | ",
                self.layout.rooms.len(),
                self.layout.corridors.len()
            )),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(" regenerate  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[1]);
    }
}
