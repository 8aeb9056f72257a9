//! # TopBar Component
//!
//! Single-line app bar: an optional `[←]` back button and the screen title.
//!
//! TopBar is purely presentational. It receives all data as props and has no
//! internal state; the event loop asks it where the back button is
//! (`back_button_area`) to hit-test clicks.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;

const BACK_BUTTON: &str = "[←]";
const BACK_BUTTON_WIDTH: u16 = 3;

pub struct TopBar {
    /// Screen title (movie title on the detail screen, may be empty)
    pub title: String,
    /// Whether to offer the back action
    pub show_back: bool,
}

impl TopBar {
    pub fn new(title: impl Into<String>, show_back: bool) -> Self {
        Self {
            title: title.into(),
            show_back,
        }
    }

    /// Where the back button is drawn within `area`, if shown.
    pub fn back_button_area(&self, area: Rect) -> Option<Rect> {
        if !self.show_back || area.width < BACK_BUTTON_WIDTH || area.height == 0 {
            return None;
        }
        Some(Rect::new(area.x, area.y, BACK_BUTTON_WIDTH, 1))
    }
}

impl Component for TopBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(Color::Indexed(236));
        frame.render_widget(Paragraph::new("").style(bar_style), area);

        // Reserve the back button's width on both sides so the title stays centered
        let margin = BACK_BUTTON_WIDTH + 1;
        let title_area = Rect::new(
            area.x + margin.min(area.width),
            area.y,
            area.width.saturating_sub(margin * 2),
            area.height.min(1),
        );
        let title = truncate_to_width(&self.title, title_area.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .style(bar_style),
            title_area,
        );

        if let Some(back_area) = self.back_button_area(area) {
            frame.render_widget(
                Span::styled(BACK_BUTTON, bar_style.fg(Color::Cyan)),
                back_area,
            );
        }
    }
}
