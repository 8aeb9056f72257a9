//! # BottomBar Component
//!
//! Single-line navigation bar: the fixed destination shortcuts on the left,
//! then either the status message or the active screen's key hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;

/// Fixed navigation destinations offered by the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
}

impl Destination {
    pub const ALL: [Destination; 1] = [Destination::Home];

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Home => " ⌂ Home ",
        }
    }
}

pub struct BottomBar {
    /// Transient status text; replaces the hints when non-empty
    pub status_message: String,
    /// Key hints for the active screen
    pub hints: String,
    /// Destination matching the current screen, drawn highlighted
    pub active: Option<Destination>,
}

impl BottomBar {
    pub fn new(
        status_message: impl Into<String>,
        hints: impl Into<String>,
        active: Option<Destination>,
    ) -> Self {
        Self {
            status_message: status_message.into(),
            hints: hints.into(),
            active,
        }
    }

    /// Click targets for each destination, laid out left to right.
    pub fn destination_areas(area: Rect) -> Vec<(Rect, Destination)> {
        let mut x = area.x;
        let mut areas = Vec::new();
        for destination in Destination::ALL {
            let width = (destination.label().width() as u16).min((area.x + area.width).saturating_sub(x));
            if width == 0 || area.height == 0 {
                break;
            }
            areas.push((Rect::new(x, area.y, width, 1), destination));
            x += width + 1;
        }
        areas
    }
}

impl Component for BottomBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(Color::Indexed(236));
        frame.render_widget(Paragraph::new("").style(bar_style), area);

        let destinations = Self::destination_areas(area);
        for (rect, destination) in &destinations {
            let style = if self.active == Some(*destination) {
                bar_style.fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                bar_style.fg(Color::Gray)
            };
            frame.render_widget(Span::styled(destination.label(), style), *rect);
        }

        let used = destinations
            .last()
            .map(|(rect, _)| rect.x + rect.width + 1 - area.x)
            .unwrap_or(0);
        let info_area = Rect::new(
            area.x + used.min(area.width),
            area.y,
            area.width.saturating_sub(used),
            area.height.min(1),
        );

        let (text, style) = if self.status_message.is_empty() {
            (self.hints.as_str(), bar_style.fg(Color::DarkGray))
        } else {
            (self.status_message.as_str(), bar_style.fg(Color::Yellow))
        };
        let text = truncate_to_width(text, info_area.width.saturating_sub(1) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Right),
            info_area,
        );
    }
}
