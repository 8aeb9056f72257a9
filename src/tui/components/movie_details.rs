//! # MovieDetails Component
//!
//! The expandable panel under a movie row: director, year, genre, actors,
//! rating, a divider, then the plot.
//!
//! Text is wrapped up front with `textwrap` so the height reported by
//! `calculate_height` matches exactly what `render` draws. The row uses that
//! height to size its reveal animation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::movie::Movie;

pub struct MovieDetails<'a> {
    pub movie: &'a Movie,
}

impl<'a> MovieDetails<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    /// Full (unclipped) panel height at the given width.
    pub fn calculate_height(movie: &Movie, width: u16) -> u16 {
        detail_lines(movie, width).len() as u16
    }
}

impl<'a> Widget for MovieDetails<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clipped to `area` while the panel is animating in or out
        Paragraph::new(detail_lines(self.movie, area.width)).render(area, buf);
    }
}

fn detail_lines(movie: &Movie, width: u16) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::raw("")];

    let fields = [
        ("Director", movie.director.clone()),
        ("Released", movie.year.to_string()),
        ("Genre", movie.genre.clone()),
        ("Actors", movie.actors.clone()),
        ("Rating", movie.rating.to_string()),
    ];
    for (label, value) in fields {
        push_field(&mut lines, label, &value, width, label_style);
    }

    let rule_width = width.saturating_sub(2) as usize;
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("─".repeat(rule_width), Style::default().fg(Color::DarkGray)),
    ]));

    push_field(&mut lines, "Plot", &movie.plot, width, label_style);
    lines
}

/// Wrap `"{label}: {value}"`, styling the label on the first line only.
fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, width: u16, label_style: Style) {
    let text = format!("{label}: {value}");
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);

    let prefix_len = label.len() + 1;
    for (i, wrapped) in textwrap::wrap(&text, options).into_iter().enumerate() {
        let wrapped = wrapped.into_owned();
        if i == 0 && wrapped.len() >= prefix_len {
            let (head, tail) = wrapped.split_at(prefix_len);
            lines.push(Line::from(vec![
                Span::styled(head.to_string(), label_style),
                Span::raw(tail.to_string()),
            ]));
        } else {
            lines.push(Line::raw(wrapped));
        }
    }
}
