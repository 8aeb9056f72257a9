//! # MovieRow Component
//!
//! One movie summary card, shared by the watchlist and the detail screen.
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │┌ Avatar image ──────────────────── [♡] ┐│  ← favorite icon
//! ││        images/tt0499549/poster.jpg     ││
//! │└────────────────────────────────────────┘│
//! │Avatar                                 [▼]│  ← expand icon
//! │Director: James Cameron                   │  ← details panel (expanded)
//! │...                                       │
//! ╰──────────────────────────────────────────╯
//! ```
//!
//! ## State
//!
//! `RowState` holds the two per-row flags, `expanded` and `favorite`, plus the
//! reveal progress of the details panel. It is presentation state only: it is
//! created with the screen and dropped with it, and nothing is written back to
//! the movie.
//!
//! ## Hit-testing
//!
//! `RowLayout` is computed from the row's area and is shared by rendering and
//! mouse handling, so the icon targets clicked are exactly the ones drawn.
//! Icons are tested before the card body: an icon click never reaches the
//! card's own handler.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::core::movie::Movie;
use crate::tui::components::{MovieDetails, truncate_to_width};

/// Height of the hero image box, borders included.
pub const IMAGE_HEIGHT: u16 = 5;
/// Width of an icon button such as `[♥]`.
pub const ICON_WIDTH: u16 = 3;
/// Animation ticks for the details panel to fully open or close.
pub const REVEAL_STEPS: u8 = 4;

const CARD_OVERHEAD: u16 = 2;
const TITLE_HEIGHT: u16 = 1;

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    expanded: bool,
    favorite: bool,
    /// Details panel progress, 0 (hidden) ..= REVEAL_STEPS (fully shown)
    reveal: u8,
    animated: bool,
}

impl RowState {
    pub fn new(animated: bool) -> Self {
        Self {
            expanded: false,
            favorite: false,
            reveal: 0,
            animated,
        }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn favorite(&self) -> bool {
        self.favorite
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        if !self.animated {
            self.reveal = self.target();
        }
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    /// Advance the reveal animation one step. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let target = self.target();
        if self.reveal < target {
            self.reveal += 1;
            true
        } else if self.reveal > target {
            self.reveal -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_animating(&self) -> bool {
        self.reveal != self.target()
    }

    /// Visible share of a details panel whose full height is `full`.
    pub fn revealed_height(&self, full: u16) -> u16 {
        (u32::from(full) * u32::from(self.reveal) / u32::from(REVEAL_STEPS)) as u16
    }

    pub fn favorite_label(&self) -> &'static str {
        if self.favorite {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        }
    }

    pub fn expand_label(&self) -> &'static str {
        if self.expanded { "Collapse" } else { "Expand" }
    }

    fn target(&self) -> u8 {
        if self.expanded { REVEAL_STEPS } else { 0 }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// What a click on a row landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Favorite,
    Expand,
    Card,
}

/// Sub-areas of a rendered row, all clipped to the row's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub card: Rect,
    pub image: Rect,
    pub favorite_icon: Rect,
    pub title: Rect,
    pub expand_icon: Rect,
    pub details: Rect,
}

impl RowLayout {
    pub fn new(area: Rect, details_height: u16) -> Self {
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );

        let image = Rect::new(inner.x, inner.y, inner.width, IMAGE_HEIGHT);
        // Inside the image border, one cell of padding from the right edge
        let favorite_icon = Rect::new(
            (image.x + image.width).saturating_sub(2 + ICON_WIDTH),
            image.y + 1,
            ICON_WIDTH,
            1,
        );
        let title = Rect::new(inner.x, inner.y + IMAGE_HEIGHT, inner.width, TITLE_HEIGHT);
        let expand_icon = Rect::new(
            (title.x + title.width).saturating_sub(ICON_WIDTH),
            title.y,
            ICON_WIDTH,
            1,
        );
        let details = Rect::new(inner.x, title.y + TITLE_HEIGHT, inner.width, details_height);

        Self {
            card: area,
            image: image.intersection(inner),
            favorite_icon: favorite_icon.intersection(inner),
            title: title.intersection(inner),
            expand_icon: expand_icon.intersection(inner),
            details: details.intersection(inner),
        }
    }

    /// Icons first, then the card body.
    pub fn hit(&self, position: Position) -> Option<RowHit> {
        if self.favorite_icon.contains(position) {
            Some(RowHit::Favorite)
        } else if self.expand_icon.contains(position) {
            Some(RowHit::Expand)
        } else if self.card.contains(position) {
            Some(RowHit::Card)
        } else {
            None
        }
    }
}

// ============================================================================
// Widget
// ============================================================================

/// Transient render wrapper: props plus a borrowed `RowState`.
pub struct MovieRow<'a> {
    pub movie: &'a Movie,
    pub state: &'a RowState,
    pub selected: bool,
}

impl<'a> MovieRow<'a> {
    pub fn new(movie: &'a Movie, state: &'a RowState, selected: bool) -> Self {
        Self {
            movie,
            state,
            selected,
        }
    }

    /// Row height at the given width, including the revealed part of the panel.
    pub fn calculate_height(movie: &Movie, state: &RowState, width: u16) -> u16 {
        CARD_OVERHEAD + IMAGE_HEIGHT + TITLE_HEIGHT + details_height(movie, state, width)
    }

    pub fn layout(movie: &Movie, state: &RowState, area: Rect) -> RowLayout {
        RowLayout::new(area, details_height(movie, state, area.width))
    }
}

fn details_height(movie: &Movie, state: &RowState, row_width: u16) -> u16 {
    let inner_width = row_width.saturating_sub(2);
    state.revealed_height(MovieDetails::calculate_height(movie, inner_width))
}

impl<'a> Widget for MovieRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let layout = MovieRow::layout(self.movie, self.state, area);

        let border_style = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .render(layout.card, buf);

        // Hero image placeholder: the terminal shows the reference, not pixels
        let image_block = Block::bordered()
            .title(format!(" {} image ", self.movie.title))
            .border_style(Style::default().fg(Color::DarkGray));
        let image_inner = image_block.inner(layout.image);
        image_block.render(layout.image, buf);
        let image_text = self.movie.hero_image().unwrap_or("no image");
        let middle = Rect::new(
            image_inner.x,
            image_inner.y + image_inner.height / 2,
            image_inner.width,
            image_inner.height.min(1),
        );
        Paragraph::new(image_text)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center)
            .render(middle, buf);

        let favorite_icon = if self.state.favorite() {
            Span::styled("[♥]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        } else {
            Span::styled("[♡]", Style::default().fg(Color::Gray))
        };
        Line::from(favorite_icon).render(layout.favorite_icon, buf);

        let title_width = layout.title.width.saturating_sub(ICON_WIDTH + 1) as usize;
        Line::from(Span::styled(
            truncate_to_width(&self.movie.title, title_width),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(layout.title, buf);

        let expand_icon = if self.state.expanded() { "[▲]" } else { "[▼]" };
        Line::from(Span::styled(expand_icon, Style::default().fg(Color::Cyan)))
            .render(layout.expand_icon, buf);

        if layout.details.height > 0 {
            MovieDetails::new(self.movie).render(layout.details, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, sample_movie};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_new_row_is_collapsed_and_unmarked() {
        let state = RowState::new(true);
        assert!(!state.expanded());
        assert!(!state.favorite());
        assert!(!state.is_animating());
    }

    #[test]
    fn test_expand_parity() {
        for taps in 0..7 {
            let mut state = RowState::new(false);
            for _ in 0..taps {
                state.toggle_expanded();
            }
            assert_eq!(state.expanded(), taps % 2 == 1, "after {taps} taps");
        }
    }

    #[test]
    fn test_favorite_and_expanded_are_independent() {
        let mut state = RowState::new(false);
        state.toggle_favorite();
        assert!(state.favorite());
        assert!(!state.expanded());

        state.toggle_expanded();
        assert!(state.favorite());
        assert!(state.expanded());

        state.toggle_favorite();
        assert!(!state.favorite());
        assert!(state.expanded());
    }

    #[test]
    fn test_reveal_animates_in_and_out() {
        let mut state = RowState::new(true);
        state.toggle_expanded();
        assert!(state.is_animating());
        assert_eq!(state.revealed_height(8), 0);

        let mut ticks = 0;
        while state.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, REVEAL_STEPS);
        assert_eq!(state.revealed_height(8), 8);

        state.toggle_expanded();
        assert!(state.tick());
        assert_eq!(state.revealed_height(8), 6);
    }

    #[test]
    fn test_reveal_is_instant_without_animation() {
        let mut state = RowState::new(false);
        state.toggle_expanded();
        assert!(!state.is_animating());
        assert_eq!(state.revealed_height(10), 10);
        state.toggle_expanded();
        assert_eq!(state.revealed_height(10), 0);
    }

    #[test]
    fn test_labels() {
        let mut state = RowState::new(false);
        assert_eq!(state.favorite_label(), "Add to Favorites");
        assert_eq!(state.expand_label(), "Expand");
        state.toggle_favorite();
        state.toggle_expanded();
        assert_eq!(state.favorite_label(), "Remove from Favorites");
        assert_eq!(state.expand_label(), "Collapse");
    }

    #[test]
    fn test_height_collapsed_and_expanded() {
        let movie = sample_movie("tt1");
        let mut state = RowState::new(false);
        assert_eq!(MovieRow::calculate_height(&movie, &state, 60), 8);
        state.toggle_expanded();
        let full = MovieDetails::calculate_height(&movie, 58);
        assert_eq!(MovieRow::calculate_height(&movie, &state, 60), 8 + full);
    }

    #[test]
    fn test_layout_hits_icons_before_card() {
        let layout = RowLayout::new(Rect::new(0, 0, 40, 8), 0);

        let fav = layout.favorite_icon;
        assert_eq!(layout.hit(Position::new(fav.x, fav.y)), Some(RowHit::Favorite));

        let exp = layout.expand_icon;
        assert_eq!(layout.hit(Position::new(exp.x + 2, exp.y)), Some(RowHit::Expand));

        assert_eq!(layout.hit(Position::new(2, 3)), Some(RowHit::Card));
        assert_eq!(layout.hit(Position::new(0, 0)), Some(RowHit::Card));
        assert_eq!(layout.hit(Position::new(40, 0)), None);
        assert_eq!(layout.hit(Position::new(0, 8)), None);
    }

    #[test]
    fn test_layout_positions() {
        let layout = RowLayout::new(Rect::new(0, 10, 40, 8), 0);
        // favorite: inside image border, one cell from the right
        assert_eq!(layout.favorite_icon, Rect::new(34, 12, 3, 1));
        // expand: right edge of the title line
        assert_eq!(layout.expand_icon, Rect::new(36, 16, 3, 1));
        assert_eq!(layout.title.y, 16);
        assert_eq!(layout.details.height, 0);
    }

    #[test]
    fn test_layout_clipped_to_short_area() {
        let layout = RowLayout::new(Rect::new(0, 0, 40, 4), 5);
        assert_eq!(layout.title.height, 0);
        assert_eq!(layout.details.height, 0);
        assert!(!layout.expand_icon.contains(Position::new(36, 6)));
    }

    #[test]
    fn test_render_collapsed() {
        let movie = sample_movie("tt3");
        let state = RowState::new(false);
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MovieRow::new(&movie, &state, false), f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Movie tt3 image"));
        assert!(text.contains("images/tt3/poster.jpg"));
        assert!(text.contains("Movie tt3"));
        assert!(text.contains("[♡]"));
        assert!(text.contains("[▼]"));
        assert!(!text.contains("Director"));
    }

    #[test]
    fn test_render_expanded_favorite() {
        let movie = sample_movie("tt3");
        let mut state = RowState::new(false);
        state.toggle_expanded();
        state.toggle_favorite();
        let height = MovieRow::calculate_height(&movie, &state, 50);
        let backend = TestBackend::new(50, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MovieRow::new(&movie, &state, true), f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("[♥]"));
        assert!(text.contains("[▲]"));
        assert!(text.contains("Director: Director tt3"));
        assert!(text.contains("Plot: Plot of tt3."));
    }

    #[test]
    fn test_render_without_images() {
        let movie = Movie {
            images: Vec::new(),
            ..sample_movie("tt3")
        };
        let state = RowState::new(false);
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MovieRow::new(&movie, &state, false), f.area()))
            .unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("no image"));
    }
}
