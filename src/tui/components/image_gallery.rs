//! # ImageGallery Component
//!
//! Horizontal strip of a movie's images, one tile per image reference,
//! scrolled a whole tile at a time.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GalleryState` lives in the detail screen's state
//! - `ImageGallery` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const TILE_WIDTH: u16 = 32;
const TILE_GAP: u16 = 1;

pub struct GalleryState {
    /// Index of the leftmost visible tile
    pub first: usize,
    /// Largest `first` that still moves the view, as of the last frame
    last_start: usize,
    scroll_state: ScrollViewState,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self {
            first: 0,
            last_start: len.saturating_sub(1),
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn scroll_left(&mut self) {
        self.first = self.first.saturating_sub(1);
    }

    pub fn scroll_right(&mut self) {
        if self.first < self.last_start {
            self.first += 1;
        }
    }
}

impl EventHandler for GalleryState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft | TuiEvent::ScrollLeft => self.scroll_left(),
            TuiEvent::CursorRight | TuiEvent::ScrollRight => self.scroll_right(),
            _ => {}
        }
        None
    }
}

pub struct ImageGallery<'a> {
    pub images: &'a [String],
    pub state: &'a mut GalleryState,
}

impl<'a> ImageGallery<'a> {
    pub fn new(images: &'a [String], state: &'a mut GalleryState) -> Self {
        Self { images, state }
    }
}

impl<'a> Component for ImageGallery<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.images.is_empty() {
            let empty = Paragraph::new("No images.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let stride = usize::from(TILE_WIDTH + TILE_GAP);
        // Only as many tiles as fit on a u16-wide canvas are laid out
        let laid_out = self.images.len().min(usize::from(u16::MAX) / stride);
        let canvas_width = (laid_out * stride) as u16 - TILE_GAP;
        // Leave a row for the horizontal scrollbar
        let tile_height = area.height.saturating_sub(1);

        let mut scroll_view = ScrollView::new(Size::new(canvas_width, tile_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Automatic);

        for (i, image) in self.images.iter().take(laid_out).enumerate() {
            let x = (i * stride) as u16;
            let tile = Paragraph::new(image.as_str())
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(format!(" {}/{} ", i + 1, self.images.len())),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            scroll_view.render_widget(tile, Rect::new(x, 0, TILE_WIDTH, tile_height));
        }

        // Past `last_start` the view is pinned to the right edge, so a
        // further step would not move it
        let max_x = canvas_width.saturating_sub(area.width);
        self.state.last_start = usize::from(max_x).div_ceil(stride).min(laid_out - 1);
        self.state.first = self.state.first.min(self.state.last_start);
        let x = ((self.state.first * stride) as u16).min(max_x);
        self.state.scroll_state.set_offset(Position { x, y: 0 });

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
