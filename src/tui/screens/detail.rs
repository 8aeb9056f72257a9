//! # Detail Screen
//!
//! One movie: its `MovieRow` (same component as the watchlist) followed by
//! the image gallery. When the route's movie id is absent or unknown the body
//! stays empty; the bars around it still render.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::movie::Movie;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{GalleryState, ImageGallery, MovieRow, RowHit, RowState};
use crate::tui::event::TuiEvent;

/// Rows below which the gallery is not drawn.
const MIN_GALLERY_HEIGHT: u16 = 3;

pub struct DetailState {
    pub movie: Option<Movie>,
    pub row: RowState,
    pub gallery: GalleryState,
    /// Screen area of the movie row in the last frame
    row_area: Rect,
}

impl DetailState {
    pub fn new(movie: Option<Movie>, animated: bool) -> Self {
        let image_count = movie.as_ref().map_or(0, |m| m.images.len());
        Self {
            movie,
            row: RowState::new(animated),
            gallery: GalleryState::new(image_count),
            row_area: Rect::default(),
        }
    }

    /// Top-bar title: the movie's title, or empty when there is no movie.
    pub fn title(&self) -> &str {
        self.movie.as_ref().map_or("", |m| m.title.as_str())
    }

    pub fn tick(&mut self) -> bool {
        self.row.tick()
    }

    pub fn is_animating(&self) -> bool {
        self.row.is_animating()
    }

    /// Icon clicks flip their flag. The card body has no action here.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(movie) = &self.movie else {
            return;
        };
        let layout = MovieRow::layout(movie, &self.row, self.row_area);
        match layout.hit(Position::new(column, row)) {
            Some(RowHit::Favorite) => self.row.toggle_favorite(),
            Some(RowHit::Expand) => self.row.toggle_expanded(),
            Some(RowHit::Card) | None => {}
        }
    }
}

impl EventHandler for DetailState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.movie.is_none() {
            return None;
        }
        match event {
            TuiEvent::InputChar('f') => self.row.toggle_favorite(),
            TuiEvent::InputChar(' ') | TuiEvent::InputChar('e') => self.row.toggle_expanded(),
            TuiEvent::MouseClick(column, row) => self.handle_click(*column, *row),
            _ => {
                self.gallery.handle_event(event);
            }
        }
        None
    }
}

/// Transient render wrapper for the detail screen.
pub struct DetailScreen<'a> {
    pub state: &'a mut DetailState,
}

impl<'a> DetailScreen<'a> {
    pub fn new(state: &'a mut DetailState) -> Self {
        Self { state }
    }
}

impl<'a> Component for DetailScreen<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(movie) = &self.state.movie else {
            self.state.row_area = Rect::default();
            return;
        };

        let row_height = MovieRow::calculate_height(movie, &self.state.row, area.width);
        let [row_area, _gap, gallery_area] = Layout::vertical([
            Constraint::Length(row_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(MovieRow::new(movie, &self.state.row, false), row_area);
        self.state.row_area = row_area;

        if gallery_area.height >= MIN_GALLERY_HEIGHT {
            ImageGallery::new(&movie.images, &mut self.state.gallery).render(frame, gallery_area);
        }
    }
}
