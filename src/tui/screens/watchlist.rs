//! # Watchlist Screen
//!
//! Vertical, scrollable list of `MovieRow`s for the first movies of the
//! catalog. Clicking a card body (or pressing Enter on the selected row)
//! emits `WatchlistEvent::Open` with that row's movie id; the icons only flip
//! their own row's flags.
//!
//! Rows are laid out top to bottom on a `ScrollView` canvas. Row positions
//! are recomputed from the current row states whenever they are needed, so a
//! click is resolved against the same geometry the last frame drew.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::movie::Movie;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{MovieRow, RowHit, RowState};
use crate::tui::event::TuiEvent;

pub struct WatchlistRow {
    pub movie: Movie,
    pub state: RowState,
}

/// Persistent state of the watchlist screen. Rebuilt on every visit.
pub struct WatchlistState {
    pub rows: Vec<WatchlistRow>,
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Screen area of the list in the last frame
    area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistEvent {
    Open(String),
}

impl WatchlistState {
    pub fn new(movies: Vec<Movie>, animated: bool) -> Self {
        Self {
            rows: movies
                .into_iter()
                .map(|movie| WatchlistRow {
                    movie,
                    state: RowState::new(animated),
                })
                .collect(),
            selected: 0,
            scroll_state: ScrollViewState::default(),
            area: Rect::default(),
        }
    }

    pub fn selected_row(&self) -> Option<&WatchlistRow> {
        self.rows.get(self.selected)
    }

    pub fn tick(&mut self) -> bool {
        let mut moved = false;
        for row in &mut self.rows {
            moved |= row.state.tick();
        }
        moved
    }

    pub fn is_animating(&self) -> bool {
        self.rows.iter().any(|row| row.state.is_animating())
    }

    fn content_width(&self) -> u16 {
        // -1 for the scrollbar column
        self.area.width.saturating_sub(1)
    }

    /// Canvas rect of each row at the current width.
    fn row_rects(&self) -> Vec<Rect> {
        let width = self.content_width();
        let mut y: u16 = 0;
        self.rows
            .iter()
            .map(|row| {
                let height = MovieRow::calculate_height(&row.movie, &row.state, width);
                let rect = Rect::new(0, y, width, height);
                y = y.saturating_add(height);
                rect
            })
            .collect()
    }

    fn clamp_scroll(&mut self) {
        let total: u16 = self.row_rects().iter().map(|r| r.height).sum();
        let max_y = total.saturating_sub(self.area.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Scroll so the selected row is visible, aligning its top edge if it
    /// is taller than the viewport.
    fn scroll_to_selected(&mut self) {
        let Some(rect) = self.row_rects().get(self.selected).copied() else {
            return;
        };
        let offset_y = self.scroll_state.offset().y;
        let viewport = self.area.height;
        if rect.y < offset_y || rect.height > viewport {
            self.scroll_state.set_offset(Position { x: 0, y: rect.y });
        } else if rect.y + rect.height > offset_y + viewport {
            let y = (rect.y + rect.height).saturating_sub(viewport);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }

    fn toggle_selected(&mut self, toggle: fn(&mut RowState)) {
        if let Some(row) = self.rows.get_mut(self.selected) {
            toggle(&mut row.state);
        }
    }

    /// Resolve a click at screen coordinates. Icons flip their flag; the
    /// card body opens the movie.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<WatchlistEvent> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let canvas = Position::new(
            column - self.area.x,
            row - self.area.y + self.scroll_state.offset().y,
        );

        let rects = self.row_rects();
        let index = rects.iter().position(|rect| rect.contains(canvas))?;
        let target = &mut self.rows[index];
        let layout = MovieRow::layout(&target.movie, &target.state, rects[index]);
        let hit = layout.hit(canvas)?;
        debug!("Watchlist click on row {} ({}): {:?}", index, target.movie.id, hit);

        self.selected = index;
        match hit {
            RowHit::Favorite => {
                target.state.toggle_favorite();
                None
            }
            RowHit::Expand => {
                target.state.toggle_expanded();
                None
            }
            RowHit::Card => Some(WatchlistEvent::Open(target.movie.id.clone())),
        }
    }
}

impl EventHandler for WatchlistState {
    type Event = WatchlistEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                self.scroll_to_selected();
                None
            }
            TuiEvent::InputChar('f') => {
                self.toggle_selected(RowState::toggle_favorite);
                None
            }
            TuiEvent::InputChar(' ') | TuiEvent::InputChar('e') => {
                self.toggle_selected(RowState::toggle_expanded);
                None
            }
            TuiEvent::Submit => self
                .selected_row()
                .map(|row| WatchlistEvent::Open(row.movie.id.clone())),
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::MouseClick(column, row) => self.handle_click(*column, *row),
            _ => None,
        }
    }
}

/// Transient render wrapper for the watchlist.
pub struct WatchlistScreen<'a> {
    pub state: &'a mut WatchlistState,
}

impl<'a> WatchlistScreen<'a> {
    pub fn new(state: &'a mut WatchlistState) -> Self {
        Self { state }
    }
}

impl<'a> Component for WatchlistScreen<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;

        if self.state.rows.is_empty() {
            let empty = Paragraph::new("Your watchlist is empty.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let rects = self.state.row_rects();
        let total_height: u16 = rects.iter().map(|r| r.height).sum();
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(self.state.content_width(), total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, (row, rect)) in self.state.rows.iter().zip(&rects).enumerate() {
            let selected = i == self.state.selected;
            scroll_view.render_widget(MovieRow::new(&row.movie, &row.state, selected), *rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
