//! Frame composition: top bar, active screen, bottom bar.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ [←]        Title             │  TopBar      (1 row)
//! ├──────────────────────────────┤
//! │                              │
//! │        active screen         │  Screen      (rest)
//! │                              │
//! ├──────────────────────────────┤
//! │  ⌂ Home          key hints   │  BottomBar   (1 row)
//! └──────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BottomBar, Destination, TopBar};

/// Split the frame into top bar, body and bottom bar.
pub fn shell_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [top_area, body_area, bottom_area] = shell_areas(frame.area());

    TopBar::new(tui.screen.title(), app.navigator.can_go_back()).render(frame, top_area);

    tui.screen.render(frame, body_area);

    BottomBar::new(
        app.status_message.clone(),
        tui.screen.hints(),
        tui.screen.active_destination(),
    )
    .render(frame, bottom_area);
}

/// A click on the app bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Back,
    Destination(Destination),
}

/// Hit test the app bars. Returns `None` for clicks on the body or on empty bar space.
pub fn hit_test_chrome(column: u16, row: u16, frame_area: Rect, show_back: bool) -> Option<ChromeHit> {
    let [top_area, _body_area, bottom_area] = shell_areas(frame_area);
    let position = Position::new(column, row);

    if let Some(back) = TopBar::new("", show_back).back_button_area(top_area)
        && back.contains(position)
    {
        return Some(ChromeHit::Back);
    }

    BottomBar::destination_areas(bottom_area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, destination)| ChromeHit::Destination(destination))
}
