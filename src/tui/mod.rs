//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! 1. App-level keys (quit, back, home) and clicks on the app bars become
//!    actions directly.
//! 2. Everything else goes to the active screen, which may answer with a
//!    `ScreenEvent` (open a movie) that becomes an action.
//! 3. When `update()` reports `Effect::ScreenChanged`, the screen is rebuilt
//!    from the new route, so row flags never survive a navigation.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a details panel opening or closing): ticks and redraws
//!   every `tick_rate_ms`.
//! - **Idle**: sleeps up to `idle_poll_ms`, only redraws on events.

mod component;
mod components;
mod event;
mod screens;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::components::Destination;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{Screen, ScreenEvent};
use crate::tui::ui::ChromeHit;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// State of the screen for the current route
    pub screen: Screen,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            screen: Screen::for_route(app),
        }
    }

    /// Throw away the current screen state and build the one for the current route.
    pub fn rebuild(&mut self, app: &App) {
        debug!("Building screen for {}", app.current_route());
        self.screen = Screen::for_route(app);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::try_init()?;
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui, config),
        Err(e) => Err(e),
    };

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let idle_poll = Duration::from_millis(config.idle_poll_ms);
    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.screen.is_animating() {
            tui.screen.tick();
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.screen.is_animating() {
            tick_rate
        } else {
            idle_poll
        };

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            let frame_area = terminal.get_frame().area();
            if handle_event(app, tui, &event, frame_area) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one input event and apply the resulting action, if any.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent, frame_area: Rect) -> Effect {
    let action = match event {
        // Resize just needs a redraw
        TuiEvent::Resize => None,
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Back | TuiEvent::Escape => Some(Action::Back),
        TuiEvent::InputChar('h') => Some(Action::Home),
        TuiEvent::MouseClick(column, row) => {
            match ui::hit_test_chrome(*column, *row, frame_area, app.navigator.can_go_back()) {
                Some(ChromeHit::Back) => Some(Action::Back),
                Some(ChromeHit::Destination(Destination::Home)) => Some(Action::Home),
                None => screen_action(tui, event),
            }
        }
        _ => screen_action(tui, event),
    };

    let Some(action) = action else {
        return Effect::None;
    };
    debug!("Dispatching {:?}", action);
    let effect = update(app, action);
    if effect == Effect::ScreenChanged {
        tui.rebuild(app);
    }
    effect
}

fn screen_action(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    tui.screen.handle_event(event).map(|screen_event| match screen_event {
        ScreenEvent::OpenMovie(id) => Action::Navigate(Route::detail(id)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    /// Render once so screens know where they were drawn.
    fn draw(app: &App, tui: &mut TuiState) {
        let backend = TestBackend::new(AREA.width, AREA.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    }

    fn watchlist_flags(tui: &TuiState) -> Vec<(bool, bool)> {
        match &tui.screen {
            Screen::Watchlist(state) => state
                .rows
                .iter()
                .map(|row| (row.state.expanded(), row.state.favorite()))
                .collect(),
            Screen::Detail(_) => panic!("expected watchlist"),
        }
    }

    #[test]
    fn test_card_click_navigates_to_detail() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        draw(&app, &mut tui);

        // Body starts at y = 1; row 0 covers 1..9. Click its image, left side.
        let effect = handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(5, 3), AREA);
        assert_eq!(effect, Effect::ScreenChanged);
        assert_eq!(app.current_route().to_string(), "detailScreen/tt0");
        assert!(matches!(tui.screen, Screen::Detail(_)));
    }

    #[test]
    fn test_enter_opens_selected_row() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        draw(&app, &mut tui);

        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown, AREA);
        handle_event(&mut app, &mut tui, &TuiEvent::Submit, AREA);
        assert_eq!(app.current_route(), &Route::detail("tt1"));
    }

    #[test]
    fn test_row_flags_reset_after_navigating_back() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        draw(&app, &mut tui);

        handle_event(&mut app, &mut tui, &TuiEvent::InputChar('f'), AREA);
        handle_event(&mut app, &mut tui, &TuiEvent::InputChar(' '), AREA);
        assert_eq!(watchlist_flags(&tui)[0], (true, true));

        handle_event(&mut app, &mut tui, &TuiEvent::Submit, AREA);
        let effect = handle_event(&mut app, &mut tui, &TuiEvent::Escape, AREA);
        assert_eq!(effect, Effect::ScreenChanged);
        assert_eq!(watchlist_flags(&tui), vec![(false, false), (false, false)]);
    }

    #[test]
    fn test_back_button_click() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, &TuiEvent::Submit, AREA);
        draw(&app, &mut tui);

        let effect = handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(1, 0), AREA);
        assert_eq!(effect, Effect::ScreenChanged);
        assert_eq!(app.current_route(), &Route::Watchlist);
    }

    #[test]
    fn test_home_destination_click() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, &TuiEvent::Submit, AREA);
        draw(&app, &mut tui);

        let effect = handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(2, 29), AREA);
        assert_eq!(effect, Effect::ScreenChanged);
        assert_eq!(app.current_route(), &Route::Watchlist);
    }

    #[test]
    fn test_escape_at_root_does_nothing() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(
            handle_event(&mut app, &mut tui, &TuiEvent::Escape, AREA),
            Effect::None
        );
        assert_eq!(app.current_route(), &Route::Watchlist);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Quit, AREA), Effect::Quit);
        assert_eq!(
            handle_event(&mut app, &mut tui, &TuiEvent::ForceQuit, AREA),
            Effect::Quit
        );
    }

    #[test]
    fn test_resize_is_noop() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(
            handle_event(&mut app, &mut tui, &TuiEvent::Resize, AREA),
            Effect::None
        );
    }
}
