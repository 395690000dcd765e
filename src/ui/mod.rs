//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, gender toggle, status line and toast
//! - `screens` - Browsing screens (home, explore, salon, artist, lists)
//! - `booking` - At-home booking wizard and the salon booking recap

mod booking;
mod header;
mod screens;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar;
use crate::preferences::Preferences;
use crate::theme::{Styles, UiConstants};
use header::HeaderRenderer;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Block,
    Frame,
};
use std::time::Instant;

/// Main UI renderer
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the whole frame for the current state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        preferences: &Preferences,
        keybinding_ctx: &KeybindingContext,
        now: Instant,
    ) {
        let gender = preferences.gender();
        let mode = state.mode();
        let area = f.area();
        f.render_widget(Block::default().style(Styles::panel_bg()), area);

        let tabs_height = if state.route.shows_bottom_nav() {
            UiConstants::NAV_BAR_HEIGHT
        } else {
            0
        };
        let [header_area, body, status_area, tabs_area, hints_area] = Layout::vertical([
            Constraint::Length(UiConstants::HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(tabs_height),
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
        ])
        .areas(area);

        self.header.render(f, header_area, &state.route, gender);
        render_body(f, body, state, mode, gender, now);
        header::render_status(f, status_area, &state.status_message);
        if tabs_height > 0 {
            nav_bar::render_tabs(f, tabs_area, &state.route, gender);
        }
        nav_bar::render_hints(f, hints_area, &keybinding_ctx.get_nav_items(&mode), gender);

        if let Some(message) = state.active_toast(now) {
            header::render_toast(f, body, message);
        }

        if state.help_visible {
            HelpOverlay::new(&mode, keybinding_ctx, gender).render(f, area);
        }
    }
}

fn render_body(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    mode: AppMode,
    gender: crate::types::Gender,
    now: Instant,
) {
    match mode {
        AppMode::Home => screens::render_home(f, area, state, gender, now),
        AppMode::AtHome => screens::render_at_home(f, area, state, gender),
        AppMode::Explore => screens::render_explore(f, area, state, gender),
        AppMode::Bookings => screens::render_bookings(f, area, state, gender),
        AppMode::Offers => screens::render_offers(f, area, state, gender),
        AppMode::Profile => screens::render_profile(f, area, gender),
        AppMode::SalonDetail => {
            if let Some(screen) = &state.salon {
                screens::render_salon(f, area, screen, gender, now);
            }
        }
        AppMode::ArtistProfile => {
            if let Some(screen) = &state.artist {
                screens::render_artist(f, area, screen, gender);
            }
        }
        AppMode::SalonBooking => {
            if let Some(screen) = &state.salon_booking {
                booking::render_salon_booking(f, area, screen, gender);
            }
        }
        AppMode::AtHomeBooking => {
            if let Some(screen) = &state.wizard {
                booking::render_wizard(f, area, screen, gender);
            }
        }
        AppMode::NotFound => screens::render_not_found(f, area, &state.route, gender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::types::Gender;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, now: Instant) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = UiRenderer::new();
        terminal
            .draw(|f| {
                renderer.render(
                    f,
                    app.state(),
                    app.preferences(),
                    app.keybinding_context(),
                    now,
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app(now: Instant) -> App {
        App::with_clock(
            Preferences::in_memory(Gender::Male),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            now,
        )
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    #[test]
    fn test_every_screen_renders() {
        let now = Instant::now();
        let mut app = app(now);
        let later = now + std::time::Duration::from_secs(1);
        for path in [
            "/",
            "/at-home",
            "/explore",
            "/bookings",
            "/offers",
            "/profile",
            "/salon/s1",
            "/booking/s1",
            "/artist/ah1",
            "/at-home-booking/ah1",
            "/missing",
        ] {
            app.navigate(crate::routes::Route::parse(path), later);
            let screen = draw(&app, later);
            assert!(screen.contains("SalonTUI"), "{path} should render header");
        }
    }

    #[test]
    fn test_home_shows_loading_then_salons() {
        let now = Instant::now();
        let app = app(now);
        assert!(draw(&app, now).contains("Loading"));
        let later = now + std::time::Duration::from_millis(900);
        assert!(draw(&app, later).contains("Gentlemen"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let now = Instant::now();
        let mut app = app(now);
        press(&mut app, KeyCode::Char('?'), now);
        assert!(draw(&app, now).contains("Press ? or Esc to close"));
    }

    #[test]
    fn test_explore_empty_state_rendered() {
        let now = Instant::now();
        let mut app = app(now);
        press(&mut app, KeyCode::Char('3'), now);
        for c in "zzzz".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        assert!(draw(&app, now).contains("No salons found"));
    }
}
